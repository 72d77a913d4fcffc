//! Shell configuration schema.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) yields a working shell. Fields accept both `snake_case` and
//! `camelCase` names via `#[serde(alias)]`; unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Prompt shown before each read.
pub const DEFAULT_PROMPT: &str = "(nu) ";

/// Banner printed once when the session starts.
pub const DEFAULT_INTRO: &str = "Welcome to the NuBBS shell. Type help or ? to list commands.";

fn default_prompt() -> String {
    DEFAULT_PROMPT.into()
}

fn default_intro() -> String {
    DEFAULT_INTRO.into()
}

fn default_true() -> bool {
    true
}

/// Root configuration for a NuBBS session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Prompt string displayed before each read.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Banner printed once at startup.
    #[serde(default = "default_intro")]
    pub intro: String,

    /// Whether the banner is printed at all.
    #[serde(default = "default_true", alias = "showIntro")]
    pub show_intro: bool,

    /// Whether warnings and errors are styled with ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            intro: default_intro(),
            show_intro: true,
            color: true,
        }
    }
}

impl ShellConfig {
    /// The banner to print, or `None` when it is disabled or blank.
    pub fn effective_intro(&self) -> Option<&str> {
        if self.show_intro && !self.intro.trim().is_empty() {
            Some(&self.intro)
        } else {
            None
        }
    }

    /// Reject values that would leave the shell unusable.
    pub fn validate(&self) -> crate::Result<()> {
        if self.prompt.contains('\n') {
            return Err(crate::NubbsError::ConfigInvalid {
                reason: "prompt must not contain a newline".into(),
            });
        }
        Ok(())
    }
}
