//! The fixed, ordered set of apps a shell is built from.
//!
//! A [`Registry`] is validated once, when it is created: every name must be
//! a usable command word and no two entries (or an entry and a builtin) may
//! share a name. After that it is immutable.

use std::collections::HashSet;

use nubbs_types::{NubbsError, Result};

use crate::app::AppSpec;
use crate::apps::Welcome;

/// Command words handled by the shell itself.
pub const BUILTINS: &[&str] = &["exit", "help"];

/// Ordered, validated collection of [`AppSpec`]s.
#[derive(Debug, Clone)]
pub struct Registry {
    apps: Vec<AppSpec>,
}

impl Registry {
    /// Build a registry, rejecting invalid or duplicate names.
    pub fn new(apps: Vec<AppSpec>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(apps.len());
        for app in &apps {
            let name = app.name();
            validate_name(name)?;
            if BUILTINS.contains(&name) || !seen.insert(name) {
                return Err(NubbsError::DuplicateApp { name: name.into() });
            }
        }
        Ok(Self { apps })
    }

    /// The apps the NuBBS shell ships with.
    pub fn default_apps() -> Result<Self> {
        Self::new(vec![AppSpec::of::<Welcome>()])
    }

    /// Apps in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AppSpec> {
        self.apps.iter()
    }

    /// App names in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.apps.iter().map(AppSpec::name).collect()
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "must not be empty"
    } else if name.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if name.starts_with('?') {
        "must not start with '?'"
    } else {
        return Ok(());
    };
    Err(NubbsError::InvalidAppName {
        name: name.into(),
        reason,
    })
}
