//! The app contract.
//!
//! An [`App`] is a named unit of shell functionality. Apps carry no state
//! between invocations: every call builds a fresh instance bound to the
//! session's [`Console`], runs it, and drops it.
//!
//! [`AppSpec`] is the type-erased form stored in a
//! [`Registry`](crate::Registry).

use std::io;

use crate::console::Console;

/// Trait for a shell app.
///
/// Implementors provide a command name, optional help text, a constructor
/// taking the session console, and a [`run`](App::run) method that handles
/// the rest of the input line.
pub trait App: Sized {
    /// Command word that invokes this app. Must be non-empty and contain no
    /// whitespace.
    const NAME: &'static str;

    /// Static help text. `None` (or an empty string) makes
    /// [`help`](App::help) print a missing-help warning instead.
    const HELP_TEXT: Option<&'static str> = None;

    /// Build an instance bound to the session console.
    fn new(console: Console) -> Self;

    /// The console this instance writes to.
    fn console(&self) -> &Console;

    /// Handle `line`, the input after the command word.
    ///
    /// Returns `true` when the session should stop reading input.
    fn run(&mut self, line: &str) -> anyhow::Result<bool>;

    /// Write this app's help text to the console.
    fn help(&self) -> io::Result<()> {
        match Self::HELP_TEXT.filter(|text| !text.is_empty()) {
            Some(text) => self.console().print(text),
            None => self.console().warn(missing_help(Self::NAME)),
        }
    }
}

/// Warning shown when an app defines no help text.
pub fn missing_help(name: &str) -> String {
    format!("⚠\tNo help text defined for the {name} app")
}

/// Runs a fresh instance of an app against a line.
pub type RunFn = fn(Console, &str) -> anyhow::Result<bool>;

/// Prints the help of a fresh instance of an app.
pub type HelpFn = fn(Console) -> io::Result<()>;

/// Type-erased registry entry for an [`App`].
#[derive(Clone, Copy)]
pub struct AppSpec {
    name: &'static str,
    help_text: Option<&'static str>,
    run: RunFn,
    help: HelpFn,
}

impl AppSpec {
    /// Describe app type `A`.
    pub fn of<A: App>() -> Self {
        Self {
            name: A::NAME,
            help_text: A::HELP_TEXT,
            run: run_fresh::<A>,
            help: help_fresh::<A>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Help text, if the app defines a non-empty one.
    pub fn help_text(&self) -> Option<&'static str> {
        self.help_text.filter(|text| !text.is_empty())
    }

    /// First line of the help text, for command listings.
    pub fn summary(&self) -> Option<&'static str> {
        self.help_text()
            .and_then(|text| text.lines().map(str::trim).find(|l| !l.is_empty()))
    }

    pub(crate) fn run_fn(&self) -> RunFn {
        self.run
    }

    pub(crate) fn help_fn(&self) -> HelpFn {
        self.help
    }
}

impl std::fmt::Debug for AppSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppSpec")
            .field("name", &self.name)
            .field("help_text", &self.help_text)
            .finish_non_exhaustive()
    }
}

fn run_fresh<A: App>(console: Console, line: &str) -> anyhow::Result<bool> {
    A::new(console).run(line)
}

fn help_fresh<A: App>(console: Console) -> io::Result<()> {
    A::new(console).help()
}
