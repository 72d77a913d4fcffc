//! Name-keyed dispatch tables.
//!
//! At session construction every app in the [`Registry`] is bound, under
//! its name, to two handlers: one that runs a fresh instance against the
//! rest of the input line, and one that prints a fresh instance's help.
//! The handlers capture the session [`Console`] and live as long as the
//! session does.

use std::collections::HashMap;
use std::io;

use tracing::debug;

use crate::console::Console;
use crate::registry::Registry;

type RunHandler = Box<dyn Fn(&str) -> anyhow::Result<bool>>;
type HelpHandler = Box<dyn Fn() -> io::Result<()>>;

/// Execution and help handlers for every registered app.
pub struct Dispatcher {
    run: HashMap<&'static str, RunHandler>,
    help: HashMap<&'static str, HelpHandler>,
}

impl Dispatcher {
    /// Bind every app in `registry` to `console`.
    pub fn bind(registry: &Registry, console: &Console) -> Self {
        let mut run: HashMap<&'static str, RunHandler> = HashMap::with_capacity(registry.len());
        let mut help: HashMap<&'static str, HelpHandler> =
            HashMap::with_capacity(registry.len());

        for app in registry.iter() {
            let run_fn = app.run_fn();
            let run_console = console.clone();
            run.insert(
                app.name(),
                Box::new(move |line: &str| run_fn(run_console.clone(), line)),
            );

            let help_fn = app.help_fn();
            let help_console = console.clone();
            help.insert(app.name(), Box::new(move || help_fn(help_console.clone())));

            debug!(app = app.name(), "bound app");
        }

        Self { run, help }
    }

    /// Run the app registered as `name` with the rest of the line.
    ///
    /// Returns `None` if no app has that name, otherwise the app's
    /// terminate signal (or its error).
    pub fn run(&self, name: &str, line: &str) -> Option<anyhow::Result<bool>> {
        let handler = self.run.get(name)?;
        Some(handler(line))
    }

    /// Print the help of the app registered as `name`.
    ///
    /// Returns `None` if no app has that name.
    pub fn help(&self, name: &str) -> Option<io::Result<()>> {
        let handler = self.help.get(name)?;
        Some(handler())
    }

    /// Check whether an app is bound under `name`.
    pub fn has(&self, name: &str) -> bool {
        self.run.contains_key(name)
    }

    /// All bound names (sorted).
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.run.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.run.len()
    }

    pub fn is_empty(&self) -> bool {
        self.run.is_empty()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("names", &self.names())
            .finish()
    }
}
