//! # nubbs-core
//!
//! The NuBBS command loop and its app-registration model.
//!
//! An [`App`] is a named unit of shell functionality. The shell is built
//! from a fixed [`Registry`] of apps; at construction every app name is
//! bound to an execution handler and a help handler in a [`Dispatcher`].
//! The [`Shell`] reads lines from a [`LineSource`], resolves the leading
//! word through the dispatcher, and writes everything to a shared
//! [`Console`].
//!
//! ```rust,ignore
//! let console = Console::new(std::io::stdout());
//! let mut shell = Shell::new(Registry::default_apps()?, console);
//! shell.run(&mut BufReadSource::new(std::io::stdin().lock()))?;
//! ```

pub mod app;
pub mod apps;
pub mod console;
pub mod dispatch;
pub mod input;
pub mod registry;
pub mod shell;

pub use app::{App, AppSpec};
pub use console::Console;
pub use dispatch::Dispatcher;
pub use input::{BufReadSource, Input, LineSource};
pub use registry::Registry;
pub use shell::Shell;

#[cfg(test)]
pub(crate) mod testing;
