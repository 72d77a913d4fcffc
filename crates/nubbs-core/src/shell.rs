//! The NuBBS command loop.
//!
//! A [`Shell`] prints its banner once, then repeatedly prompts, reads a
//! line, and dispatches it:
//!
//! - `exit` (or end of input) -- stop
//! - `help [name]` / `?[name]` -- list commands or show one app's help
//! - `<app> [rest]` -- run the app with the rest of the line
//! - anything else -- report unknown syntax and keep going
//!
//! An app that returns an error is reported on the console and logged; the
//! session keeps running.

use comfy_table::{Table, presets::UTF8_FULL};
use tracing::{debug, info, warn};

use nubbs_types::Result;
use nubbs_types::config::{DEFAULT_INTRO, DEFAULT_PROMPT, ShellConfig};

use crate::console::Console;
use crate::dispatch::Dispatcher;
use crate::input::{Input, LineSource};
use crate::registry::Registry;

/// Help shown for the `exit` builtin.
pub const EXIT_HELP: &str = "Exits the shell";

/// Help shown for the `help` builtin.
pub const HELP_HELP: &str =
    "List available commands with \"help\" or detailed help with \"help cmd\".";

/// An interactive session over a fixed set of apps.
pub struct Shell {
    console: Console,
    registry: Registry,
    dispatcher: Dispatcher,
    prompt: String,
    intro: Option<String>,
}

impl Shell {
    /// Build a session, binding every app in `registry` to `console`.
    pub fn new(registry: Registry, console: Console) -> Self {
        let dispatcher = Dispatcher::bind(&registry, &console);
        info!(apps = registry.len(), "shell initialized");
        Self {
            console,
            registry,
            dispatcher,
            prompt: DEFAULT_PROMPT.into(),
            intro: Some(DEFAULT_INTRO.into()),
        }
    }

    /// Build a session using the prompt and banner from `config`.
    pub fn from_config(config: &ShellConfig, registry: Registry, console: Console) -> Self {
        Self::new(registry, console)
            .with_prompt(config.prompt.clone())
            .with_intro(config.effective_intro().map(str::to_owned))
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the startup banner; `None` suppresses it.
    pub fn with_intro(mut self, intro: Option<String>) -> Self {
        self.intro = intro;
        self
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Run the loop until a command signals termination.
    ///
    /// End of input is treated exactly like typing `exit`.
    pub fn run<S: LineSource + ?Sized>(&self, source: &mut S) -> Result<()> {
        if let Some(intro) = &self.intro {
            self.console.print(intro)?;
        }

        loop {
            self.console.prompt(&self.prompt)?;
            let line = canonicalize(source.read_line()?);
            if self.onecmd(&line)? {
                break;
            }
        }

        self.console.flush()?;
        info!("shell stopped");
        Ok(())
    }

    /// Interpret one line. Returns `true` when the session should stop.
    pub fn onecmd(&self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(false);
        }

        let (command, rest) = parse_line(line);
        debug!(command, "dispatching");

        match command {
            "exit" => Ok(true),
            "help" => {
                self.help(rest)?;
                Ok(false)
            }
            name => match self.dispatcher.run(name, rest) {
                Some(Ok(stop)) => Ok(stop),
                Some(Err(e)) => {
                    warn!(app = name, error = %e, "app failed");
                    self.console.error(format!("error: {name}: {e:#}"))?;
                    Ok(false)
                }
                None => {
                    self.console.print(format!("*** Unknown syntax: {line}"))?;
                    Ok(false)
                }
            },
        }
    }

    /// Show help for `topic`, or list every command when it is empty.
    pub fn help(&self, topic: &str) -> Result<()> {
        let topic = topic.trim();
        match topic {
            "" => self.list_commands()?,
            "exit" => self.console.print(EXIT_HELP)?,
            "help" => self.console.print(HELP_HELP)?,
            name => match self.dispatcher.help(name) {
                Some(result) => result?,
                None => self.console.print(format!("*** No help on {name}"))?,
            },
        }
        Ok(())
    }

    fn list_commands(&self) -> Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(["COMMAND", "DESCRIPTION"]);

        let mut undocumented = Vec::new();
        for app in self.registry.iter() {
            match app.summary() {
                Some(summary) => {
                    table.add_row([app.name(), summary]);
                }
                None => undocumented.push(app.name()),
            }
        }
        table.add_row(["exit", EXIT_HELP]);
        table.add_row(["help", HELP_HELP]);

        self.console.print("Documented commands (type help <topic>):")?;
        self.console.print(table)?;
        if !undocumented.is_empty() {
            self.console.print("Undocumented commands:")?;
            self.console.print(format!("  {}", undocumented.join("  ")))?;
        }
        Ok(())
    }
}

/// Map end of input (and a literal `EOF` line) to `exit`.
fn canonicalize(input: Input) -> String {
    match input {
        Input::Eof => "exit".into(),
        Input::Line(line) if line.trim() == "EOF" => "exit".into(),
        Input::Line(line) => line,
    }
}

/// Split a trimmed line into its command word and the rest.
///
/// A leading `?` is shorthand for `help`.
fn parse_line(line: &str) -> (&str, &str) {
    if let Some(topic) = line.strip_prefix('?') {
        return ("help", topic.trim_start());
    }
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}
