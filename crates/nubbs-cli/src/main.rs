//! `nubbs` -- the NuBBS interactive shell.
//!
//! Reads commands from stdin, one per line, until `exit` or end of input.
//! Type `help` (or `?`) at the prompt to list commands.

use std::io::IsTerminal;

use clap::Parser;

use nubbs_core::{BufReadSource, Console, Registry, Shell};
use nubbs_types::ShellConfig;

mod config_loader;

/// NuBBS interactive shell.
#[derive(Parser)]
#[command(name = "nubbs", about = "NuBBS interactive shell", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long)]
    config: Option<String>,

    /// Prompt shown before each command (overrides config).
    #[arg(long)]
    prompt: Option<String>,

    /// Do not print the startup banner.
    #[arg(long)]
    no_intro: bool,

    /// Disable colored warnings and errors.
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, config: &mut ShellConfig) {
        if let Some(ref prompt) = self.prompt {
            config.prompt = prompt.clone();
        }
        if self.no_intro {
            config.show_intro = false;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = config_loader::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;

    let stdout = std::io::stdout();
    let color = config.color && stdout.is_terminal();
    let console = Console::new(stdout).with_color(color);

    let shell = Shell::from_config(&config, Registry::default_apps()?, console);
    shell.run(&mut BufReadSource::new(std::io::stdin().lock()))?;

    Ok(())
}
