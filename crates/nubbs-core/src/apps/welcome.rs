//! `welcome` -- print a greeting.

use crate::app::App;
use crate::console::Console;

/// Greeting written by every `welcome` invocation.
pub const GREETING: &str = "welcome 👋";

/// Writes a fixed greeting and never ends the session.
pub struct Welcome {
    console: Console,
}

impl App for Welcome {
    const NAME: &'static str = "welcome";
    const HELP_TEXT: Option<&'static str> = Some("Hello?");

    fn new(console: Console) -> Self {
        Self { console }
    }

    fn console(&self) -> &Console {
        &self.console
    }

    fn run(&mut self, _line: &str) -> anyhow::Result<bool> {
        self.console.print(GREETING)?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Capture;

    #[test]
    fn prints_greeting_and_continues() {
        let capture = Capture::new();
        let mut app = Welcome::new(Console::new(capture.clone()));
        assert!(!app.run("").unwrap());
        assert_eq!(capture.contents(), "welcome 👋\n");
    }

    #[test]
    fn ignores_arguments() {
        let capture = Capture::new();
        let mut app = Welcome::new(Console::new(capture.clone()));
        assert!(!app.run("anything at all").unwrap());
        assert_eq!(capture.contents(), "welcome 👋\n");
    }

    #[test]
    fn help_text() {
        let capture = Capture::new();
        Welcome::new(Console::new(capture.clone())).help().unwrap();
        assert_eq!(capture.contents(), "Hello?\n");
    }
}
