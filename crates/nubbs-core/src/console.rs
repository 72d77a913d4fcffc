//! Shared, append-only output sink.
//!
//! Every writer in a session (the loop itself and each app instance) holds
//! a clone of the same [`Console`]. Writers only ever append; nothing reads
//! back from or rewinds the sink.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

use owo_colors::OwoColorize;

struct Sink {
    out: Box<dyn Write>,
    color: bool,
}

/// Cheaply clonable handle to the session's output sink.
#[derive(Clone)]
pub struct Console {
    sink: Rc<RefCell<Sink>>,
}

impl Console {
    /// Wrap a writer. Styling is off until enabled with [`with_color`].
    ///
    /// [`with_color`]: Console::with_color
    pub fn new<W: Write + 'static>(out: W) -> Self {
        Self {
            sink: Rc::new(RefCell::new(Sink {
                out: Box::new(out),
                color: false,
            })),
        }
    }

    /// Enable or disable ANSI styling for warnings and errors.
    pub fn with_color(self, color: bool) -> Self {
        self.sink.borrow_mut().color = color;
        self
    }

    /// Whether ANSI styling is enabled.
    pub fn color(&self) -> bool {
        self.sink.borrow().color
    }

    /// Write `text` followed by a newline.
    pub fn print(&self, text: impl Display) -> io::Result<()> {
        let mut sink = self.sink.borrow_mut();
        writeln!(sink.out, "{text}")
    }

    /// Write a warning line, styled red when color is enabled.
    pub fn warn(&self, text: impl Display) -> io::Result<()> {
        let mut sink = self.sink.borrow_mut();
        if sink.color {
            writeln!(sink.out, "{}", text.red())
        } else {
            writeln!(sink.out, "{text}")
        }
    }

    /// Write an error line, styled bold red when color is enabled.
    pub fn error(&self, text: impl Display) -> io::Result<()> {
        let mut sink = self.sink.borrow_mut();
        if sink.color {
            writeln!(sink.out, "{}", text.red().bold())
        } else {
            writeln!(sink.out, "{text}")
        }
    }

    /// Write the prompt without a trailing newline and flush so it appears
    /// before the next blocking read.
    pub fn prompt(&self, prompt: &str) -> io::Result<()> {
        let mut sink = self.sink.borrow_mut();
        sink.out.write_all(prompt.as_bytes())?;
        sink.out.flush()
    }

    /// Flush any buffered output.
    pub fn flush(&self) -> io::Result<()> {
        self.sink.borrow_mut().out.flush()
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("color", &self.color())
            .finish_non_exhaustive()
    }
}
