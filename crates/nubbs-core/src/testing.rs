//! Test helpers shared across unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use crate::input::{Input, LineSource};

/// In-memory writer whose contents stay readable after being handed to a
/// [`Console`](crate::Console).
#[derive(Clone, Default)]
pub struct Capture {
    buf: Rc<RefCell<Vec<u8>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.borrow()).into_owned()
    }

    pub fn clear(&self) {
        self.buf.borrow_mut().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Line source fed from a fixed script; yields `Eof` once exhausted.
pub struct Script {
    lines: VecDeque<Input>,
    pub reads: usize,
}

impl Script {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            lines: inputs.into_iter().collect(),
            reads: 0,
        }
    }

    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| Input::Line((*l).to_string())))
    }
}

impl LineSource for Script {
    fn read_line(&mut self) -> io::Result<Input> {
        self.reads += 1;
        Ok(self.lines.pop_front().unwrap_or(Input::Eof))
    }
}

/// Line source that yields `lines` and then fails every later read.
pub struct Broken {
    lines: VecDeque<String>,
}

impl Broken {
    pub fn after(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
        }
    }
}

impl LineSource for Broken {
    fn read_line(&mut self) -> io::Result<Input> {
        match self.lines.pop_front() {
            Some(line) => Ok(Input::Line(line)),
            None => Err(io::Error::other("input went away")),
        }
    }
}
