//! Line-oriented input sources.
//!
//! A [`LineSource`] hands the shell one line at a time and reports the end
//! of input as [`Input::Eof`], distinct from an empty line.

use std::io::{self, BufRead};

/// One read from a [`LineSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of input, without its trailing line terminator.
    Line(String),
    /// The source has no more input.
    Eof,
}

/// Something the shell can read lines from.
pub trait LineSource {
    /// Read the next line, blocking until one is available.
    fn read_line(&mut self) -> io::Result<Input>;
}

/// [`LineSource`] over any buffered reader (stdin, a file, a byte slice).
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read.
pub struct BufReadSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> BufReadSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineSource for BufReadSource<R> {
    fn read_line(&mut self) -> io::Result<Input> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(Input::Eof);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Input::Line(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
