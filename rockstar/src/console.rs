// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

/// Where `Say` writes to and `Listen` reads from.
pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// The next line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// The process' standard output and input.
pub struct StdConsole {
    stdout: StdoutLock<'static>,
    stdin: StdinLock<'static>,
}

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout().lock(),
            stdin: io::stdin().lock(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.stdout, "{line}")
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.stdout.flush()?;
        read_line_from(&mut self.stdin)
    }
}

/// Collects output in memory and reads input from any reader, used by
/// [`crate::run`] and tests.
#[derive(Debug, Default)]
pub struct BufferConsole<R> {
    input: R,
    output: Vec<String>,
}

impl<R: BufRead> BufferConsole<R> {
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input,
            output: Vec::new(),
        }
    }

    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }
}

impl<R: BufRead> Console for BufferConsole<R> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_from(&mut self.input)
    }
}

fn read_line_from(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(Some(line))
}
