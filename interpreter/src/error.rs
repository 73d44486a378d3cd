// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io::{self, Write}};

use colored::{Color, ColoredString, Colorize};
use rockstar::{FileRange, RockstarError, SourceCode};

pub struct ErrorPrinter {
    source_code: SourceCode,
    range: FileRange,
    code: Option<String>,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            code: None,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    /// Describes a failed program, e.g. `error[SyntaxError::ExpectedToken]`.
    #[must_use = "Use the `print` method to actually print"]
    pub fn for_error(source_code: &SourceCode, error: &RockstarError) -> Self {
        let hint = match error {
            RockstarError::Syntax(e) => Some(format!("expected {}", e.expected())),
            _ => None,
        };

        Self::new(source_code, error.range(), error)
            .code(format!("{}::{}", error.category(), error.name()))
            .hint(hint)
    }

    #[must_use]
    pub fn code(self, code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..self
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        let mut stderr = io::stderr().lock();
        if let Err(e) = self.write_to(&mut stderr) {
            log::error!("Failed to print error: {e}");
        }
    }

    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        self.write_prelude(w)?;
        self.write_lines(w)?;
        self.write_postlude(w)
    }

    fn write_prelude(&self, w: &mut impl Write) -> io::Result<()> {
        let title = match &self.code {
            Some(code) => format!("error[{code}]"),
            None => "error".to_string(),
        };

        writeln!(w, "{}: {}", title.color(self.color).bold(), self.message.bold())?;
        writeln!(w)
    }

    fn write_lines(&self, w: &mut impl Write) -> io::Result<()> {
        let error_line = self.range.start().line();
        let first_line = error_line.saturating_sub(1);
        let lines: Vec<&str> = self.source_code.lines().skip(first_line).take(3).collect();

        let mut indicator_written = false;
        for (line, text) in (first_line..).zip(&lines) {
            if line < error_line {
                if !text.trim().is_empty() {
                    self.write_line(w, false, text)?;
                }
            } else if line == error_line {
                self.write_line(w, true, text)?;
                self.write_error_indicator(w)?;
                indicator_written = true;
            } else {
                self.write_line(w, false, text)?;
            }
        }

        // The error sits past the last line, at the end of the file.
        if !indicator_written {
            self.write_error_indicator(w)?;
        }

        Ok(())
    }

    fn write_line(&self, w: &mut impl Write, is_primary: bool, line: &str) -> io::Result<()> {
        self.write_line_prefix(w, is_primary)?;
        writeln!(w, "{line}")
    }

    fn write_error_indicator(&self, w: &mut impl Write) -> io::Result<()> {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(self.range.len().saturating_sub(1)).color(self.color);

        self.write_line_prefix(w, false)?;
        match &self.hint {
            Some(hint) => writeln!(w, "{spaces}{caret}{tildes} {}", format!("hint: {hint}").color(self.color).bold()),
            None => writeln!(w, "{spaces}{caret}{tildes}"),
        }
    }

    fn write_line_prefix(&self, w: &mut impl Write, is_primary: bool) -> io::Result<()> {
        let separator = "| ".blue().bold();

        if is_primary {
            write!(w, "{} {separator}", self.line_number)
        } else {
            write!(w, "{} {separator}", " ".repeat(self.line_number.len()))
        }
    }

    fn write_postlude(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w)?;

        let path = self.source_code.path().display();
        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        writeln!(w, "In {path}:{line}:{column}\n")
    }
}
