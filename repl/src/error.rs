// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::{Display, Write}, io, ops::Range, path::PathBuf};

use colored::{ColoredString, Colorize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not read configuration file `{}`: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read source file `{}`: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file `{}`: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Points at a byte range of a source buffer with a caret, underneath the line it is on.
pub struct DiagnosticPrinter {
    origin: String,
    message: String,
    hint: Option<String>,

    line: String,
    line_index: usize,
    column: usize,
    len: usize,

    line_number: ColoredString,
}

impl DiagnosticPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source: &[u8], range: Range<usize>, message: impl Display) -> Self {
        let begin = range.start.min(source.len());
        let end = range.end.clamp(begin, source.len());

        let line_start = source[..begin].iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        let line_end = source[begin..].iter()
            .position(|&b| b == b'\n')
            .map_or(source.len(), |newline| begin + newline);
        let line_index = source[..line_start].iter().filter(|&&b| b == b'\n').count();

        let line = String::from_utf8_lossy(&source[line_start..line_end])
            .trim_end_matches('\r')
            .to_string();
        let column = String::from_utf8_lossy(&source[line_start..begin]).chars().count();

        Self {
            origin: String::from("<stdin>"),
            message: message.to_string(),
            hint: None,

            line,
            line_index,
            column,
            len: end - begin,

            line_number: format!("{}", line_index + 1).blue().bold(),
        }
    }

    #[must_use]
    pub fn origin(self, origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..self
        }
    }

    /// Moves the reported line number, for buffers that are one line out of a larger input.
    #[must_use]
    pub fn first_line(self, line_index: usize) -> Self {
        let line_index = self.line_index + line_index;
        Self {
            line_index,
            line_number: format!("{}", line_index + 1).blue().bold(),
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
        eprint!("{}", self.render());
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing into a `String` cannot fail.
        _ = writeln!(out, "{}: {}\n", "error".red().bold(), self.message.bold());

        let separator = " | ".blue().bold();
        _ = writeln!(out, "{} {separator}{}", self.line_number, self.line);

        let spaces = " ".repeat(self.column);
        let caret = "^".red().bold();
        let tildes = "~".repeat(self.len.saturating_sub(1)).red();
        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").red().bold(),
            None => "".bold(),
        };
        _ = writeln!(out, "{} {separator}{spaces}{caret}{tildes} {hint}", " ".repeat(self.line_number.len()));

        _ = writeln!(out, "\nIn {}:{}:{}\n", self.origin, self.line_index + 1, self.column + 1);
        out
    }
}
