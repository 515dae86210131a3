// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{BufRead, Write};

use colored::Colorize;
use monkey::{Lexer, LexerErrorKind, Token};

use crate::{ConfigSectionRepl, DiagnosticPrinter, ReplError};

pub const PROMPT: &str = ">> ";

/// Reads lines, scans each one with a fresh [`Lexer`] and prints its tokens.
#[derive(Debug, Clone, Default)]
pub struct Repl {
    config: ConfigSectionRepl,
}

impl Repl {
    #[must_use]
    pub fn new(config: ConfigSectionRepl) -> Self {
        Self { config }
    }

    pub fn start(&self, mut input: impl BufRead, mut output: impl Write) -> Result<(), ReplError> {
        let mut line = Vec::new();
        let mut line_index = 0;

        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                log::debug!("End of input after {line_index} lines");
                return Ok(());
            }

            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }

            self.evaluate_line(&line, line_index, &mut output)?;
            line_index += 1;
        }
    }

    /// Prints every token of `line` up to, but not including, `EOF`.
    pub fn evaluate_line(&self, line: &[u8], line_index: usize, mut output: impl Write) -> Result<(), ReplError> {
        let mut lexer = Lexer::new(line);
        let mut count = 0;

        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }

            self.print_token(&token, &mut output)?;

            if token.is_illegal() && self.config.diagnostics {
                print_illegal(line, line_index, &token);
            }

            count += 1;
        }

        log::trace!("Line {} produced {count} tokens", line_index + 1);
        Ok(())
    }

    fn print_token(&self, token: &Token<'_>, mut output: impl Write) -> Result<(), ReplError> {
        if token.is_illegal() && self.config.color {
            writeln!(output, "{}", token.to_string().red().bold())?;
        } else {
            writeln!(output, "{token}")?;
        }

        Ok(())
    }
}

fn print_illegal(line: &[u8], line_index: usize, token: &Token<'_>) {
    let &[byte] = token.literal else {
        return;
    };

    DiagnosticPrinter::new(line, token.range(), LexerErrorKind::IllegalByte { byte })
        .first_line(line_index)
        .print();
}
