// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Write, path::Path};

use monkey::{Lexer, LexerError};

use crate::ReplError;

pub fn read_source(path: &Path) -> Result<Vec<u8>, ReplError> {
    std::fs::read(path).map_err(|source| ReplError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Prints every token of `source` up to `EOF`, one per line, and returns the
/// illegal bytes that were found.
pub fn lex_source(source: &[u8], mut output: impl Write) -> Result<Vec<LexerError>, ReplError> {
    let (tokens, errors) = Lexer::new(source).collect_all();

    for token in &tokens {
        writeln!(output, "{token}")?;
    }

    log::debug!("Scanned {} bytes into {} tokens", source.len(), tokens.len());
    Ok(errors)
}
