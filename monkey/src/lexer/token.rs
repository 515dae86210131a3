// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, fmt::{Debug, Display, Formatter}, ops::Range};

use super::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'source_code> {
    pub kind: TokenKind,

    /// The exact bytes of the source this token was scanned from. Empty for `EOF`.
    pub literal: &'source_code [u8],

    /// Byte offset of the first byte of the literal.
    pub begin: usize,
}

impl<'source_code> Token<'source_code> {
    #[must_use]
    pub const fn new(kind: TokenKind, literal: &'source_code [u8], begin: usize) -> Self {
        Self {
            kind,
            literal,
            begin,
        }
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.begin + self.literal.len()
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.begin..self.end()
    }

    #[must_use]
    pub fn literal_lossy(&self) -> Cow<'source_code, str> {
        String::from_utf8_lossy(self.literal)
    }

    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[must_use]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind)
            .field("literal", &self.literal_lossy())
            .field("begin", &self.begin)
            .finish()
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal_lossy())
    }
}
