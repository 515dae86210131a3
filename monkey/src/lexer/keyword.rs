// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

use super::TokenKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Else,
    False,
    Fn,
    If,
    Let,
    Return,
    True,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Exact, case-sensitive match of the whole literal.
    pub fn parse(input: &[u8]) -> Option<Self> {
        Self::iter().find(|x| x.as_ref().as_bytes() == input)
    }

    #[must_use]
    pub const fn token_kind(&self) -> TokenKind {
        match self {
            Self::Else => TokenKind::Else,
            Self::False => TokenKind::False,
            Self::Fn => TokenKind::Function,
            Self::If => TokenKind::If,
            Self::Let => TokenKind::Let,
            Self::Return => TokenKind::Return,
            Self::True => TokenKind::True,
        }
    }
}

/// Classifies a scanned identifier as either a reserved word or a plain `IDENT`.
#[must_use]
pub fn lookup_identifier(literal: &[u8]) -> TokenKind {
    match Keyword::parse(literal) {
        Some(keyword) => keyword.token_kind(),
        None => TokenKind::Identifier,
    }
}
