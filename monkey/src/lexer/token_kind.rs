// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum TokenKind {
    #[strum(serialize = "ILLEGAL")]
    Illegal,
    #[strum(serialize = "EOF")]
    Eof,

    #[strum(serialize = "IDENT")]
    Identifier,
    #[strum(serialize = "INT")]
    Integer,

    #[strum(serialize = "FUNCTION")]
    Function,
    #[strum(serialize = "LET")]
    Let,
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "IF")]
    If,
    #[strum(serialize = "ELSE")]
    Else,
    #[strum(serialize = "RETURN")]
    Return,

    #[strum(serialize = "ASSIGN")]
    Assign,
    #[strum(serialize = "PLUS")]
    Plus,
    #[strum(serialize = "MINUS")]
    Minus,
    #[strum(serialize = "BANG")]
    Bang,
    #[strum(serialize = "ASTERISK")]
    Asterisk,
    #[strum(serialize = "SLASH")]
    Slash,
    #[strum(serialize = "LT")]
    LessThan,
    #[strum(serialize = "GT")]
    GreaterThan,
    #[strum(serialize = "EQ")]
    Equals,
    #[strum(serialize = "NOT_EQ")]
    NotEquals,

    #[strum(serialize = "COMMA")]
    Comma,
    #[strum(serialize = "SEMICOLON")]
    Semicolon,
    #[strum(serialize = "LPAREN")]
    LeftParenthesis,
    #[strum(serialize = "RPAREN")]
    RightParenthesis,
    #[strum(serialize = "LBRACE")]
    LeftCurlyBracket,
    #[strum(serialize = "RBRACE")]
    RightCurlyBracket,
}

impl TokenKind {
    /// The upper-case tag of this kind, e.g. `NOT_EQ`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Function | Self::Let | Self::True | Self::False | Self::If | Self::Else | Self::Return
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TokenKind::Identifier, "IDENT")]
    #[case(TokenKind::Integer, "INT")]
    #[case(TokenKind::Function, "FUNCTION")]
    #[case(TokenKind::NotEquals, "NOT_EQ")]
    #[case(TokenKind::LeftCurlyBracket, "LBRACE")]
    #[case(TokenKind::Eof, "EOF")]
    fn name(#[case] kind: TokenKind, #[case] expected: &str) {
        assert_eq!(kind.name(), expected);
        assert_eq!(kind.to_string(), expected);
    }

    #[test]
    fn only_reserved_words_are_keywords() {
        assert!(TokenKind::Return.is_keyword());
        assert!(TokenKind::Function.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Assign.is_keyword());
    }
}
