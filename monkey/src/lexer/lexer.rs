// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, iter::FusedIterator};

use strum::AsRefStr;
use thiserror::Error;

use super::{lookup_identifier, Token, TokenKind};

/// The byte reported as the current byte once the cursor has moved past the input.
pub const END_OF_INPUT: u8 = 0;

pub struct Lexer<'source_code> {
    input: &'source_code [u8],

    /// Index of `ch` in the input.
    position: usize,

    /// Index of the byte after `ch`. Never exceeds `input.len() + 1`.
    read_position: usize,

    ch: u8,
    exhausted: bool,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new<I: AsRef<[u8]> + ?Sized>(input: &'source_code I) -> Self {
        let mut lexer = Self {
            input: input.as_ref(),
            position: 0,
            read_position: 0,
            ch: END_OF_INPUT,
            exhausted: false,
        };

        lexer.read_char();
        lexer
    }

    pub fn next_token(&mut self) -> Token<'source_code> {
        self.skip_whitespace();

        let token = match self.ch {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return self.read_identifier(),
            b'0'..=b'9' => return self.read_number(),

            b'=' => self.read_single_or_double(TokenKind::Assign, TokenKind::Equals),
            b'!' => self.read_single_or_double(TokenKind::Bang, TokenKind::NotEquals),

            b';' => self.single_char_token(TokenKind::Semicolon),
            b'(' => self.single_char_token(TokenKind::LeftParenthesis),
            b')' => self.single_char_token(TokenKind::RightParenthesis),
            b',' => self.single_char_token(TokenKind::Comma),
            b'{' => self.single_char_token(TokenKind::LeftCurlyBracket),
            b'}' => self.single_char_token(TokenKind::RightCurlyBracket),
            b'+' => self.single_char_token(TokenKind::Plus),
            b'-' => self.single_char_token(TokenKind::Minus),
            b'*' => self.single_char_token(TokenKind::Asterisk),
            b'<' => self.single_char_token(TokenKind::LessThan),
            b'>' => self.single_char_token(TokenKind::GreaterThan),
            b'/' => self.single_char_token(TokenKind::Slash),

            END_OF_INPUT => Token::new(TokenKind::Eof, &[], self.position.min(self.input.len())),

            _ => self.single_char_token(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// The byte after the current one, or [`END_OF_INPUT`].
    #[must_use]
    pub fn peek_char(&self) -> u8 {
        self.input.get(self.read_position).copied().unwrap_or(END_OF_INPUT)
    }

    /// The byte under the cursor, or [`END_OF_INPUT`].
    #[must_use]
    pub const fn current_char(&self) -> u8 {
        self.ch
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub fn collect_all(mut self) -> (Vec<Token<'source_code>>, Vec<LexerError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(token) = self.next() {
            if let (TokenKind::Illegal, &[byte]) = (token.kind, token.literal) {
                errors.push(LexerError {
                    offset: token.begin,
                    kind: LexerErrorKind::IllegalByte { byte },
                });
            }

            tokens.push(token);
        }

        log::trace!("Scanned {} tokens with {} illegal bytes", tokens.len(), errors.len());
        (tokens, errors)
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied().unwrap_or(END_OF_INPUT);
        self.position = self.read_position;
        self.read_position = (self.read_position + 1).min(self.input.len() + 1);
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    #[must_use]
    fn slice(&self, begin: usize, end: usize) -> &'source_code [u8] {
        let input = self.input;
        &input[begin..end]
    }

    fn single_char_token(&self, kind: TokenKind) -> Token<'source_code> {
        Token::new(kind, self.slice(self.position, self.position + 1), self.position)
    }

    fn read_single_or_double(&mut self, single: TokenKind, double: TokenKind) -> Token<'source_code> {
        if self.peek_char() != b'=' {
            return self.single_char_token(single);
        }

        let begin = self.position;
        self.read_char();

        Token::new(double, self.slice(begin, self.position + 1), begin)
    }

    fn read_identifier(&mut self) -> Token<'source_code> {
        let begin = self.position;

        while is_identifier_char(self.ch) {
            self.read_char();
        }

        let literal = self.slice(begin, self.position);
        Token::new(lookup_identifier(literal), literal, begin)
    }

    fn read_number(&mut self) -> Token<'source_code> {
        let begin = self.position;

        while self.ch.is_ascii_digit() {
            self.read_char();
        }

        Token::new(TokenKind::Integer, self.slice(begin, self.position), begin)
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token<'source_code>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.exhausted = true;
            return None;
        }

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub offset: usize,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("illegal byte `{}` (0x{byte:02x})", .byte.escape_ascii())]
    IllegalByte { byte: u8 },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
