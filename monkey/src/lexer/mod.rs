// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod keyword;
mod lexer;
mod token;
mod token_kind;

pub use self::{
    keyword::{
        lookup_identifier,
        Keyword,
    },
    lexer::{
        Lexer,
        LexerError,
        LexerErrorKind,
        END_OF_INPUT,
    },
    token::Token,
    token_kind::TokenKind,
};
