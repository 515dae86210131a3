// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod error;
mod lex;
mod repl;

pub use self::{
    config::{
        ConfigRoot,
        ConfigSectionLog,
        ConfigSectionRepl,
        DEFAULT_CONFIG_FILE,
    },
    error::{
        DiagnosticPrinter,
        ReplError,
    },
    lex::{
        lex_source,
        read_source,
    },
    repl::{
        Repl,
        PROMPT,
    },
};
