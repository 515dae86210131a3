// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::ErrorKind, path::{Path, PathBuf}};

use serde::Deserialize;

use crate::{ReplError, PROMPT};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "monkey.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub repl: ConfigSectionRepl,
}

impl ConfigRoot {
    /// Loads the given file, or [`DEFAULT_CONFIG_FILE`] if present. A missing
    /// default file is not an error, a missing explicit one is.
    pub fn load(path: Option<&Path>) -> Result<Self, ReplError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if !required && e.kind() == ErrorKind::NotFound => {
                log::debug!("No {} found, using default configuration", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ReplError::ConfigRead { path, source }),
        };

        log::debug!("Loading configuration from {}", path.display());
        Self::parse(&contents).map_err(|source| ReplError::ConfigParse { path, source })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRepl {
    pub prompt: String,

    /// Highlight `ILLEGAL` tokens in the output.
    pub color: bool,

    /// Print a caret diagnostic on stderr for every `ILLEGAL` token.
    pub diagnostics: bool,
}

impl Default for ConfigSectionRepl {
    fn default() -> Self {
        Self {
            prompt: PROMPT.to_string(),
            color: true,
            diagnostics: true,
        }
    }
}
