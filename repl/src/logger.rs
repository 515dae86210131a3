// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Overrides the level chosen on the command line, e.g. `MONKEY_LOG=trace`.
const LOG_ENV: &str = "MONKEY_LOG";

pub(crate) struct Logger;

impl Logger {
    /// Installed before anything else runs, so that configuration loading is logged too.
    pub fn initialize(verbose: bool) {
        let from_env = std::env::var_os(LOG_ENV).is_some();

        let mut builder = Builder::new();
        builder.filter_level(LevelFilter::Trace);
        if from_env {
            builder.parse_env(Env::new().filter(LOG_ENV));
        }

        builder.format(|f, record| {
            writeln!(f, "[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args())
        });

        if let Err(e) = builder.try_init() {
            eprintln!("Could not install logger: {e}");
            return;
        }

        if !from_env {
            log::set_max_level(Self::initial_level(verbose));
        }

        log::info!("Logger is initialized");
    }

    /// Never lowers the level, so `--verbose` and `MONKEY_LOG` keep precedence.
    pub fn raise_level(level: LevelFilter) {
        let current = log::max_level();
        let raised = Self::raised_level(current, level);

        if raised != current {
            log::set_max_level(raised);
            log::debug!("Log level raised to {raised}");
        }
    }

    fn initial_level(verbose: bool) -> LevelFilter {
        if verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        }
    }

    fn raised_level(current: LevelFilter, requested: LevelFilter) -> LevelFilter {
        current.max(requested)
    }
}
