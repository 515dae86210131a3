// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{fmt::Display, io, path::{Path, PathBuf}, process::ExitCode};

use clap::Subcommand;
use colored::Colorize;
use logger::Logger;
use log::LevelFilter;
use monkey_repl::{lex_source, read_source, ConfigRoot, DiagnosticPrinter, Repl, ReplError};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    verbose: bool,

    /// Configuration file, defaults to `monkey.toml` in the working directory.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Scan standard input line by line.
    Repl,

    /// Scan a whole file and print its tokens.
    Lex {
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse_args();
    Logger::initialize(args.verbose);

    let config = match ConfigRoot::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_fatal(e);
            return ExitCode::FAILURE;
        }
    };

    if config.log.debug {
        Logger::raise_level(LevelFilter::Debug);
    }

    if !config.repl.color {
        colored::control::set_override(false);
    }

    let result = match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => start_repl(config),
        Commands::Lex { file } => lex_file(&file, &config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            print_fatal(e);
            ExitCode::FAILURE
        }
    }
}

fn start_repl(config: ConfigRoot) -> Result<ExitCode, ReplError> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Repl::new(config.repl).start(stdin, stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn lex_file(path: &Path, config: &ConfigRoot) -> Result<ExitCode, ReplError> {
    let source_code = read_source(path)?;
    let errors = lex_source(&source_code, io::stdout().lock())?;

    if config.repl.diagnostics {
        for e in &errors {
            DiagnosticPrinter::new(&source_code, e.offset..e.offset + 1, &e.kind)
                .origin(path.display().to_string())
                .print();
        }
    }

    if errors.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{} illegal {} found", errors.len(), if errors.len() == 1 { "byte" } else { "bytes" });
        Ok(ExitCode::from(1))
    }
}

fn print_fatal(message: impl Display) {
    eprintln!("{}: {}", "error".red().bold(), message.to_string().bold());
}
