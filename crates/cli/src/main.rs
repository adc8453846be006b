// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tagsearch CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use tagsearch::cli::{Cli, Command};
use tagsearch::error::ExitCode;

mod cmd_escape;
mod cmd_match;
mod cmd_parse;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TAGSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("tagsearch: {}", e);
            match e.downcast_ref::<tagsearch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Parse(args)) => cmd_parse::run(args),
        Some(Command::Match(args)) => cmd_match::run(&cli, args),
        Some(Command::EscapeLike(args)) => cmd_escape::run(args),
    }
}
