// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::path::PathBuf;

use rayon::prelude::*;
use termcolor::StandardStream;

use tagsearch::cli::{Cli, MatchArgs, OutputFormat};
use tagsearch::color::resolve_color;
use tagsearch::config::{self, Config};
use tagsearch::error::{Error, ExitCode};
use tagsearch::input::args_or_stdin;
use tagsearch::output::json::{MatchOutput, write_json};
use tagsearch::output::text::TextFormatter;
use tagsearch::pattern::WildcardPattern;

/// Run the match command.
pub fn run(cli: &Cli, args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;
    let options = args.options(config.matching.options());
    tracing::debug!("match options: {:?}", options);

    let pattern = WildcardPattern::compile(&args.pattern, options).map_err(Error::from)?;
    let haystacks = args_or_stdin(&args.haystacks)?;

    let matched: Vec<&str> = haystacks
        .par_iter()
        .filter(|haystack| pattern.is_match(haystack))
        .map(String::as_str)
        .collect();
    tracing::debug!("{} of {} haystacks matched", matched.len(), haystacks.len());

    let exit_code = if matched.is_empty() {
        ExitCode::NoMatch
    } else {
        ExitCode::Success
    };

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::new(StandardStream::stdout(resolve_color()));
            for haystack in &matched {
                formatter.write_line(haystack)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            write_json(
                std::io::stdout().lock(),
                &MatchOutput::new(&args.pattern, options, matched),
            )?;
        }
    }

    Ok(exit_code)
}

fn load_config(cli: &Cli) -> Result<Config, Error> {
    let cwd = std::env::current_dir().map_err(|e| Error::Io {
        path: PathBuf::from("."),
        source: e,
    })?;

    let (config, source) = config::resolve(cli.config.as_deref(), &cwd)?;
    tracing::debug!("config: {}", source);
    Ok(config)
}
