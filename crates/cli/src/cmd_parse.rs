// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command implementation.

use rayon::prelude::*;
use termcolor::StandardStream;

use tagsearch::cli::{OutputFormat, ParseArgs};
use tagsearch::color::resolve_color;
use tagsearch::error::ExitCode;
use tagsearch::input::args_or_stdin;
use tagsearch::output::json::{ParsedQueryOutput, write_json};
use tagsearch::output::text::TextFormatter;
use tagsearch::query::{ParsedQuery, SearchEngine};

/// Run the parse command.
pub fn run(args: &ParseArgs) -> anyhow::Result<ExitCode> {
    let queries = args_or_stdin(&args.queries)?;

    // Repeated lines in a batch share one cache entry
    let engine = SearchEngine::new();
    let parsed: Vec<ParsedQuery> = queries
        .par_iter()
        .map(|query| engine.parse_query(query))
        .collect();

    let stats = engine.stats();
    tracing::debug!(
        "parsed {} queries ({} unique, {} cache hits)",
        queries.len(),
        stats.entries,
        stats.hits
    );

    match args.output {
        OutputFormat::Text => {
            let mut formatter = TextFormatter::new(StandardStream::stdout(resolve_color()));
            for (query, components) in queries.iter().zip(&parsed) {
                formatter.write_parsed(query, components)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            let output: Vec<ParsedQueryOutput<'_>> = queries
                .iter()
                .zip(&parsed)
                .map(|(query, components)| ParsedQueryOutput {
                    query,
                    components,
                })
                .collect();
            write_json(std::io::stdout().lock(), &output)?;
        }
    }

    Ok(ExitCode::Success)
}
