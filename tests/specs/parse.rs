//! Behavioral specs for the parse command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Text output lists each query followed by its components
#[test]
fn parse_text_output() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["parse", "--", "\"spy x family\" -romance a:$okayado"])
        .assert()
        .success()
        .stdout(concat!(
            "\"spy x family\" -romance a:$okayado\n",
            "  \"spy x family\"\n",
            "  -\"romance\"\n",
            "  $artist:\"okayado\"\n",
        ));
}

/// > JSON output carries typed components in input order
#[test]
fn parse_json_output() {
    let project = temp_project();
    let json = json_stdout(tagsearch_cmd(&project).args([
        "parse",
        "-o",
        "json",
        "--",
        "-f:loli foo",
    ]));

    let components = &json[0]["components"];
    assert_eq!(json[0]["query"], "-f:loli foo");
    assert_eq!(components[0]["type"], "namespace");
    assert_eq!(components[0]["namespace"], "female");
    assert_eq!(components[0]["excluded"], true);
    assert_eq!(components[0]["tag"]["excluded"], false);
    assert_eq!(components[1]["type"], "text");
    assert_eq!(components[1]["components"][0]["value"], "foo");
}

/// > Queries are read from stdin, one per line, when no arguments are given
#[test]
fn parse_reads_stdin_lines_in_order() {
    let project = temp_project();
    let json = json_stdout(
        tagsearch_cmd(&project)
            .args(["parse", "-o", "json"])
            .write_stdin("Foo\nfoo\nc:rem\nFoo\n"),
    );

    let queries: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["query"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(queries, vec!["Foo", "foo", "c:rem", "Foo"]);

    // Original case is kept in the echo, the components are lower-cased
    assert_eq!(json[0]["components"], json[1]["components"]);
    assert_eq!(json[2]["components"][0]["namespace"], "character");
}

/// > An empty query parses to no components
#[test]
fn parse_empty_query() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["parse", ""])
        .assert()
        .success()
        .stdout(predicates::str::contains("(no components)"));
}

/// > Debug logging goes to stderr and never pollutes stdout
#[test]
fn parse_logging_uses_stderr() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .env("TAGSEARCH_LOG", "debug")
        .args(["parse", "-o", "json", "foo"])
        .assert()
        .success()
        .stderr(predicates::str::contains("parsed 1 queries"))
        .stdout(predicates::str::starts_with("["));
}
