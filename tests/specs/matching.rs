//! Behavioral specs for the match command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Prints matching haystacks in input order, exit 0
#[test]
fn match_prints_matching_haystacks() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "a$*b", "aXXXb", "ab", "ba", "zzAbzz"])
        .assert()
        .success()
        .stdout("aXXXb\nab\nzzAbzz\n");
}

/// > Exit 1 when nothing matches
#[test]
fn match_without_hits_exits_one() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "a$?b", "aXXb"])
        .assert()
        .code(1)
        .stdout("");
}

/// > Bare `*` is literal
#[test]
fn match_bare_star_is_literal() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "a*b", "aXb", "a*b"])
        .assert()
        .success()
        .stdout("a*b\n");
}

/// > --case-sensitive and --no-wildcard change comparison
#[test]
fn match_flags() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "--case-sensitive", "okayado", "OKAYADO", "okayado"])
        .assert()
        .success()
        .stdout("okayado\n");

    tagsearch_cmd(&project)
        .args(["match", "--no-wildcard", "a$?b", "aXb", "a$?b"])
        .assert()
        .success()
        .stdout("a$?b\n");
}

/// > Haystacks come from stdin when none are given
#[test]
fn match_reads_stdin() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "ch$?p"])
        .write_stdin("Chapter 1\ncheap\nchop\n")
        .assert()
        .success()
        .stdout("Chapter 1\nchop\n");
}

/// > JSON output records pattern, options, and matches
#[test]
fn match_json_output() {
    let project = temp_project();
    let json = json_stdout(tagsearch_cmd(&project).args(["match", "-o", "json", "x$*", "xy", "y"]));
    assert_eq!(
        json,
        serde_json::json!({
            "pattern": "x$*",
            "ignore_case": true,
            "wildcard": true,
            "matched": ["xy"],
        })
    );
}

/// > Invalid patterns exit 2 with an error on stderr
#[test]
fn match_invalid_pattern_exits_two() {
    let project = temp_project();
    // Stays under the per-argument size limit of the OS while exceeding the
    // regex size limit
    tagsearch_cmd(&project)
        .arg("match")
        .arg("$?".repeat(64_000))
        .arg("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern"));
}

// =============================================================================
// CONFIG
// =============================================================================

/// > [match] defaults come from tagsearch.toml
#[test]
fn match_uses_config_defaults() {
    let project = temp_project_with_config("version = 1\n[match]\nignore_case = false\n");
    tagsearch_cmd(&project)
        .args(["match", "okayado", "OKAYADO"])
        .assert()
        .code(1);
}

/// > --ignore-case and --wildcard re-enable options the config turns off
#[test]
fn match_flags_override_config_both_ways() {
    let project = temp_project_with_config(
        "version = 1\n[match]\nignore_case = false\nwildcard = false\n",
    );
    tagsearch_cmd(&project)
        .args(["match", "OKAY$?DO", "okayado", "OKAY$?DO"])
        .assert()
        .success()
        .stdout("OKAY$?DO\n");

    tagsearch_cmd(&project)
        .args(["match", "--ignore-case", "--wildcard", "OKAY$?DO", "okayado", "OKAY$?DO"])
        .assert()
        .success()
        .stdout("okayado\n");
}

/// > Config is discovered from subdirectories up to the git root
#[test]
fn match_discovers_config_in_parent() {
    let project = temp_project_with_config("version = 1\n[match]\nwildcard = false\n");
    let nested = project.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    tagsearch_cmd(&project)
        .current_dir(&nested)
        .args(["match", "a$*b", "aXb"])
        .assert()
        .code(1);
}

/// > --config points at an explicit file
#[test]
fn match_explicit_config() {
    let project = temp_project();
    std::fs::write(
        project.path().join("strict.toml"),
        "version = 1\n[match]\nignore_case = false\n",
    )
    .unwrap();

    tagsearch_cmd(&project)
        .args(["match", "-C", "strict.toml", "okayado", "OKAYADO"])
        .assert()
        .code(1);
}

/// > Missing explicit config exits 2
#[test]
fn match_missing_config_exits_two() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["match", "-C", "missing.toml", "x", "x"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Unsupported config version exits 2
#[test]
fn match_bad_config_version_exits_two() {
    let project = temp_project_with_config("version = 9\n");
    tagsearch_cmd(&project)
        .args(["match", "x", "x"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}

/// > Unknown config keys warn but do not fail
#[test]
fn match_unknown_config_key_warns() {
    let project = temp_project_with_config("version = 1\n[match]\nfuzzy = true\n");
    tagsearch_cmd(&project)
        .args(["match", "x", "x"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `match.fuzzy`"));
}
