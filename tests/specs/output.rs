//! Behavioral specs for color handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > NO_COLOR disables ANSI escapes
#[test]
fn no_color_disables_escapes() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .args(["parse", "--", "-a:okayado"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > COLOR forces ANSI escapes even without a TTY
#[test]
fn color_forces_escapes() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["parse", "--", "-a:okayado"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));
}

/// > JSON output is never colored
#[test]
fn json_output_is_plain() {
    let project = temp_project();
    tagsearch_cmd(&project)
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["parse", "-o", "json", "foo"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}
