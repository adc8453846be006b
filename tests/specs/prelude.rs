//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::Command;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use tempfile::TempDir;

/// Returns a Command running the tagsearch binary in an isolated project.
///
/// The environment is scrubbed of tagsearch variables and the working
/// directory is a fresh git root, so no stray config is discovered.
pub fn tagsearch_cmd(project: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tagsearch"));
    cmd.current_dir(project.path())
        .env_remove("TAGSEARCH_CONFIG")
        .env_remove("TAGSEARCH_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Creates a temp directory marked as a git root.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Creates a temp project with a tagsearch.toml.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = temp_project();
    std::fs::write(dir.path().join("tagsearch.toml"), config).unwrap();
    dir
}

/// Run a command expected to exit 0 and parse its stdout as JSON.
pub fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}
