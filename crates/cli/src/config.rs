// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles tagsearch.toml lookup, parsing with version validation, and
//! unknown key warnings.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::MatchOptions;

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "tagsearch.toml";

const KNOWN_MATCH_KEYS: &[&str] = &["ignore_case", "wildcard"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default, rename = "match")]
    matching: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// `[match]` defaults for the `match` command.
    pub matching: MatchConfig,
}

/// Matcher defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Compare case-insensitively (default: true).
    pub ignore_case: bool,
    /// Honor `$*` / `$?` markers (default: true).
    pub wildcard: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            matching: MatchConfig::default(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        let options = MatchOptions::default();
        Self {
            ignore_case: options.ignore_case,
            wildcard: options.enable_wildcard,
        }
    }
}

impl MatchConfig {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            ignore_case: self.ignore_case,
            enable_wildcard: self.wildcard,
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `-C`/`--config` or `TAGSEARCH_CONFIG`.
    Explicit(PathBuf),
    /// Found next to the working directory or in one of its parents.
    ///
    /// `levels` counts the parent directories climbed (0 = working directory).
    Discovered { path: PathBuf, levels: usize },
    /// No file in reach; built-in defaults apply.
    Defaults,
}

impl ConfigSource {
    /// The file to load, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Discovered { path, .. } => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            ConfigSource::Discovered { path, levels: 0 } => {
                write!(f, "{} (working directory)", path.display())
            }
            ConfigSource::Discovered { path, levels } => {
                write!(f, "{} ({} levels up)", path.display(), levels)
            }
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Decide which config applies.
///
/// An explicit path must exist. Otherwise the nearest tagsearch.toml between
/// `cwd` and the enclosing git root wins; the search never leaves the
/// repository that contains `cwd`.
pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigSource> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::Config {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }

    for (levels, dir) in cwd.ancestors().enumerate() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(ConfigSource::Discovered {
                path: candidate,
                levels,
            });
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    Ok(ConfigSource::Defaults)
}

/// Locate and load the config for `cwd`, reporting where it came from.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<(Config, ConfigSource)> {
    let source = locate(explicit, cwd)?;
    let config = match source.path() {
        Some(path) => load(path)?,
        None => Config::default(),
    };
    Ok((config, source))
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config content, warning on stderr about unrecognized keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_only: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;
    match version_only.version {
        None => return Err(config_error("missing required field: version".to_string())),
        Some(v) if v != SUPPORTED_VERSION => {
            return Err(config_error(format!(
                "unsupported config version {} (supported: {})",
                v, SUPPORTED_VERSION
            )));
        }
        Some(_) => {}
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    let matching = match flexible.matching {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_MATCH_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("match.{}", key));
                }
            }

            let defaults = MatchConfig::default();
            MatchConfig {
                ignore_case: parse_bool(t.get("ignore_case"), defaults.ignore_case)
                    .ok_or_else(|| config_error("match.ignore_case must be a boolean".into()))?,
                wildcard: parse_bool(t.get("wildcard"), defaults.wildcard)
                    .ok_or_else(|| config_error("match.wildcard must be a boolean".into()))?,
            }
        }
        Some(_) => return Err(config_error("[match] must be a table".to_string())),
        None => MatchConfig::default(),
    };

    Ok(Config {
        version: flexible.version,
        matching,
    })
}

/// Missing values take the default; non-boolean values yield None.
fn parse_bool(value: Option<&toml::Value>, default: bool) -> Option<bool> {
    match value {
        None => Some(default),
        Some(v) => v.as_bool(),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::debug!("ignoring unknown config key {}", key);
    eprintln!(
        "tagsearch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
