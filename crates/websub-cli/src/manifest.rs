// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Project configuration.
//!
//! **DDD Context:** Configuration
//!
//! Parses an optional `websub.toml` at the root of the checked tree:
//!
//! ```toml
//! [check]
//! format = "json"
//! warn = ["WEBSUB_109"]
//! deny_warnings = true
//! exclude = ["fixtures"]
//! ```

use std::fs;

use camino::Utf8Path;
use serde::Deserialize;
use tracing::debug;

use websub_core::source_analysis::DiagnosticCode;

use crate::commands::check::OutputFormat;
use crate::error::CheckError;

/// File name looked up next to the checked path.
pub const CONFIG_FILE: &str = "websub.toml";

/// The top-level structure of `websub.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub check: CheckConfig,
}

/// The `[check]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Default output format; the `--format` flag takes precedence.
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Codes reported as warnings instead of errors.
    #[serde(default)]
    pub warn: Vec<DiagnosticCode>,
    /// Fail the run on warnings as well as errors.
    #[serde(default)]
    pub deny_warnings: bool,
    /// Directory names skipped while searching for unit files.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Parse a `websub.toml` file.
pub fn parse_manifest(path: &Utf8Path) -> Result<CheckConfig, CheckError> {
    let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_owned(),
        source,
    })?;
    let manifest: Manifest = toml::from_str(&content).map_err(|source| CheckError::Config {
        path: path.to_owned(),
        source,
    })?;
    Ok(manifest.check)
}

/// Look for `websub.toml` in `root` and parse it if found.
///
/// Returns the default configuration when there is no file.
pub fn find_config(root: &Utf8Path) -> Result<CheckConfig, CheckError> {
    let config_path = root.join(CONFIG_FILE);
    if config_path.is_file() {
        debug!(path = %config_path, "loading configuration");
        parse_manifest(&config_path)
    } else {
        Ok(CheckConfig::default())
    }
}
