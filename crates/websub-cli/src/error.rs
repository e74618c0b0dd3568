// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Failures of the driver itself, as opposed to findings in checked code.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// An error that stops `websub-check` before or while checking.
#[derive(Debug, Error, Diagnostic)]
pub enum CheckError {
    #[error("Failed to read '{path}'")]
    #[diagnostic(code(websub::io))]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode compilation unit '{path}'")]
    #[diagnostic(
        code(websub::unit),
        help("unit files are JSON exports of the host model; see `websub-check contract`")
    )]
    Decode {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse configuration '{path}'")]
    #[diagnostic(code(websub::config))]
    Config {
        path: Utf8PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("File '{0}' is not a compilation unit (expected a `.websub.json` file)")]
    #[diagnostic(code(websub::path))]
    NotAUnitFile(Utf8PathBuf),

    #[error("Path '{0}' does not exist")]
    #[diagnostic(code(websub::path))]
    PathNotFound(Utf8PathBuf),

    #[error("Path '{0}' is not valid UTF-8")]
    #[diagnostic(code(websub::path))]
    NonUtf8Path(std::path::PathBuf),
}
