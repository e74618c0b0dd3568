// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `websub-check check`: run the subscriber service checks over unit files.
//!
//! A unit file (`*.websub.json`) is the host front end's export of one source
//! file: its listener constructions and subscriber services with resolved
//! method signatures. Each unit is checked and its diagnostics printed.
//! Codes listed in the configuration's `warn` are reported as warnings. The
//! command exits non-zero if any error (or, with `deny_warnings`, any warning)
//! is found.

use std::fs;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use miette::{IntoDiagnostic, Result};
use serde::Deserialize;
use tracing::{debug, info, instrument};
use websub_core::model::CompilationUnit;
use websub_core::source_analysis::{Diagnostic, DiagnosticCode, Severity};

use crate::diagnostic::CheckDiagnostic;
use crate::error::CheckError;
use crate::manifest::{CheckConfig, find_config};

/// Suffix of the files `check` reads.
pub const UNIT_SUFFIX: &str = ".websub.json";

/// Output format for check diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output via miette (default).
    #[default]
    Text,
    /// Machine-readable JSON (one object per line).
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}': expected 'text' or 'json'"
            )),
        }
    }
}

/// Totals over every checked unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub files: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckSummary {
    fn record(&mut self, diagnostics: &[Diagnostic]) {
        self.files += 1;
        for diagnostic in diagnostics {
            if diagnostic.is_error() {
                self.errors += 1;
            } else {
                self.warnings += 1;
            }
        }
    }

    /// Whether the run should exit non-zero.
    #[must_use]
    pub fn is_failure(&self, deny_warnings: bool) -> bool {
        self.errors > 0 || (deny_warnings && self.warnings > 0)
    }
}

/// The result of checking one unit file.
#[derive(Debug)]
pub struct UnitReport {
    pub path: Utf8PathBuf,
    /// The checked source file, resolved relative to the unit file.
    pub source_path: Option<Utf8PathBuf>,
    /// Its text, when it could be read.
    pub source: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the checks on the given path (unit file or directory).
///
/// Configuration comes from `websub.toml` next to the path; an explicit
/// `format` overrides the configured one.
pub fn run_check(path: &str, format: Option<OutputFormat>) -> Result<()> {
    let target = Utf8PathBuf::from(path);
    let config = find_config(&config_root(&target))?;
    let format = resolve_format(format, &config);

    let summary = match format {
        OutputFormat::Text => check_path(&target, &config, format, &mut io::stderr().lock())?,
        OutputFormat::Json => check_path(&target, &config, format, &mut io::stdout().lock())?,
    };

    info!(
        files = summary.files,
        errors = summary.errors,
        warnings = summary.warnings,
        "check finished"
    );

    if summary.is_failure(config.deny_warnings) {
        let total = summary.errors + summary.warnings;
        let plural = if total == 1 { "" } else { "s" };
        miette::bail!(
            "{total} diagnostic{plural} found in {} file(s)",
            summary.files
        );
    }
    Ok(())
}

/// The `--format` flag wins over the configured format, then the default.
fn resolve_format(flag: Option<OutputFormat>, config: &CheckConfig) -> OutputFormat {
    flag.or(config.format).unwrap_or_default()
}

/// Directory whose `websub.toml` applies to `target`.
fn config_root(target: &Utf8Path) -> Utf8PathBuf {
    if target.is_dir() {
        return target.to_owned();
    }
    match target.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent.to_owned(),
        _ => Utf8PathBuf::from("."),
    }
}

/// Check every unit under `target`, writing diagnostics to `out`.
pub fn check_path(
    target: &Utf8Path,
    config: &CheckConfig,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<CheckSummary> {
    let unit_files = if target.is_file() {
        if !is_unit_file(target) {
            return Err(CheckError::NotAUnitFile(target.to_owned()).into());
        }
        vec![target.to_owned()]
    } else if target.is_dir() {
        collect_unit_files(target, &config.exclude)?
    } else {
        return Err(CheckError::PathNotFound(target.to_owned()).into());
    };

    if unit_files.is_empty() {
        miette::bail!("No {UNIT_SUFFIX} files found in '{target}'");
    }

    let mut summary = CheckSummary::default();
    for file in &unit_files {
        let mut report = check_unit_file(file)?;
        demote_to_warnings(&mut report.diagnostics, &config.warn);
        write_report(&report, format, out).into_diagnostic()?;
        summary.record(&report.diagnostics);
    }
    Ok(summary)
}

/// Report the listed codes as warnings.
fn demote_to_warnings(diagnostics: &mut [Diagnostic], codes: &[DiagnosticCode]) {
    for diagnostic in diagnostics {
        if codes.contains(&diagnostic.code) {
            diagnostic.severity = Severity::Warning;
        }
    }
}

/// Decode and check a single unit file.
#[instrument(skip_all, fields(path = %path))]
pub fn check_unit_file(path: &Utf8Path) -> Result<UnitReport, CheckError> {
    let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_owned(),
        source,
    })?;
    let unit: CompilationUnit =
        serde_json::from_str(&content).map_err(|source| CheckError::Decode {
            path: path.to_owned(),
            source,
        })?;

    let diagnostics = unit.check();
    debug!(count = diagnostics.len(), "unit checked");

    let source_path = unit.source.as_deref().map(|source| {
        path.parent()
            .map_or_else(|| Utf8PathBuf::from(source), |dir| dir.join(source))
    });
    let source = source_path.as_ref().and_then(|source_path| {
        fs::read_to_string(source_path)
            .inspect_err(|e| debug!(path = %source_path, error = %e, "source not readable"))
            .ok()
    });

    Ok(UnitReport {
        path: path.to_owned(),
        source_path,
        source,
        diagnostics,
    })
}

fn write_report(report: &UnitReport, format: OutputFormat, out: &mut dyn Write) -> io::Result<()> {
    let display_path = report.source_path.as_ref().unwrap_or(&report.path);
    for diag in &report.diagnostics {
        match format {
            OutputFormat::Text => {
                let check_diag = CheckDiagnostic::from_core_diagnostic(
                    diag,
                    display_path.as_str(),
                    report.source.as_deref(),
                );
                if check_diag.src.is_some() {
                    writeln!(out, "{:?}", miette::Report::new(check_diag))?;
                } else {
                    writeln!(
                        out,
                        "{display_path}:{}..{}: {diag}",
                        diag.span.start(),
                        diag.span.end()
                    )?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "file": display_path.as_str(),
                    "code": diag.code.as_str(),
                    "severity": diag.severity,
                    "message": diag.message.as_str(),
                    "arguments": diag.args,
                    "span_start": diag.span.start(),
                    "span_end": diag.span.end(),
                    "hint": diag.hint.as_deref(),
                });
                writeln!(out, "{json}")?;
            }
        }
    }
    Ok(())
}

fn is_unit_file(path: &Utf8Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.len() > UNIT_SUFFIX.len() && name.ends_with(UNIT_SUFFIX))
}

/// Recursively collect all unit files below `dir`, sorted by path.
///
/// Symlinks are skipped to avoid potential infinite recursion from circular
/// links; directories named in `exclude` are not entered.
pub fn collect_unit_files(dir: &Utf8Path, exclude: &[String]) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    collect_recursive(dir, exclude, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_recursive(
    dir: &Utf8Path,
    exclude: &[String],
    files: &mut Vec<Utf8PathBuf>,
) -> Result<(), CheckError> {
    let read_error = |source: io::Error| CheckError::Read {
        path: dir.to_owned(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let file_type = entry.file_type().map_err(read_error)?;
        if file_type.is_symlink() {
            continue;
        }
        let entry_path = Utf8PathBuf::from_path_buf(entry.path()).map_err(CheckError::NonUtf8Path)?;

        if file_type.is_dir() {
            let excluded = entry_path
                .file_name()
                .is_some_and(|name| exclude.iter().any(|skip| skip == name));
            if excluded {
                debug!(path = %entry_path, "skipping excluded directory");
            } else {
                collect_recursive(&entry_path, exclude, files)?;
            }
        } else if file_type.is_file() && is_unit_file(&entry_path) {
            files.push(entry_path);
        }
    }
    Ok(())
}
