// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rich diagnostic rendering using miette.
//!
//! Converts websub-core diagnostics into miette reports with the checker's
//! code (`WEBSUB_1xx`), the fix hint, and source context when the checked
//! source file is available.

use std::fmt;

use miette::{LabeledSpan, NamedSource, SourceCode, SourceSpan};
use websub_core::source_analysis::{Diagnostic as CoreDiagnostic, DiagnosticCode, Severity};

/// A checker finding ready to be rendered.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CheckDiagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub hint: Option<String>,
    /// Source text, when the unit's source file could be read.
    pub src: Option<NamedSource<String>>,
    pub span: SourceSpan,
}

impl CheckDiagnostic {
    /// Create a renderable diagnostic from a core diagnostic.
    ///
    /// The span is clamped to `source` so that a stale unit file cannot point
    /// past the end of the text.
    pub fn from_core_diagnostic(
        diagnostic: &CoreDiagnostic,
        source_path: &str,
        source: Option<&str>,
    ) -> Self {
        let span = match source {
            Some(text) => diagnostic.span.clamp_to(text.len()),
            None => diagnostic.span,
        };
        Self {
            code: diagnostic.code,
            severity: diagnostic.severity,
            message: diagnostic.message.to_string(),
            hint: diagnostic.hint.as_ref().map(ToString::to_string),
            src: source.map(|text| NamedSource::new(source_path, text.to_string())),
            span: span.into(),
        }
    }

    fn label(&self) -> &'static str {
        match self.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
        }
    }
}

impl miette::Diagnostic for CheckDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint
            .as_ref()
            .map(|hint| Box::new(hint) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.src.as_ref().map(|src| src as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.src.as_ref()?;
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label().to_string()),
            self.span,
        ))))
    }
}
