// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source locations and the diagnostics that point at them.
//!
//! **DDD Context:** Source Analysis
//!
//! The checker never reads source text itself. The host front end supplies
//! [`Span`]s on every node; the checker attaches them to each [`Diagnostic`]
//! it reports.

mod diagnostic;
mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Severity};
pub use span::Span;
