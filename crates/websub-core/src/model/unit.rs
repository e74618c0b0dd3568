// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! A compilation unit: everything the host extracted from one source file.

use ecow::EcoString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ListenerConstruction, ServiceDeclaration};
use crate::semantic_analysis::{EmbeddedSignatures, validate};
use crate::source_analysis::Diagnostic;

/// Listener constructions and subscriber services found in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Path of the source file, relative to the unit file, when known.
    #[serde(default)]
    pub source: Option<EcoString>,
    #[serde(default)]
    pub listeners: Vec<ListenerConstruction>,
    #[serde(default)]
    pub services: Vec<ServiceDeclaration>,
}

impl CompilationUnit {
    /// Checks every service against the unit's listener constructions, using
    /// the signatures embedded in each method.
    ///
    /// Listener constructions are inspected once per service, mirroring a host
    /// that runs the full check for each service it visits.
    #[must_use]
    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for service in &self.services {
            validate(service, &self.listeners, &EmbeddedSignatures, &mut diagnostics);
        }
        debug!(
            services = self.services.len(),
            diagnostics = diagnostics.len(),
            "checked compilation unit"
        );
        diagnostics
    }
}
