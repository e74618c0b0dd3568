// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared test helpers for `semantic_analysis` tests.

use crate::model::{
    Annotation, MethodDeclaration, MethodSignature, Qualifier, ServiceDeclaration, TypeShape,
};
use crate::source_analysis::{Diagnostic, DiagnosticCode, Span};

use super::contract::{MODULE_PREFIX, ON_EVENT_NOTIFICATION, SERVICE_ANNOTATION};

pub fn websub_type(name: &str) -> TypeShape {
    TypeShape::reference(MODULE_PREFIX, name)
}

/// An annotated service with no methods.
pub fn subscriber_service() -> ServiceDeclaration {
    ServiceDeclaration::new(Span::new(0, 500)).with_annotation(Annotation::named(SERVICE_ANNOTATION))
}

pub fn remote_method(
    name: &str,
    params: Vec<TypeShape>,
    return_type: Option<TypeShape>,
) -> MethodDeclaration {
    MethodDeclaration::new(name, Span::new(20, 120))
        .with_qualifier(Qualifier::Remote)
        .with_signature(MethodSignature::new(params, return_type))
}

/// A conforming `onEventNotification` with the given return type.
pub fn event_notification(return_type: Option<TypeShape>) -> MethodDeclaration {
    remote_method(
        ON_EVENT_NOTIFICATION,
        vec![websub_type("ContentDistributionMessage")],
        return_type,
    )
}

pub fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().map(|d| d.code).collect()
}
