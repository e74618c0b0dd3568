// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service-level checks: the marker annotation and the mandatory callback.

use super::DiagnosticSink;
use super::contract::{ON_EVENT_NOTIFICATION, SERVICE_ANNOTATION};
use crate::model::ServiceDeclaration;
use crate::source_analysis::{Diagnostic, DiagnosticCode};

/// WEBSUB_101: the service must carry `SubscriberServiceConfig`.
///
/// Matched on the bare annotation name; the module it came from is ignored.
pub(super) fn check_service_annotation(
    service: &ServiceDeclaration,
    sink: &mut dyn DiagnosticSink,
) {
    let annotated = service
        .annotations
        .iter()
        .any(|annotation| annotation.name.as_deref().unwrap_or("") == SERVICE_ANNOTATION);
    if !annotated {
        sink.report(Diagnostic::new(
            DiagnosticCode::MissingServiceAnnotation,
            service.span,
            Vec::new(),
        ));
    }
}

/// WEBSUB_103: the service must declare `onEventNotification`.
///
/// Unlike the callback-name check, this lookup ignores case, so a service
/// whose only notification handler is misspelled in case gets the unknown
/// method diagnostic but not this one.
pub(super) fn check_event_notification_present(
    service: &ServiceDeclaration,
    sink: &mut dyn DiagnosticSink,
) {
    let present = service
        .methods
        .iter()
        .any(|method| method.name.eq_ignore_ascii_case(ON_EVENT_NOTIFICATION));
    if !present {
        sink.report(Diagnostic::new(
            DiagnosticCode::MissingEventNotification,
            service.span,
            Vec::new(),
        ));
    }
}
