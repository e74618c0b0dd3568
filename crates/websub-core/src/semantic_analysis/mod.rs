// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Conformance checks for subscriber service declarations.
//!
//! A subscriber service is accepted only if it matches the callback contract
//! in [`contract`]. The checks run in a fixed order and never stop early:
//!
//! 1. Listener construction arguments (`listener_validator`)
//! 2. The `SubscriberServiceConfig` annotation (`service_validator`)
//! 3. Presence of `onEventNotification` (`service_validator`)
//! 4. Per method: `remote` qualifier, callback name, parameters, return type
//!    (`method_validators`)
//!
//! Every violation is reported independently, so one method can collect
//! several diagnostics.
//!
//! The checker is decoupled from any particular front end: the host supplies
//! resolved signatures through [`SymbolResolver`] and receives diagnostics
//! through [`DiagnosticSink`].

use tracing::{debug, trace};

use crate::model::{ListenerConstruction, MethodDeclaration, MethodSignature, ServiceDeclaration};
use crate::source_analysis::Diagnostic;

pub mod contract;
mod listener_validator;
mod method_validators;
mod service_validator;

#[cfg(test)]
mod test_helpers;

pub use contract::{CallbackContract, ContractTable};

/// Resolves the signature of a declared method.
///
/// Returning `None` means the host could not resolve the method; the checker
/// then skips that method's per-method checks without reporting anything.
pub trait SymbolResolver {
    fn method_signature<'a>(&'a self, method: &'a MethodDeclaration)
    -> Option<&'a MethodSignature>;
}

/// Reads the signature the host embedded in each [`MethodDeclaration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSignatures;

impl SymbolResolver for EmbeddedSignatures {
    fn method_signature<'a>(
        &'a self,
        method: &'a MethodDeclaration,
    ) -> Option<&'a MethodSignature> {
        method.signature.as_ref()
    }
}

/// Append-only destination for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Checks one service declaration against the subscriber callback contract.
///
/// `listeners` are all listener constructions reachable from the service's
/// module. Diagnostics are reported to `sink` in check order.
pub fn validate(
    service: &ServiceDeclaration,
    listeners: &[ListenerConstruction],
    resolver: &dyn SymbolResolver,
    sink: &mut dyn DiagnosticSink,
) {
    let contracts = ContractTable::websub();
    debug!(
        methods = service.methods.len(),
        listeners = listeners.len(),
        "validating subscriber service"
    );

    listener_validator::check_listener_arguments(listeners, sink);
    service_validator::check_service_annotation(service, sink);
    service_validator::check_event_notification_present(service, sink);

    for method in &service.methods {
        let Some(signature) = resolver.method_signature(method) else {
            trace!(method = %method.name, "skipping unresolved method");
            continue;
        };
        method_validators::check_remote_qualifier(method, sink);
        let Some(contract) = method_validators::check_known_callback(method, contracts, sink)
        else {
            continue;
        };
        method_validators::check_parameters(method, signature, contract, sink);
        method_validators::check_return_type(method, signature, contract, sink);
    }
}

/// Checks a service whose methods carry embedded signatures and returns the
/// diagnostics.
#[must_use]
pub fn validate_service(
    service: &ServiceDeclaration,
    listeners: &[ListenerConstruction],
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    validate(service, listeners, &EmbeddedSignatures, &mut diagnostics);
    diagnostics
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::test_helpers::{
        codes, event_notification, remote_method, subscriber_service, websub_type,
    };
    use super::*;
    use crate::model::{
        Annotation, Argument, ExpressionKind, MethodSignature, Qualifier, TypeShape,
    };
    use crate::source_analysis::{DiagnosticCode, Span};

    /// Resolver backed by a name → signature map, like a host symbol table.
    struct SymbolTable(HashMap<&'static str, MethodSignature>);

    impl SymbolResolver for SymbolTable {
        fn method_signature<'a>(
            &'a self,
            method: &'a MethodDeclaration,
        ) -> Option<&'a MethodSignature> {
            self.0.get(method.name.as_str())
        }
    }

    #[test]
    fn conforming_service_has_no_diagnostics() {
        let service = subscriber_service().with_method(event_notification(Some(
            TypeShape::optional(websub_type("Acknowledgement")),
        )));
        assert!(validate_service(&service, &[]).is_empty());
    }

    #[test]
    fn omitted_return_is_accepted_when_nil_is_permitted() {
        let service = subscriber_service().with_method(event_notification(None));
        assert!(validate_service(&service, &[]).is_empty());
    }

    #[test]
    fn verification_without_remote_reports_only_the_qualifier() {
        let method = MethodDeclaration::new("onSubscriptionVerification", Span::new(40, 90))
            .with_signature(MethodSignature::new(
                vec![websub_type("SubscriptionVerification")],
                Some(websub_type("SubscriptionVerificationSuccess")),
            ));
        let service = subscriber_service()
            .with_method(event_notification(None))
            .with_method(method);
        let diagnostics = validate_service(&service, &[]);
        assert_eq!(codes(&diagnostics), [DiagnosticCode::MissingRemoteQualifier]);
        assert_eq!(diagnostics[0].span, Span::new(40, 90));
    }

    #[test]
    fn unknown_method_still_gets_qualifier_check() {
        let method = MethodDeclaration::new("onPing", Span::new(40, 60)).with_signature(
            MethodSignature::new(vec![TypeShape::other("string")], Some(TypeShape::other("int"))),
        );
        let service = subscriber_service()
            .with_method(event_notification(None))
            .with_method(method);
        assert_eq!(
            codes(&validate_service(&service, &[])),
            [
                DiagnosticCode::MissingRemoteQualifier,
                DiagnosticCode::UnknownMethod
            ]
        );
    }

    #[test]
    fn diagnostics_follow_check_order() {
        let listener = crate::model::ListenerConstruction::explicit(
            Span::new(0, 10),
            vec![
                Argument::positional(ExpressionKind::NameReference),
                Argument::positional(ExpressionKind::NameReference),
            ],
        );
        let service = ServiceDeclaration::new(Span::new(20, 200)).with_method(
            MethodDeclaration::new("onSubscriptionVerification", Span::new(30, 60))
                .with_signature(MethodSignature::default()),
        );
        assert_eq!(
            codes(&validate_service(&service, &[listener])),
            [
                DiagnosticCode::AmbiguousListenerArguments,
                DiagnosticCode::MissingServiceAnnotation,
                DiagnosticCode::MissingEventNotification,
                DiagnosticCode::MissingRemoteQualifier,
                DiagnosticCode::MissingParameter,
                DiagnosticCode::MissingReturnType,
            ]
        );
    }

    #[test]
    fn unresolved_methods_are_skipped_silently() {
        let unresolved = MethodDeclaration::new("onEventNotification", Span::new(30, 60));
        let service = subscriber_service().with_method(unresolved);
        assert!(validate_service(&service, &[]).is_empty());
    }

    #[test]
    fn unresolved_methods_still_count_for_presence() {
        let service = subscriber_service()
            .with_method(MethodDeclaration::new("onEventNotification", Span::new(30, 60)));
        let diagnostics = validate_service(&service, &[]);
        assert!(
            !codes(&diagnostics).contains(&DiagnosticCode::MissingEventNotification),
            "{diagnostics:?}"
        );
    }

    #[test]
    fn external_resolver_supplies_signatures() {
        let table = SymbolTable(HashMap::from([(
            "onEventNotification",
            MethodSignature::new(
                vec![websub_type("ContentDistributionMessage")],
                Some(TypeShape::other("string")),
            ),
        )]));
        let method = MethodDeclaration::new("onEventNotification", Span::new(30, 60))
            .with_qualifier(Qualifier::Remote);
        let service = subscriber_service().with_method(method);

        let mut diagnostics = Vec::new();
        validate(&service, &[], &table, &mut diagnostics);
        assert_eq!(codes(&diagnostics), [DiagnosticCode::InvalidReturnType]);
        assert_eq!(diagnostics[0].args[0], "string");
    }

    #[test]
    fn one_method_can_collect_several_diagnostics() {
        let method = MethodDeclaration::new("onSubscriptionVerification", Span::new(30, 60))
            .with_signature(MethodSignature::new(
                vec![TypeShape::other("string")],
                Some(TypeShape::other("int")),
            ));
        let service = subscriber_service()
            .with_method(event_notification(None))
            .with_method(method);
        assert_eq!(
            codes(&validate_service(&service, &[])),
            [
                DiagnosticCode::MissingRemoteQualifier,
                DiagnosticCode::InvalidParameterType,
                DiagnosticCode::InvalidReturnType,
            ]
        );
    }

    #[test]
    fn validate_is_idempotent() {
        let service = ServiceDeclaration::new(Span::new(0, 100))
            .with_annotation(Annotation::named("ServiceConfig"))
            .with_method(remote_method(
                "onEventNotification",
                vec![TypeShape::other("json")],
                Some(TypeShape::union([
                    websub_type("Acknowledgement"),
                    TypeShape::other("string"),
                ])),
            ));
        let first = validate_service(&service, &[]);
        let second = validate_service(&service, &[]);
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
