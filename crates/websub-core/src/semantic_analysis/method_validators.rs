// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Per-method checks against the callback contract.
//!
//! **DDD Context:** Semantic Analysis
//!
//! Each function inspects one aspect of one method and reports at most one
//! diagnostic. The caller decides which checks run: the qualifier check runs
//! for every resolved method, the parameter and return checks only for
//! methods that name a known callback.

use ecow::EcoString;
use tracing::trace;

use super::DiagnosticSink;
use super::contract::{CallbackContract, ContractTable};
use crate::model::{MethodDeclaration, MethodSignature, Qualifier, TypeShape};
use crate::source_analysis::{Diagnostic, DiagnosticCode};

/// WEBSUB_102: every method must be `remote`.
pub(super) fn check_remote_qualifier(method: &MethodDeclaration, sink: &mut dyn DiagnosticSink) {
    if !method.has_qualifier(Qualifier::Remote) {
        sink.report(Diagnostic::new(
            DiagnosticCode::MissingRemoteQualifier,
            method.span,
            Vec::new(),
        ));
    }
}

/// WEBSUB_104: the method name must be one of the callbacks.
///
/// Returns the callback's contract when it is, so the remaining checks can
/// use it.
pub(super) fn check_known_callback<'t>(
    method: &MethodDeclaration,
    contracts: &'t ContractTable,
    sink: &mut dyn DiagnosticSink,
) -> Option<&'t CallbackContract> {
    let contract = contracts.get(&method.name);
    if contract.is_none() {
        sink.report(Diagnostic::new(
            DiagnosticCode::UnknownMethod,
            method.span,
            vec![method.name.clone()],
        ));
    }
    contract
}

/// WEBSUB_105 / WEBSUB_106: the parameter list must match the callback.
pub(super) fn check_parameters(
    method: &MethodDeclaration,
    signature: &MethodSignature,
    contract: &CallbackContract,
    sink: &mut dyn DiagnosticSink,
) {
    if signature.params.is_empty() {
        if !contract.parameter_types.is_empty() {
            sink.report(Diagnostic::new(
                DiagnosticCode::MissingParameter,
                method.span,
                vec![
                    method.name.clone(),
                    contract.parameter_types.concat().into(),
                ],
            ));
        }
        return;
    }

    let rejected: Vec<EcoString> = signature
        .params
        .iter()
        .map(parameter_type_name)
        .filter(|name| !contract.accepts_parameter(name))
        .collect();
    if !rejected.is_empty() {
        sink.report(Diagnostic::new(
            DiagnosticCode::InvalidParameterType,
            method.span,
            vec![rejected.join(",").into(), method.name.clone()],
        ));
    }
}

/// The name a parameter type is matched by: qualified where the shape has a
/// qualified name, its description otherwise.
fn parameter_type_name(ty: &TypeShape) -> EcoString {
    match ty {
        TypeShape::Reference { .. } => ty.qualified_name().unwrap_or_default(),
        _ => ty.description(),
    }
}

/// WEBSUB_107 / WEBSUB_108: the return type must be one of the callback's
/// alternatives, or omitted/nil where the callback allows it.
pub(super) fn check_return_type(
    method: &MethodDeclaration,
    signature: &MethodSignature,
    contract: &CallbackContract,
    sink: &mut dyn DiagnosticSink,
) {
    let missing = || {
        Diagnostic::new(
            DiagnosticCode::MissingReturnType,
            method.span,
            vec![method.name.clone(), contract.return_types_display().into()],
        )
    };

    let Some(return_type) = &signature.return_type else {
        if !contract.nil_return_allowed {
            sink.report(missing());
        }
        return;
    };

    if return_type.is_nil() && !contract.nil_return_allowed {
        sink.report(missing());
        return;
    }

    if is_return_type_rejected(return_type, contract) {
        sink.report(Diagnostic::new(
            DiagnosticCode::InvalidReturnType,
            method.span,
            vec![return_type.description(), method.name.clone()],
        ));
    }
}

/// Whether `ty` falls outside the callback's return alternatives.
///
/// A union is rejected as soon as any member is rejected, so nested unions
/// behave as if flattened.
fn is_return_type_rejected(ty: &TypeShape, contract: &CallbackContract) -> bool {
    let rejected = match ty {
        TypeShape::Union { members } => members
            .iter()
            .any(|member| is_return_type_rejected(member, contract)),
        TypeShape::Reference { .. } | TypeShape::Error { .. } => ty
            .qualified_name()
            .is_none_or(|name| !contract.accepts_return(&name)),
        TypeShape::Nil => !contract.nil_return_allowed,
        TypeShape::Other { .. } => true,
    };
    if rejected {
        trace!(ty = %ty, callback = contract.name, "return type rejected");
    }
    rejected
}
