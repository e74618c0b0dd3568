// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Listener construction checks.
//!
//! A subscriber listener takes either a port or an `http:Listener` first,
//! optionally followed by a listener configuration. When the first two
//! arguments are both plain names or both mapping constructors (in any mix),
//! the call cannot be told apart from a config-first call, so it is flagged.

use tracing::trace;

use super::DiagnosticSink;
use crate::model::ListenerConstruction;
use crate::source_analysis::{Diagnostic, DiagnosticCode};

/// WEBSUB_109: flag listener constructions with an ambiguous argument pair.
pub(super) fn check_listener_arguments(
    listeners: &[ListenerConstruction],
    sink: &mut dyn DiagnosticSink,
) {
    for listener in listeners {
        let Some(arguments) = listener.arguments() else {
            continue;
        };
        let [first, second, ..] = arguments else {
            continue;
        };
        if first.expression().is_ambiguous() && second.expression().is_ambiguous() {
            trace!(start = listener.span.start(), "ambiguous listener arguments");
            sink.report(Diagnostic::new(
                DiagnosticCode::AmbiguousListenerArguments,
                listener.span,
                Vec::new(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Argument, ExpressionKind};
    use crate::source_analysis::Span;

    fn check(listeners: &[ListenerConstruction]) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        check_listener_arguments(listeners, &mut diagnostics);
        diagnostics
    }

    fn explicit(kinds: &[ExpressionKind]) -> ListenerConstruction {
        ListenerConstruction::explicit(
            Span::new(5, 40),
            kinds.iter().copied().map(Argument::positional).collect(),
        )
    }

    #[test]
    fn two_name_references_are_ambiguous() {
        let diagnostics = check(&[explicit(&[
            ExpressionKind::NameReference,
            ExpressionKind::NameReference,
        ])]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].code,
            DiagnosticCode::AmbiguousListenerArguments
        );
        assert_eq!(diagnostics[0].span, Span::new(5, 40));
        assert!(diagnostics[0].args.is_empty());
    }

    #[test]
    fn name_and_mapping_mix_is_ambiguous() {
        let diagnostics = check(&[explicit(&[
            ExpressionKind::MappingConstructor,
            ExpressionKind::NameReference,
        ])]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn numeric_port_first_is_not_ambiguous() {
        let diagnostics = check(&[explicit(&[
            ExpressionKind::NumericLiteral,
            ExpressionKind::MappingConstructor,
        ])]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn single_argument_is_not_inspected() {
        assert!(check(&[explicit(&[ExpressionKind::NameReference])]).is_empty());
        assert!(check(&[explicit(&[])]).is_empty());
    }

    #[test]
    fn only_first_two_arguments_matter() {
        let diagnostics = check(&[explicit(&[
            ExpressionKind::NameReference,
            ExpressionKind::MappingConstructor,
            ExpressionKind::NumericLiteral,
        ])]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn named_and_rest_arguments_are_inspected() {
        let listener = ListenerConstruction::implicit(
            Span::new(0, 30),
            Some(vec![
                Argument::named("listenTo", ExpressionKind::NameReference),
                Argument::Rest {
                    expression: ExpressionKind::MappingConstructor,
                },
            ]),
        );
        assert_eq!(check(&[listener]).len(), 1);
    }

    #[test]
    fn implicit_new_without_argument_list_is_skipped() {
        let listener = ListenerConstruction::implicit(Span::new(0, 3), None);
        assert!(check(&[listener]).is_empty());
    }

    #[test]
    fn each_construction_reports_independently() {
        let ambiguous = explicit(&[
            ExpressionKind::NameReference,
            ExpressionKind::NameReference,
        ]);
        let clear = explicit(&[
            ExpressionKind::NumericLiteral,
            ExpressionKind::NameReference,
        ]);
        let diagnostics = check(&[ambiguous.clone(), clear, ambiguous]);
        assert_eq!(diagnostics.len(), 2);
    }
}
