// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Listener construction sites.
//!
//! The checker only needs the syntactic shape of the arguments passed when a
//! subscriber listener is created, so each argument is reduced to the kind of
//! expression it holds.

use ecow::EcoString;
use serde::{Deserialize, Serialize};

use crate::source_analysis::Span;

/// The syntactic kind of an argument expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpressionKind {
    /// `port`, `config`, `httpListener`.
    NameReference,
    /// `http:DEFAULT_PORT`.
    QualifiedNameReference,
    /// `{ secureSocket: ... }`.
    MappingConstructor,
    /// `9090`.
    NumericLiteral,
    /// `"localhost"`.
    StringLiteral,
    /// `getPort()`.
    FunctionCall,
    /// `new (...)` or `new websub:Listener(...)` nested as an argument.
    NewExpression,
    /// Anything else.
    Other,
}

impl ExpressionKind {
    /// Whether an argument of this kind could stand for a port, an
    /// `http:Listener` or a listener configuration record alike.
    #[must_use]
    pub const fn is_ambiguous(self) -> bool {
        matches!(self, Self::NameReference | Self::MappingConstructor)
    }
}

/// One argument of a listener construction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "camelCase")]
pub enum Argument {
    /// `f(expr)`.
    Positional { expression: ExpressionKind },
    /// `f(name = expr)`.
    Named {
        name: EcoString,
        expression: ExpressionKind,
    },
    /// `f(...expr)`.
    Rest { expression: ExpressionKind },
}

impl Argument {
    #[must_use]
    pub const fn positional(expression: ExpressionKind) -> Self {
        Self::Positional { expression }
    }

    #[must_use]
    pub fn named(name: &str, expression: ExpressionKind) -> Self {
        Self::Named {
            name: name.into(),
            expression,
        }
    }

    /// Kind of the argument's expression, whatever form the argument takes.
    #[must_use]
    pub const fn expression(&self) -> ExpressionKind {
        match self {
            Self::Positional { expression }
            | Self::Named { expression, .. }
            | Self::Rest { expression } => *expression,
        }
    }
}

/// A place where a subscriber listener is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerConstruction {
    pub span: Span,
    /// `None` for an implicit `new` without parentheses.
    #[serde(default)]
    pub arguments: Option<Vec<Argument>>,
}

impl ListenerConstruction {
    /// `new websub:Listener(...)` or `new (...)`.
    #[must_use]
    pub fn explicit(span: Span, arguments: Vec<Argument>) -> Self {
        Self {
            span,
            arguments: Some(arguments),
        }
    }

    /// A construction whose argument list may be absent (bare `new`).
    #[must_use]
    pub fn implicit(span: Span, arguments: Option<Vec<Argument>>) -> Self {
        Self {
            span,
            arguments,
        }
    }

    /// Arguments of the call, if it has a parenthesised argument list.
    #[must_use]
    pub fn arguments(&self) -> Option<&[Argument]> {
        self.arguments.as_deref()
    }
}
