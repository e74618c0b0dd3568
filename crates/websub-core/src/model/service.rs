// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Service and method declarations as seen by the checker.

use std::fmt;

use ecow::EcoString;
use serde::{Deserialize, Serialize};

use super::TypeShape;
use crate::source_analysis::Span;

/// A qualifier keyword on a method declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    Remote,
    Resource,
    Isolated,
    Public,
    Private,
    Transactional,
}

impl Qualifier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Resource => "resource",
            Self::Isolated => "isolated",
            Self::Public => "public",
            Self::Private => "private",
            Self::Transactional => "transactional",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An annotation attached to a service declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// `None` when the host could not resolve the annotation's name.
    #[serde(default)]
    pub name: Option<EcoString>,
    /// Module the annotation was imported from. Not consulted when matching.
    #[serde(default)]
    pub module: Option<EcoString>,
}

impl Annotation {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            module: None,
        }
    }
}

/// The resolved signature of a method, as computed by the host's type checker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature {
    #[serde(default)]
    pub params: Vec<TypeShape>,
    /// `None` when the method declares no return type.
    #[serde(default)]
    pub return_type: Option<TypeShape>,
}

impl MethodSignature {
    #[must_use]
    pub fn new(params: Vec<TypeShape>, return_type: Option<TypeShape>) -> Self {
        Self {
            params,
            return_type,
        }
    }
}

/// A method declared inside a service body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: EcoString,
    #[serde(default)]
    pub qualifiers: Vec<Qualifier>,
    pub span: Span,
    /// Signature resolved by the host, when it was able to resolve one.
    #[serde(default)]
    pub signature: Option<MethodSignature>,
}

impl MethodDeclaration {
    #[must_use]
    pub fn new(name: &str, span: Span) -> Self {
        Self {
            name: name.into(),
            qualifiers: Vec::new(),
            span,
            signature: None,
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        if !self.qualifiers.contains(&qualifier) {
            self.qualifiers.push(qualifier);
        }
        self
    }

    #[must_use]
    pub fn with_signature(mut self, signature: MethodSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    #[must_use]
    pub fn has_qualifier(&self, qualifier: Qualifier) -> bool {
        self.qualifiers.contains(&qualifier)
    }
}

/// A `service` declaration attached to a subscriber listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDeclaration {
    pub span: Span,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

impl ServiceDeclaration {
    #[must_use]
    pub fn new(span: Span) -> Self {
        Self {
            span,
            annotations: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }
}
