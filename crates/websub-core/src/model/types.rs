// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Resolved type shapes.
//!
//! The host's type checker resolves each parameter and return type and hands
//! the checker a [`TypeShape`]. Only the distinctions the callback contract
//! cares about survive: named references, unions, error types and nil.
//! Everything else collapses into [`TypeShape::Other`].

use std::fmt;
use std::str::FromStr;

use ecow::{EcoString, eco_format};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identity of the module a type was declared in.
///
/// Printed as `org/name:version`, the form that appears as a prefix of an
/// error type's signature. Serialised in the same form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId {
    pub org: EcoString,
    pub name: EcoString,
    pub version: EcoString,
}

impl ModuleId {
    #[must_use]
    pub fn new(
        org: impl Into<EcoString>,
        name: impl Into<EcoString>,
        version: impl Into<EcoString>,
    ) -> Self {
        Self {
            org: org.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// The prefix source code uses to refer to the module: the last
    /// `.`-separated segment of its name (`ballerina/foo.bar` → `bar`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.org, self.name, self.version)
    }
}

impl FromStr for ModuleId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ModelError::MalformedModuleId(s.into());
        let (org, rest) = s.split_once('/').ok_or_else(malformed)?;
        let (name, version) = rest.split_once(':').ok_or_else(malformed)?;
        if org.is_empty() || name.is_empty() || version.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(org, name, version))
    }
}

impl TryFrom<String> for ModuleId {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ModuleId> for String {
    fn from(id: ModuleId) -> Self {
        id.to_string()
    }
}

/// A resolved type, reduced to the cases the callback contract distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeShape {
    /// A named type or type alias, e.g. `websub:Acknowledgement`.
    Reference {
        /// Name of the declaring module; `None` for types local to the
        /// service's own module.
        #[serde(default)]
        module: Option<EcoString>,
        name: EcoString,
    },

    /// `A|B|...`. Optional types (`T?`) arrive as a union with [`TypeShape::Nil`].
    Union { members: Vec<TypeShape> },

    /// An error type, known only by its textual signature
    /// (e.g. `ballerina/websub:2.1.0:SubscriptionDeletedError`).
    Error {
        #[serde(default)]
        module: Option<ModuleId>,
        signature: EcoString,
    },

    /// `()`.
    Nil,

    /// Any other type (`string`, `int`, `map<json>`, ...).
    Other { signature: EcoString },
}

impl TypeShape {
    /// A reference to `name` declared in `module`.
    #[must_use]
    pub fn reference(module: &str, name: &str) -> Self {
        Self::Reference {
            module: (!module.is_empty()).then(|| module.into()),
            name: name.into(),
        }
    }

    /// `inner?`, i.e. `inner|()`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Union {
            members: vec![inner, Self::Nil],
        }
    }

    #[must_use]
    pub fn union(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Union {
            members: members.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn other(signature: &str) -> Self {
        Self::Other {
            signature: signature.into(),
        }
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Module-qualified name, for the shapes that have one.
    ///
    /// For an error type the name is recovered from the signature by
    /// stripping the printed module id and any `:` separators, then
    /// re-qualifying with the module prefix.
    #[must_use]
    pub fn qualified_name(&self) -> Option<EcoString> {
        match self {
            Self::Reference { module, name } => Some(qualify(name, module.as_deref())),
            Self::Error { module, signature } => {
                let stripped = match module {
                    Some(id) => signature.replace(&id.to_string(), ""),
                    None => signature.clone(),
                };
                let local = stripped.replace(":", "");
                Some(qualify(&local, module.as_ref().map(ModuleId::prefix)))
            }
            Self::Union { .. } | Self::Nil | Self::Other { .. } => None,
        }
    }

    /// Human-readable rendering used in diagnostic messages.
    #[must_use]
    pub fn description(&self) -> EcoString {
        match self {
            Self::Union { members } => {
                let (nils, rest): (Vec<&Self>, Vec<&Self>) =
                    members.iter().partition(|member| member.is_nil());
                if let ([_, ..], [single]) = (nils.as_slice(), rest.as_slice()) {
                    return eco_format!("{}?", single.description());
                }
                let parts: Vec<EcoString> = members.iter().map(Self::description).collect();
                parts.join("|").into()
            }
            Self::Nil => "()".into(),
            Self::Other { signature } => signature.clone(),
            Self::Reference { .. } | Self::Error { .. } => {
                self.qualified_name().unwrap_or_default()
            }
        }
    }
}

impl fmt::Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// `module:name`, or bare `name` when the module is unknown or blank.
#[must_use]
pub fn qualify(name: &str, module: Option<&str>) -> EcoString {
    match module.map(str::trim) {
        Some(module) if !module.is_empty() => eco_format!("{module}:{name}"),
        _ => name.into(),
    }
}
