// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics emitted by the subscriber service checks.
//!
//! Every diagnostic carries a stable [`DiagnosticCode`], the ordered message
//! arguments the message was built from, and the message itself. Hosts that
//! localise messages can re-render from `code` + `args`.

use std::fmt;

use ecow::{EcoString, eco_format};
use serde::{Deserialize, Serialize};

use super::Span;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The declaration is rejected.
    Error,
    /// The declaration is accepted but likely wrong.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Stable identifiers for every violation the checker reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Missing `SubscriberServiceConfig` annotation.
    #[serde(rename = "WEBSUB_101")]
    MissingServiceAnnotation,
    /// Method declared without the `remote` qualifier.
    #[serde(rename = "WEBSUB_102")]
    MissingRemoteQualifier,
    /// No `onEventNotification` method.
    #[serde(rename = "WEBSUB_103")]
    MissingEventNotification,
    /// Method name outside the callback contract.
    #[serde(rename = "WEBSUB_104")]
    UnknownMethod,
    /// Parameter type not accepted for the callback.
    #[serde(rename = "WEBSUB_105")]
    InvalidParameterType,
    /// Callback declared without its required parameter.
    #[serde(rename = "WEBSUB_106")]
    MissingParameter,
    /// Return type not accepted for the callback.
    #[serde(rename = "WEBSUB_107")]
    InvalidReturnType,
    /// Callback declared without its required return type.
    #[serde(rename = "WEBSUB_108")]
    MissingReturnType,
    /// Listener constructed with an ambiguous pair of arguments.
    #[serde(rename = "WEBSUB_109")]
    AmbiguousListenerArguments,
}

impl DiagnosticCode {
    /// The code as printed in reports, e.g. `WEBSUB_104`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingServiceAnnotation => "WEBSUB_101",
            Self::MissingRemoteQualifier => "WEBSUB_102",
            Self::MissingEventNotification => "WEBSUB_103",
            Self::UnknownMethod => "WEBSUB_104",
            Self::InvalidParameterType => "WEBSUB_105",
            Self::MissingParameter => "WEBSUB_106",
            Self::InvalidReturnType => "WEBSUB_107",
            Self::MissingReturnType => "WEBSUB_108",
            Self::AmbiguousListenerArguments => "WEBSUB_109",
        }
    }

    /// Severity the checker reports the code with. Hosts may demote codes
    /// to warnings by rewriting [`Diagnostic::severity`].
    #[must_use]
    pub const fn severity(self) -> Severity {
        Severity::Error
    }

    /// The message for this code, built from the ordered `args`.
    ///
    /// Missing arguments render as empty text.
    #[must_use]
    pub fn message(self, args: &[EcoString]) -> EcoString {
        let arg = |index: usize| args.get(index).map_or("", EcoString::as_str);
        match self {
            Self::MissingServiceAnnotation => {
                "subscriber service should have `websub:SubscriberServiceConfig` annotation".into()
            }
            Self::MissingRemoteQualifier => {
                "subscriber service should only implement remote methods".into()
            }
            Self::MissingEventNotification => {
                "subscriber service should implement `onEventNotification` method".into()
            }
            Self::UnknownMethod => {
                eco_format!("`{}` method is not allowed in subscriber service declaration", arg(0))
            }
            Self::InvalidParameterType => eco_format!(
                "`{}` type parameters are not allowed for `{}` method",
                arg(0),
                arg(1)
            ),
            Self::MissingParameter => eco_format!(
                "`{}` method should have parameters of following types: `{}`",
                arg(0),
                arg(1)
            ),
            Self::InvalidReturnType => eco_format!(
                "`{}` type is not allowed to be returned from `{}` method",
                arg(0),
                arg(1)
            ),
            Self::MissingReturnType => eco_format!(
                "`{}` method should have return type of following types: `{}`",
                arg(0),
                arg(1)
            ),
            Self::AmbiguousListenerArguments => {
                "listener should be initialised with either a port or an `http:Listener` \
                 and an optional `websub:ListenerConfiguration`"
                    .into()
            }
        }
    }

    /// A short suggestion for fixing the violation.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::MissingServiceAnnotation => {
                "Annotate the service with `@websub:SubscriberServiceConfig { ... }`"
            }
            Self::MissingRemoteQualifier => "Declare the method as `remote function`",
            Self::MissingEventNotification => {
                "Add `remote function onEventNotification(websub:ContentDistributionMessage event)`"
            }
            Self::UnknownMethod => {
                "Only `onSubscriptionVerification`, `onSubscriptionValidationDenied` \
                 and `onEventNotification` may be declared"
            }
            Self::InvalidParameterType | Self::MissingParameter => {
                "Each callback takes exactly the parameter type listed in the callback contract"
            }
            Self::InvalidReturnType | Self::MissingReturnType => {
                "Return one of the types listed for this callback in the callback contract"
            }
            Self::AmbiguousListenerArguments => {
                "Pass a port number or an `http:Listener` as the first argument"
            }
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub span: Span,
    /// Ordered message arguments, as passed to [`DiagnosticCode::message`].
    pub args: Vec<EcoString>,
    pub message: EcoString,
    pub hint: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a diagnostic for `code`, rendering its message from `args`.
    #[must_use]
    pub fn new(code: DiagnosticCode, span: Span, args: Vec<EcoString>) -> Self {
        let message = code.message(&args);
        Self {
            code,
            severity: code.severity(),
            span,
            args,
            message,
            hint: Some(code.hint().into()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)
    }
}
