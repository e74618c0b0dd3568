// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building the host model from text.

use ecow::EcoString;
use thiserror::Error;

/// A malformed value in a host-supplied model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A module identifier not of the form `org/name:version`.
    #[error("malformed module id '{0}': expected `org/name:version`")]
    MalformedModuleId(EcoString),
}
