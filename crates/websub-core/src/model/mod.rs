// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The host model: a read-only view of one compilation unit.
//!
//! **DDD Context:** Host Model
//!
//! These types are produced by the host front end (or decoded from its JSON
//! export) and borrowed by the checker for a single pass. Nothing here is
//! mutated by the checks.

mod listener;
mod service;
mod types;
mod unit;

pub use listener::{Argument, ExpressionKind, ListenerConstruction};
pub use service::{
    Annotation, MethodDeclaration, MethodSignature, Qualifier, ServiceDeclaration,
};
pub use types::{ModuleId, TypeShape, qualify};
pub use unit::CompilationUnit;
