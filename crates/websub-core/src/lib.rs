// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Static conformance checks for WebSub subscriber services.
//!
//! This crate contains the checker core:
//! - The host model (service declarations, listener constructions, type shapes)
//! - The subscriber callback contract
//! - Semantic checks that report [`Diagnostic`](source_analysis::Diagnostic)s
//!
//! The checker does not parse source code. A host front end resolves the
//! declaration and hands over a read-only [`model`] view; every violation
//! found is reported, none is fatal.
//!
//! ```
//! use websub_core::model::{
//!     Annotation, MethodDeclaration, MethodSignature, Qualifier, ServiceDeclaration, TypeShape,
//! };
//! use websub_core::semantic_analysis::validate_service;
//! use websub_core::source_analysis::Span;
//!
//! let service = ServiceDeclaration::new(Span::new(0, 200))
//!     .with_annotation(Annotation::named("SubscriberServiceConfig"))
//!     .with_method(
//!         MethodDeclaration::new("onEventNotification", Span::new(40, 180))
//!             .with_qualifier(Qualifier::Remote)
//!             .with_signature(MethodSignature::new(
//!                 vec![TypeShape::reference("websub", "ContentDistributionMessage")],
//!                 None,
//!             )),
//!     );
//! assert!(validate_service(&service, &[]).is_empty());
//! ```

pub mod error;
pub mod model;
pub mod semantic_analysis;
pub mod source_analysis;
