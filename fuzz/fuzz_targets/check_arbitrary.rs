// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for checker crash safety testing.
//!
//! This target decodes arbitrary bytes as a compilation unit and, when they
//! decode, runs every check over it. Neither step may panic.
//!
//! # Success Criteria
//!
//! - Decoding never panics, whatever the input
//! - `check()` never panics on any decodable unit (inverted spans, empty
//!   names, deeply nested unions)
//! - Every diagnostic carries a rendered, non-empty message
//!
//! # Corpus Seeding
//!
//! Seed `fuzz/corpus/check_arbitrary/` with the `unit.websub.json` files
//! from `test-package-checker/cases/`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use websub_core::model::CompilationUnit;

fuzz_target!(|data: &[u8]| {
    // Invalid JSON is a driver concern, reported before checking
    if let Ok(unit) = serde_json::from_slice::<CompilationUnit>(data) {
        for diagnostic in unit.check() {
            assert!(!diagnostic.message.is_empty());
        }
    }
});
