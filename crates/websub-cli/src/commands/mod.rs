// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Command implementations.

pub mod check;
pub mod contract;
