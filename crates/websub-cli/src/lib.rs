// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Driver for the WebSub subscriber service checker.
//!
//! **DDD Context:** Command-line driver
//!
//! Finds compilation unit files, runs [`websub_core`] over them and renders
//! the findings. The `websub-check` binary is a thin clap front end over
//! [`commands`].

pub mod commands;
pub mod diagnostic;
pub mod error;
pub mod manifest;
