// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Snapshot tests for the WebSub subscriber service checker.
//!
//! Tests are organized in the `cases/` directory, with each subdirectory
//! holding one `unit.websub.json`. The build script generates a test
//! function per directory; each test snapshots the diagnostics the checker
//! reports for that unit.
