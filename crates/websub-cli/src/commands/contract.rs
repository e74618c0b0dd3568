// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `websub-check contract`: print the subscriber callback contract.

use std::io::{self, Write};

use miette::{IntoDiagnostic, Result};
use websub_core::semantic_analysis::ContractTable;

/// Print the contract table to stdout.
pub fn run_contract() -> Result<()> {
    write_contract(ContractTable::websub(), &mut io::stdout().lock()).into_diagnostic()
}

/// Write one block per callback: its parameter and return alternatives.
pub fn write_contract(table: &ContractTable, out: &mut dyn Write) -> io::Result<()> {
    for callback in table.iter() {
        writeln!(out, "{}", callback.name)?;
        writeln!(out, "  parameter: {}", callback.parameter_types.join(" | "))?;
        let nil = if callback.nil_return_allowed {
            " (may be omitted)"
        } else {
            ""
        };
        writeln!(out, "  returns:   {}{nil}", callback.return_types_display())?;
    }
    Ok(())
}
