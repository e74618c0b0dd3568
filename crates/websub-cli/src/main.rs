// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! WebSub subscriber service checker command-line interface.
//!
//! This is the main entry point for the `websub-check` command.

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use websub_cli::commands::{self, check::OutputFormat};

/// Check WebSub subscriber service declarations against the callback contract
#[derive(Debug, Parser)]
#[command(name = "websub-check")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check compilation unit files for contract violations
    Check {
        /// Unit file or directory to check
        #[arg(default_value = ".")]
        path: String,

        /// Output format: text (default) or json
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Print the subscriber callback contract
    Contract,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let result = match cli.command {
        Command::Check { path, format } => commands::check::run_check(&path, format),
        Command::Contract => commands::contract::run_contract(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` with a `websub=warn` default.
fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, filter::Directive, fmt, prelude::*};

    let level = if verbose { "debug" } else { "warn" };
    let directive: Directive = format!("websub={level}").parse().into_diagnostic()?;
    let filter = if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(directive)
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}
