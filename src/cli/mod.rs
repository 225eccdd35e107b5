//! CLI module for routegen
//!
//! A thin developer harness over the library: it reads a handler model from JSON, runs the generator, and writes the
//! resulting C# text.
//!
//! ## Commands
//!
//! - `emit <MODEL>` - Generate dispatch source for a model
//! - `check <MODEL>` - Validate and plan a model without writing anything
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::ROUTEGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The model was read but generation rejected it.
    pub const GENERATION_FAILED: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// HTTP handler dispatch generator
#[derive(Parser, Debug)]
#[command(name = "routegen")]
#[command(version = ROUTEGEN_VERSION)]
#[command(about = "Generate C# route registration and dispatch code from a handler model", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate dispatch source for a handler model
    Emit {
        /// Handler model (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Generator configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Write the source here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
        /// Write the body-bound type names here, one per line
        #[arg(long = "body-types", value_name = "FILE")]
        body_types: Option<PathBuf>,
    },

    /// Validate and plan a handler model without emitting
    Check {
        /// Handler model (JSON)
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Generator configuration (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Emit {
            model,
            config,
            out,
            body_types,
        } => commands::emit_model(&model, config.as_deref(), out.as_deref(), body_types.as_deref()),
        Command::Check { model, config } => commands::check_model(&model, config.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["routegen", "emit", "model.json"]).unwrap();
        if let Command::Emit {
            model,
            config,
            out,
            body_types,
        } = cli.command
        {
            assert_eq!(model, PathBuf::from("model.json"));
            assert!(config.is_none());
            assert!(out.is_none());
            assert!(body_types.is_none());
        } else {
            panic!("Expected Emit command");
        }
    }

    #[test]
    fn test_cli_parse_emit_with_outputs() {
        let cli = Cli::try_parse_from([
            "routegen",
            "emit",
            "model.json",
            "--config",
            "routegen.json",
            "-o",
            "Routes.g.cs",
            "--body-types",
            "bodies.txt",
        ])
        .unwrap();
        if let Command::Emit {
            config, out, body_types, ..
        } = cli.command
        {
            assert_eq!(config, Some(PathBuf::from("routegen.json")));
            assert_eq!(out, Some(PathBuf::from("Routes.g.cs")));
            assert_eq!(body_types, Some(PathBuf::from("bodies.txt")));
        } else {
            panic!("Expected Emit command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["routegen", "check", "model.json"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["routegen"]).is_err());
    }
}
