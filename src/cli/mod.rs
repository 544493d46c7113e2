//! CLI module for the Aster canonicalizer
//!
//! This module provides the command-line interface for the canonicalizer.
//!
//! ## Commands
//!
//! - `canon [file]` - Canonicalize a localized rule source (stdin when no file is given)
//! - `locales` - List registered lexicons
//! - `stages` - Print the resolved pipeline of a locale
//! - `check-lexicon <file>` - Validate a JSON lexicon
//! - `export-lexicon <id>` - Print a registered lexicon as JSON
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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

use aster_core::ConfigError;
use clap::{Parser, Subcommand};

use crate::version::ASTER_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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

    /// Render a configuration error as a miette diagnostic (code, message, help).
    pub fn config(err: ConfigError) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::config(err)
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

/// Canonicalizer for localized Aster rule sources
#[derive(Parser, Debug)]
#[command(name = "aster")]
#[command(version = ASTER_VERSION)]
#[command(about = "Canonicalize localized Aster rule sources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Print literal / code segments (debug)
    #[arg(long = "segments", value_name = "FILE")]
    pub segments_file: Option<PathBuf>,

    /// Locale whose delimiters `--segments` uses
    #[arg(long = "locale", value_name = "ID", requires = "segments_file")]
    pub segments_locale: Option<String>,
}

/// Options shared by commands that resolve a locale.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LocaleArgs {
    /// Locale id (default: zh-CN)
    #[arg(short = 'l', long = "locale", value_name = "ID")]
    pub locale: Option<String>,

    /// Additional JSON lexicon to register (reuses the built-in stages)
    #[arg(long = "lexicon", value_name = "FILE")]
    pub lexicon: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Canonicalize a rule source
    Canon {
        /// Source file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        #[command(flatten)]
        locale: LocaleArgs,
        /// JSON rules file with extra pattern stages
        #[arg(long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,
        /// Leave a stage out of the pipeline (repeatable)
        #[arg(long = "skip", value_name = "STAGE")]
        skip: Vec<String>,
        /// Keep locale string delimiters instead of normalizing them to `"`
        #[arg(long)]
        keep_quotes: bool,
        /// Print the text after every stage
        #[arg(long, conflicts_with = "output")]
        trace: bool,
        /// Write the result to a file instead of stdout
        #[arg(short = 'o', long = "output", value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// List registered lexicons
    Locales {
        /// Additional JSON lexicon to register
        #[arg(long = "lexicon", value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },

    /// Print the resolved pipeline order of a locale
    Stages {
        #[command(flatten)]
        locale: LocaleArgs,
        /// JSON rules file with extra pattern stages
        #[arg(long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,
    },

    /// Validate a JSON lexicon
    CheckLexicon {
        /// Lexicon file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print a registered lexicon as JSON
    ExportLexicon {
        /// Locale id
        #[arg(value_name = "ID")]
        id: String,
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
    // Handle debug flags first
    if let Some(file) = cli.segments_file {
        return commands::print_segments(&file, cli.segments_locale.as_deref());
    }

    match cli.command {
        Some(Command::Canon {
            file,
            locale,
            rules,
            skip,
            keep_quotes,
            trace,
            output,
        }) => commands::canonicalize_file(&commands::CanonOptions {
            file,
            locale,
            rules,
            skip,
            keep_quotes,
            trace,
            output,
        }),
        Some(Command::Locales { lexicon }) => commands::list_locales(lexicon.as_deref()),
        Some(Command::Stages { locale, rules }) => commands::list_stages(&locale, rules.as_deref()),
        Some(Command::CheckLexicon { file }) => commands::check_lexicon(&file),
        Some(Command::ExportLexicon { id }) => commands::export_lexicon(&id),
        // No command - show usage
        None => Err(CliError::failure("Error: no command given (try `aster --help`)")),
    }
}

// ============================================================================
// Tests
// ============================================================================
