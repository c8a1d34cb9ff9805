//! CLI argument definitions using clap
//!
//! Commands:
//! - formwork render <schema> [--full-document] [--raw] [--semantic-containers] [--output <path>]
//! - formwork validate <schema> <submission> [--required-only]
//! - formwork check <schema>

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// formwork - render form schemas and validate submissions
#[derive(Parser, Debug)]
#[command(name = "formwork")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a form schema as HTML
    Render {
        /// Path to the form schema (JSON)
        schema: PathBuf,

        /// Emit a complete HTML document instead of a fragment
        #[arg(long)]
        full_document: bool,

        /// Insert user-supplied text without escaping
        #[arg(long)]
        raw: bool,

        /// Wrap containers in section/fieldset elements according to their kind
        #[arg(long)]
        semantic_containers: bool,

        /// Write the markup to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a submission (JSON object) against a form schema
    Validate {
        /// Path to the form schema (JSON)
        schema: PathBuf,

        /// Path to the submitted data (JSON object)
        submission: PathBuf,

        /// Only check required fields, ignoring length and pattern rules
        #[arg(long)]
        required_only: bool,
    },

    /// Check a form schema's multi-step invariants
    Check {
        /// Path to the form schema (JSON)
        schema: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
