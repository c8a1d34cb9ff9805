mod cli;
mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use cli::{Cli, Command};
use formwork_doc_html::HtmlOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    // Logs go to stderr so stdout stays clean for markup and JSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    run(cli.command)
}

fn run(command: Command) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match command {
        Command::Render {
            schema,
            full_document,
            raw,
            semantic_containers,
            output,
        } => {
            let options = HtmlOptions::new()
                .full_document(full_document)
                .escape_text(!raw)
                .with_semantic_containers(semantic_containers);
            let html = commands::render(&schema, &options, output.as_deref())?;
            if output.is_none() {
                stdout.write_all(html.as_bytes())?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            schema,
            submission,
            required_only,
        } => {
            let result = commands::validate(&schema, &submission, required_only)?;
            serde_json::to_writer_pretty(&mut stdout, &result)?;
            writeln!(stdout)?;
            Ok(if result.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Check { schema } => {
            let violations = commands::check(&schema)?;
            if violations.is_empty() {
                writeln!(stdout, "{}: ok", schema.display())?;
                return Ok(ExitCode::SUCCESS);
            }
            for violation in &violations {
                writeln!(stdout, "{}: {violation}", schema.display())?;
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
