//! Command implementations.
//!
//! Each command reads its inputs, runs the engine and returns the outcome;
//! printing and exit codes are left to `main`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use formwork::{Form, SchemaError, Submission, SubmissionResult, Validator, ValidatorOptions};
use formwork_doc_html::{HtmlOptions, to_html_with_options};
use tracing::info;

/// Read and parse a form schema document.
pub fn load_form(path: &Path) -> Result<Form> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    let form = Form::from_json(&json)
        .with_context(|| format!("Failed to parse schema {}", path.display()))?;
    info!(form = %form.id, title = %form.title, "Loaded form");
    Ok(form)
}

/// Read and parse a submission document.
pub fn load_submission(path: &Path) -> Result<Submission> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read submission {}", path.display()))?;
    Submission::from_json(&json)
        .with_context(|| format!("Submission {} is not a JSON object", path.display()))
}

/// Render a schema to HTML, writing it to `output` when given.
pub fn render(schema: &Path, options: &HtmlOptions, output: Option<&Path>) -> Result<String> {
    let form = load_form(schema)?;
    let html = to_html_with_options(&form, options);

    if let Some(output) = output {
        fs::write(output, &html)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!(path = %output.display(), bytes = html.len(), "Wrote markup");
    }
    Ok(html)
}

/// Validate a submission file against a schema file.
pub fn validate(schema: &Path, submission: &Path, required_only: bool) -> Result<SubmissionResult> {
    let form = load_form(schema)?;
    let data = load_submission(submission)?;
    let options = ValidatorOptions::new().with_constraints(!required_only);
    Ok(Validator::with_options(options).validate(&form, &data))
}

/// Check a schema's invariants, returning every violation.
pub fn check(schema: &Path) -> Result<Vec<SchemaError>> {
    Ok(load_form(schema)?.violations())
}
