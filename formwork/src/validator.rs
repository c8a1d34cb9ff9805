//! Submission validation.
//!
//! The validator walks the form's top-level containers in schema order and
//! checks every field against the submitted data. All problems are
//! collected; nothing short-circuits except a missing form.

use regex::Regex;
use tracing::{debug, warn};

use crate::{Field, Form, FormStore, Submission, SubmissionResult, Uuid};

/// Options for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Whether to check length and pattern constraints in addition to
    /// required fields.
    pub enforce_constraints: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            enforce_constraints: true,
        }
    }
}

impl ValidatorOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only check required fields.
    pub fn required_only() -> Self {
        Self {
            enforce_constraints: false,
        }
    }

    /// Enable or disable length and pattern checks.
    pub fn with_constraints(mut self, enforce: bool) -> Self {
        self.enforce_constraints = enforce;
        self
    }
}

/// Checks submitted data against a form.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Validate a submission against a form.
    pub fn validate(&self, form: &Form, data: &Submission) -> SubmissionResult {
        debug!(
            form = %form.id,
            containers = form.containers.len(),
            keys = data.len(),
            "Validating submission"
        );

        let mut errors = Vec::new();
        for field in form.fields() {
            self.check_field(field, data, &mut errors);
        }

        if errors.is_empty() {
            SubmissionResult::accepted(data.clone())
        } else {
            debug!(form = %form.id, errors = errors.len(), "Submission rejected");
            SubmissionResult::rejected(errors)
        }
    }

    /// Validate a submission against the result of a form lookup.
    ///
    /// A failed lookup (`None`) yields a single "Form not found" error.
    pub fn validate_lookup(&self, form: Option<&Form>, data: &Submission) -> SubmissionResult {
        match form {
            Some(form) => self.validate(form, data),
            None => SubmissionResult::form_not_found(),
        }
    }

    /// Look a form up in a store and validate a submission against it.
    pub fn submit<S: FormStore>(
        &self,
        store: &S,
        id: Uuid,
        data: &Submission,
    ) -> Result<SubmissionResult, S::Error> {
        let form = store.get(id)?;
        if form.is_none() {
            debug!(form = %id, "Submission for unknown form");
        }
        Ok(self.validate_lookup(form.as_ref(), data))
    }

    fn check_field(&self, field: &Field, data: &Submission, errors: &mut Vec<String>) {
        if data.is_blank(&field.name) {
            if field.is_required {
                errors.push(format!("{} is required", field.display_name()));
            }
            return;
        }

        if !self.options.enforce_constraints
            || !field.field_type.is_textual()
            || field.validation.is_empty()
        {
            return;
        }
        // Only scalar values have a text form to measure.
        let Some(text) = data.text(&field.name) else {
            return;
        };

        let violations = constraint_violations(field, &text);
        if violations.is_empty() {
            return;
        }
        match &field.validation.error_message {
            Some(message) if !message.trim().is_empty() => errors.push(message.clone()),
            _ => errors.extend(violations),
        }
    }
}

fn constraint_violations(field: &Field, text: &str) -> Vec<String> {
    let rules = &field.validation;
    let name = field.display_name();
    let length = text.chars().count();
    let mut violations = Vec::new();

    if let Some(min) = rules.min_length {
        if length < min {
            violations.push(format!("{name} must be at least {min} characters"));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            violations.push(format!("{name} must be at most {max} characters"));
        }
    }
    let pattern = rules.pattern.as_deref().filter(|p| !p.is_empty());
    if let Some(re) = pattern.and_then(|pattern| full_match(field, pattern)) {
        if !re.is_match(text) {
            violations.push(format!("{name} is not in the expected format"));
        }
    }

    violations
}

/// Compile `pattern` as a whole-value match, as the HTML `pattern` attribute does.
///
/// The pattern must parse on its own; wrapping can make an invalid pattern
/// parse with the anchors in the wrong place.
fn full_match(field: &Field, pattern: &str) -> Option<Regex> {
    let anchored = Regex::new(pattern).and_then(|_| Regex::new(&format!("^(?:{pattern})$")));
    match anchored {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(field = %field.name, %pattern, "Skipping invalid pattern: {err}");
            None
        }
    }
}

/// Validate a submission with the default options.
pub fn validate(form: &Form, data: &Submission) -> SubmissionResult {
    Validator::new().validate(form, data)
}

/// Validate a submission against the result of a form lookup, with the default options.
pub fn validate_lookup(form: Option<&Form>, data: &Submission) -> SubmissionResult {
    Validator::new().validate_lookup(form, data)
}

/// Look a form up in a store and validate a submission against it, with the default options.
pub fn submit<S: FormStore>(
    store: &S,
    id: Uuid,
    data: &Submission,
) -> Result<SubmissionResult, S::Error> {
    Validator::new().submit(store, id, data)
}
