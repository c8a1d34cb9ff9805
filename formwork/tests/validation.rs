//! Integration tests for submission validation.

use example_forms::{
    contact_form, job_application, newsletter_form, onboarding_form, registration_form,
};
use formwork::{
    Container, Field, Form, FormStore, InMemoryFormStore, Submission, SubmissionResult,
    Validator, ValidatorOptions, submit, validate, validate_lookup,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn newsletter_without_email_is_rejected() {
    let result = validate(&newsletter_form(), &Submission::new());

    assert_eq!(
        result,
        SubmissionResult {
            success: false,
            errors: vec!["Email is required".to_string()],
            data: None,
        }
    );
}

#[test]
fn newsletter_with_email_is_echoed() {
    let data = Submission::new().with("email", "a@b.com");
    let result = validate(&newsletter_form(), &data);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "errors": [], "data": {"email": "a@b.com"}})
    );
}

#[test]
fn all_missing_required_fields_are_reported_in_schema_order() {
    let result = validate(&registration_form(), &Submission::new());

    assert_eq!(
        result.errors,
        vec![
            "Username is required".to_string(),
            "Email is required".to_string(),
            "Plan is required".to_string(),
        ]
    );
}

#[test]
fn constraint_messages_follow_required_ones() {
    let data = Submission::new()
        .with("username", "Bad Name!")
        .with("email", "not-an-address")
        .with("plan", "pro");
    let result = validate(&registration_form(), &data);

    assert_eq!(
        result.errors,
        vec![
            "Username is not in the expected format".to_string(),
            "Enter a valid e-mail address".to_string(),
        ]
    );
}

#[test]
fn registration_accepts_checkbox_lists() {
    let data = Submission::new()
        .with("username", "ada_l")
        .with("email", "ada@example.com")
        .with("age", 36)
        .with("plan", "free")
        .with("interests", json!(["news", "events"]));
    let result = validate(&registration_form(), &data);

    assert!(result.success, "{:?}", result.errors);
    assert_eq!(result.data, Some(data));
}

#[test]
fn required_only_matches_legacy_behaviour() {
    let data = Submission::new()
        .with("name", "Ada")
        .with("email", "ada@example.com")
        .with("topic", "sales")
        .with("message", "Hi");
    let validator = Validator::with_options(ValidatorOptions::required_only());

    assert!(validator.validate(&contact_form(), &data).success);
    assert_eq!(
        validate(&contact_form(), &data).errors,
        vec!["Message must be at least 10 characters".to_string()]
    );
}

#[test]
fn multi_step_form_validates_top_level_containers() {
    let result = validate(&onboarding_form(), &Submission::new().with("team", "ops"));
    assert_eq!(result.errors, vec!["Full name is required".to_string()]);
}

#[test]
fn authored_document_validates() -> anyhow::Result<()> {
    let form = job_application()?;

    let result = validate(&form, &Submission::new().with("full_name", "Grace"));
    assert_eq!(result.errors, vec!["Position is required".to_string()]);

    let data = Submission::from_json(r#"{"full_name": "Grace", "position": "sre", "cv": null}"#)?;
    assert!(validate(&form, &data).success);
    Ok(())
}

#[test]
fn lookup_failure_short_circuits() {
    let result = validate_lookup(None, &Submission::new().with("email", "a@b.com"));
    assert_eq!(result, SubmissionResult::form_not_found());
}

#[test]
fn store_backed_submission() -> anyhow::Result<()> {
    let store = InMemoryFormStore::with_forms([newsletter_form(), contact_form()]);
    assert_eq!(store.list()?.len(), 2);

    let result = submit(&store, newsletter_form().id, &Submission::new())?;
    assert_eq!(result.errors, vec!["Email is required".to_string()]);

    let result = submit(&store, formwork::Uuid::from_u128(42), &Submission::new())?;
    assert_eq!(result.errors, vec!["Form not found".to_string()]);
    Ok(())
}

fn required_form(labels: &[String]) -> Form {
    let container = labels
        .iter()
        .enumerate()
        .fold(Container::block(), |container, (i, label)| {
            container.with_field(Field::new("text", format!("field_{i}"), label.clone()).required())
        });
    Form::new("Generated").with_container(container)
}

proptest! {
    /// Every missing required field yields exactly one error, in schema order.
    #[test]
    fn missing_required_fields_are_all_reported(
        labels in prop::collection::vec("[A-Z][a-z]{1,8}", 0..12),
    ) {
        let form = required_form(&labels);
        let result = validate(&form, &Submission::new());

        let expected: Vec<String> = labels.iter().map(|l| format!("{l} is required")).collect();
        prop_assert_eq!(result.success, labels.is_empty());
        prop_assert_eq!(result.errors, expected);
    }

    /// Validating the same pair twice gives the same result.
    #[test]
    fn validation_is_idempotent(
        labels in prop::collection::vec("[A-Z][a-z]{1,8}", 1..6),
        present in prop::collection::vec(any::<bool>(), 6),
    ) {
        let form = required_form(&labels);
        let data: Submission = labels
            .iter()
            .enumerate()
            .filter(|(i, _)| present[*i])
            .map(|(i, _)| (format!("field_{i}"), "value"))
            .collect();

        prop_assert_eq!(validate(&form, &data), validate(&form, &data));
    }
}
