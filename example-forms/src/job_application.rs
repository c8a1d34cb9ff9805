use formwork::{Form, SchemaError};

/// A schema document as saved by the authoring surface.
///
/// It uses the legacy container type `div`, a mixed-case field type and an
/// unknown `file` field carrying conditional logic.
pub const JOB_APPLICATION_JSON: &str = include_str!("../schemas/job_application.json");

/// Parse [`JOB_APPLICATION_JSON`].
pub fn job_application() -> Result<Form, SchemaError> {
    Form::from_json(JOB_APPLICATION_JSON)
}
