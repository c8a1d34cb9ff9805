use uuid::Uuid;

/// Error type for reading, writing and checking form schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema document could not be parsed or written.
    #[error("Invalid form document: {0}")]
    Json(#[from] serde_json::Error),

    /// A multi-step form without any step.
    #[error("Form is multi-step but has no steps")]
    NoSteps,

    /// A top-level container that no step refers to.
    #[error("Container {0} does not belong to any step")]
    UnassignedContainer(Uuid),

    /// A container that more than one step refers to.
    #[error("Container {0} belongs to more than one step")]
    SharedContainer(Uuid),
}

/// Error type for form store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Form not found: {0}")]
    NotFound(Uuid),

    /// A writer panicked while holding the store lock.
    #[error("Form store lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl StoreError {
    /// Check if this error represents a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
