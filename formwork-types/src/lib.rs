//! Core types for the formwork crates.
//!
//! This crate provides the foundational types for describing forms:
//! - `Form`, `Step`, `Container` and `Field` - The schema tree
//! - `ContainerStyle`, `FlexStyle`, `GridStyle` and `FieldStyle` - Presentation
//! - `FieldKind` - The rendering strategy selected by a field's type tag
//! - `Submission` and `SubmissionResult` - Submitted data and validation outcome
//! - `FormStore` - The interface of the persistence collaborator

mod nullable;

mod style;
pub use style::{ContainerStyle, FieldStyle, FlexStyle, GridStyle, LayoutType};

mod field_kind;
pub use field_kind::FieldKind;

mod field;
pub use field::{ConditionalLogic, Field, FieldOption, FieldValidation};

mod container;
pub use container::{Container, ContainerKind};

mod step;
pub use step::Step;

mod form;
pub use form::Form;

mod submission;
pub use submission::{FORM_NOT_FOUND, Submission, SubmissionResult};

mod error;
pub use error::{SchemaError, StoreError};

mod traits;
pub use traits::FormStore;

pub use uuid::Uuid;
