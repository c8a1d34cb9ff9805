//! # formwork
//!
//! Declarative form schemas. Describe a form once, render it with a
//! renderer crate and validate submissions against the very same schema.
//!
//! ## Usage
//!
//! ```rust
//! use formwork::{Container, Field, Form, Submission, validate};
//!
//! let form = Form::new("Newsletter").with_container(
//!     Container::block().with_field(Field::new("email", "email", "Email").required()),
//! );
//!
//! let result = validate(&form, &Submission::new());
//! assert!(!result.success);
//! assert_eq!(result.errors, vec!["Email is required".to_string()]);
//!
//! let result = validate(&form, &Submission::new().with("email", "a@b.com"));
//! assert!(result.success);
//! ```
//!
//! ## Renderers
//!
//! Renderers are separate crates that turn a `Form` into markup:
//! - `formwork-doc-html` - HTML form markup

// Re-export all types from formwork-types
pub use formwork_types::*;

mod validator;
pub use validator::{Validator, ValidatorOptions, submit, validate, validate_lookup};

// In-memory store for tests and single-process hosts
mod memory_store;
pub use memory_store::InMemoryFormStore;
