use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FieldKind, FieldStyle, nullable};

/// A single input in a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    pub id: Uuid,

    /// The rendering strategy (`fieldType` in the schema document).
    pub field_type: FieldKind,

    /// Text shown next to the control; also used in error messages.
    #[serde(deserialize_with = "nullable::string")]
    pub label: String,

    /// The submission key. Also used as the control's `id` attribute.
    #[serde(deserialize_with = "nullable::string")]
    pub name: String,

    #[serde(deserialize_with = "nullable::string")]
    pub placeholder: String,

    /// Helper text rendered below the control.
    #[serde(deserialize_with = "nullable::string")]
    pub tooltip: String,

    pub default_value: Option<String>,

    pub is_required: bool,

    pub validation: FieldValidation,

    pub style: FieldStyle,

    /// Choices for select, checkbox and radio fields, in presentation order.
    pub options: Vec<FieldOption>,

    pub conditional_logic: Option<ConditionalLogic>,
}

impl Field {
    /// Create a field of the given kind with a fresh identifier.
    pub fn new(
        field_type: impl Into<FieldKind>,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            field_type: field_type.into(),
            label: label.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the generated identifier.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a choice.
    pub fn with_option(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.options.push(FieldOption::new(value, text));
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_conditional_logic(mut self, logic: ConditionalLogic) -> Self {
        self.conditional_logic = Some(logic);
        self
    }

    /// The name used when talking about this field to a person.
    ///
    /// This is the label, or the submission key when the label is blank.
    pub fn display_name(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Check if the field carries a visibility predicate.
    pub fn has_conditional_logic(&self) -> bool {
        self.conditional_logic.is_some()
    }

    /// Check if `value` is the field's default value.
    pub fn is_default(&self, value: &str) -> bool {
        self.default_value.as_deref() == Some(value)
    }
}

/// One choice of a select, checkbox or radio field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOption {
    /// Submitted value.
    #[serde(deserialize_with = "nullable::string")]
    pub value: String,

    /// Displayed text.
    #[serde(deserialize_with = "nullable::string")]
    pub text: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }
}

/// Constraints on a field's submitted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldValidation {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,

    /// A regular expression the whole value must match.
    pub pattern: Option<String>,

    /// Replaces the generated message for length and pattern violations.
    pub error_message: Option<String>,
}

impl FieldValidation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set length bounds (in characters).
    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Check if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.min_length.is_none() && self.max_length.is_none() && self.pattern.is_none()
    }
}

/// A predicate over other fields' values controlling this field's visibility.
///
/// The expression is carried through the schema untouched. Nothing in the
/// engine evaluates it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionalLogic(pub serde_json::Value);

impl ConditionalLogic {
    pub fn new(expression: serde_json::Value) -> Self {
        Self(expression)
    }

    /// The raw expression.
    pub fn expression(&self) -> &serde_json::Value {
        &self.0
    }
}
