use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ContainerStyle, Field};

/// The structural role of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    /// A plain layout block.
    #[default]
    #[serde(alias = "div", alias = "Div")]
    GenericBlock,

    /// A thematic section of the form.
    #[serde(alias = "Section")]
    Section,

    /// A group of related fields.
    #[serde(alias = "fieldset", alias = "Fieldset")]
    FieldGroup,
}

impl ContainerKind {
    /// The semantic HTML element for this kind of container.
    pub fn element(&self) -> &'static str {
        match self {
            Self::GenericBlock => "div",
            Self::Section => "section",
            Self::FieldGroup => "fieldset",
        }
    }
}

/// A styled block of fields.
///
/// Field order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
    pub id: Uuid,

    #[serde(rename = "type")]
    pub kind: ContainerKind,

    pub fields: Vec<Field>,

    pub style: ContainerStyle,
}

impl Container {
    /// Create an empty container with a fresh identifier and the default flex style.
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            fields: Vec::new(),
            style: ContainerStyle::default(),
        }
    }

    /// Create an empty generic block.
    pub fn block() -> Self {
        Self::new(ContainerKind::GenericBlock)
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_style(mut self, style: ContainerStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Find a field by its submission key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
