use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Container, Field, SchemaError, Step, nullable};

/// The top-level form schema.
///
/// A form is presentation-agnostic: the same value is rendered to markup and
/// used to validate submissions. `containers` is the authoritative list of
/// what gets rendered and validated; `steps` only groups containers for
/// multi-step presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Form {
    pub id: Uuid,

    #[serde(deserialize_with = "nullable::string")]
    pub title: String,

    #[serde(deserialize_with = "nullable::string")]
    pub description: String,

    pub containers: Vec<Container>,

    pub is_multi_step: bool,

    /// Populated only when `is_multi_step` is set.
    pub steps: Vec<Step>,

    /// Stylesheet appended after the form.
    pub custom_css: Option<String>,

    /// Script appended after the form.
    pub custom_js: Option<String>,
}

impl Form {
    /// Create an empty single-page form with a fresh identifier.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Parse a schema document.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the schema document with camelCase keys.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a top-level container.
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Append a step and mark the form as multi-step.
    ///
    /// The step's containers are not added to the top-level list.
    pub fn with_step(mut self, step: Step) -> Self {
        self.is_multi_step = true;
        self.steps.push(step);
        self
    }

    pub fn with_custom_css(mut self, css: impl Into<String>) -> Self {
        self.custom_css = Some(css.into());
        self
    }

    pub fn with_custom_js(mut self, js: impl Into<String>) -> Self {
        self.custom_js = Some(js.into());
        self
    }

    /// Get the top-level containers.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Iterate over the fields of all top-level containers in schema order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.containers.iter().flat_map(|c| c.fields.iter())
    }

    /// Find a top-level field by its submission key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().find(|field| field.name == name)
    }

    /// Steps sorted by ascending order. Steps with equal order keep their schema order.
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|step| step.order);
        steps
    }

    /// Check if the form has no top-level containers.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Check the multi-step invariants, reporting the first violation.
    pub fn check(&self) -> Result<(), SchemaError> {
        match self.violations().into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }

    /// Collect every multi-step invariant violation.
    ///
    /// Single-page forms never violate anything: their steps are ignored.
    pub fn violations(&self) -> Vec<SchemaError> {
        if !self.is_multi_step {
            return Vec::new();
        }
        if self.steps.is_empty() {
            return vec![SchemaError::NoSteps];
        }

        let mut owners: HashMap<Uuid, usize> = HashMap::new();
        for step in &self.steps {
            for container in &step.containers {
                *owners.entry(container.id).or_default() += 1;
            }
        }

        let mut violations = Vec::new();
        let mut reported = Vec::new();
        for step in &self.steps {
            for container in &step.containers {
                if owners[&container.id] > 1 && !reported.contains(&container.id) {
                    reported.push(container.id);
                    violations.push(SchemaError::SharedContainer(container.id));
                }
            }
        }
        for container in &self.containers {
            if !owners.contains_key(&container.id) {
                violations.push(SchemaError::UnassignedContainer(container.id));
            }
        }
        violations
    }
}
