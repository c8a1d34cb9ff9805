use serde::{Deserialize, Serialize};

use crate::{Container, nullable};

/// One page of a multi-step form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Position of the step; steps are presented in ascending order.
    pub order: i32,

    #[serde(deserialize_with = "nullable::string")]
    pub title: String,

    pub containers: Vec<Container>,
}

impl Step {
    pub fn new(order: i32, title: impl Into<String>) -> Self {
        Self {
            order,
            title: title.into(),
            containers: Vec::new(),
        }
    }

    /// Append a container.
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }
}
