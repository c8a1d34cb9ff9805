//! In-memory form store.
//!
//! `InMemoryFormStore` keeps forms in a map behind a read-write lock. It is
//! useful for tests and for hosts that load a fixed set of schemas at start-up.
//!
//! # Example
//!
//! ```rust
//! use formwork::{Container, Field, Form, FormStore, InMemoryFormStore, Submission, submit};
//!
//! let store = InMemoryFormStore::new();
//! let form = store
//!     .create(Form::new("Contact").with_container(
//!         Container::block().with_field(Field::new("text", "name", "Name").required()),
//!     ))
//!     .unwrap();
//!
//! let result = submit(&store, form.id, &Submission::new().with("name", "Ada")).unwrap();
//! assert!(result.success);
//! ```

use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use crate::{Form, FormStore, StoreError, Uuid};

/// A form store backed by a map in memory.
#[derive(Debug, Default)]
pub struct InMemoryFormStore {
    forms: RwLock<BTreeMap<Uuid, Form>>,
}

impl InMemoryFormStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given forms under their current identifiers.
    pub fn with_forms(forms: impl IntoIterator<Item = Form>) -> Self {
        let forms = forms.into_iter().map(|form| (form.id, form)).collect();
        Self {
            forms: RwLock::new(forms),
        }
    }

    /// Number of stored forms.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.forms.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl FormStore for InMemoryFormStore {
    type Error = StoreError;

    fn create(&self, mut form: Form) -> Result<Form, Self::Error> {
        form.id = Uuid::new_v4();
        let mut forms = self.forms.write().map_err(|_| StoreError::Poisoned)?;
        forms.insert(form.id, form.clone());
        debug!(form = %form.id, title = %form.title, "Created form");
        Ok(form)
    }

    fn update(&self, form: Form) -> Result<Form, Self::Error> {
        let mut forms = self.forms.write().map_err(|_| StoreError::Poisoned)?;
        let Some(existing) = forms.get_mut(&form.id) else {
            return Err(StoreError::NotFound(form.id));
        };
        *existing = form.clone();
        debug!(form = %form.id, "Updated form");
        Ok(form)
    }

    fn get(&self, id: Uuid) -> Result<Option<Form>, Self::Error> {
        let forms = self.forms.read().map_err(|_| StoreError::Poisoned)?;
        Ok(forms.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Form>, Self::Error> {
        let forms = self.forms.read().map_err(|_| StoreError::Poisoned)?;
        Ok(forms.values().cloned().collect())
    }
}
