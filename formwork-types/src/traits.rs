use uuid::Uuid;

use crate::Form;

/// Trait for the persistence collaborator that owns form schemas.
///
/// The engine never stores anything itself. Hosts hand it forms fetched
/// through a store and decide how and where those forms live.
pub trait FormStore {
    /// The error type for this store.
    type Error: Into<anyhow::Error>;

    /// Save a new form. The store assigns the identifier and returns the stored form.
    fn create(&self, form: Form) -> Result<Form, Self::Error>;

    /// Replace an existing form, matched by identifier.
    fn update(&self, form: Form) -> Result<Form, Self::Error>;

    /// Fetch a form by identifier. A missing form is `Ok(None)`, not an error.
    fn get(&self, id: Uuid) -> Result<Option<Form>, Self::Error>;

    /// Fetch every stored form.
    fn list(&self) -> Result<Vec<Form>, Self::Error>;
}
