//! Lenient deserialization for text properties.
//!
//! Authoring tools and older stores write `null` for text that was never
//! filled in. The schema treats that the same as an empty string.

use serde::{Deserialize, Deserializer};

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
