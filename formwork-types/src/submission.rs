use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The error reported when a submission targets a form that does not exist.
pub const FORM_NOT_FOUND: &str = "Form not found";

/// Data submitted for a form, keyed by field name.
///
/// Keys keep their insertion order so that echoing a submission back returns
/// it exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    values: Map<String, Value>,
}

impl Submission {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Parse a submission from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add a value for the given field name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a value, replacing any previous value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Check whether the value for `name` counts as not provided.
    ///
    /// Missing keys, `null`, whitespace-only strings and empty arrays or
    /// objects are all blank.
    pub fn is_blank(&self, name: &str) -> bool {
        match self.values.get(name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Object(entries)) => entries.is_empty(),
            Some(Value::Bool(_) | Value::Number(_)) => false,
        }
    }

    /// The text form of a scalar value, as it would arrive from an HTML form.
    ///
    /// Arrays and objects have no text form.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Submission {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Submission {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut submission = Self::new();
        for (name, value) in iter {
            submission.insert(name, value);
        }
        submission
    }
}

/// The outcome of validating a submission against a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,

    /// Human-readable problems, in schema order.
    pub errors: Vec<String>,

    /// The submission, echoed back only when validation succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Submission>,
}

impl SubmissionResult {
    /// A passing result echoing the submitted data.
    pub fn accepted(data: Submission) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    /// A failing result carrying the collected errors.
    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            data: None,
        }
    }

    /// The result for a submission to a form that does not exist.
    pub fn form_not_found() -> Self {
        Self::rejected(vec![FORM_NOT_FOUND.to_string()])
    }
}
