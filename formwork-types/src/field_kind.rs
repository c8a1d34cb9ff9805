use std::fmt;

use serde::{Deserialize, Serialize};

/// The rendering strategy named by a field's type tag.
///
/// Tags are matched case-insensitively. Tags that name no known strategy are
/// kept verbatim in [`FieldKind::Unknown`] so that schemas written for newer
/// renderers survive a round trip through older ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    /// Single-line text input.
    #[default]
    Text,

    /// Single-line e-mail input.
    Email,

    /// Numeric input.
    Number,

    /// Multi-line text input.
    Textarea,

    /// Drop-down list over the field's options.
    Select,

    /// One checkbox per option (multi-select).
    Checkbox,

    /// One radio button per option (single-select).
    Radio,

    /// Any tag not listed above.
    Unknown(String),
}

impl FieldKind {
    /// Parse a type tag, ignoring ASCII case.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "text" => Self::Text,
            "email" => Self::Email,
            "number" => Self::Number,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            _ => Self::Unknown(tag.to_string()),
        }
    }

    /// The canonical tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Number => "number",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Unknown(tag) => tag,
        }
    }

    /// Check if this kind picks from the field's option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Select | Self::Checkbox | Self::Radio)
    }

    /// Check if this kind accepts free text, and therefore length and pattern rules.
    ///
    /// Numbers are not textual: browsers ignore `minlength`, `maxlength` and
    /// `pattern` on number inputs.
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text | Self::Email | Self::Textarea)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Unknown(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(FieldKind::from_tag("TEXT"), FieldKind::Text);
        assert_eq!(FieldKind::from_tag("Email"), FieldKind::Email);
        assert_eq!(FieldKind::from_tag("textArea"), FieldKind::Textarea);
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let kind = FieldKind::from_tag("Signature");
        assert_eq!(kind, FieldKind::Unknown("Signature".to_string()));
        assert_eq!(kind.tag(), "Signature");
        assert!(kind.is_unknown());
    }

    #[test]
    fn serializes_as_plain_tag() {
        assert_eq!(
            serde_json::to_string(&FieldKind::Radio).unwrap(),
            "\"radio\""
        );
        let kind: FieldKind = serde_json::from_str("\"SELECT\"").unwrap();
        assert_eq!(kind, FieldKind::Select);
        let kind: FieldKind = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"date\"");
    }

    #[test]
    fn choice_and_textual_kinds() {
        assert!(FieldKind::Select.is_choice());
        assert!(FieldKind::Checkbox.is_choice());
        assert!(!FieldKind::Text.is_choice());
        assert!(FieldKind::Textarea.is_textual());
        assert!(!FieldKind::Radio.is_textual());
        assert!(!FieldKind::Number.is_textual());
        assert!(!FieldKind::from_tag("file").is_textual());
    }
}
