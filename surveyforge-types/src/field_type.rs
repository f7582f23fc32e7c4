use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a field type name falls outside the closed set.
///
/// The set of field kinds is closed at compile time; this error only
/// materializes at the string boundary, e.g. when a type picker hands
/// over a name it read from somewhere else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported field type `{0}`")]
pub struct UnsupportedType(pub String);

/// The kind of a survey field.
///
/// This is the closed set a type picker offers. Adding a kind here is a
/// compile-time-checked change: every `match` on [`FieldType`] or
/// [`FieldKind`](crate::FieldKind) must be extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Input,

    /// Multi-line text input.
    Textarea,

    /// Single choice from a list of options.
    Radio,

    /// Any number of choices from a list of options.
    Checkbox,

    /// Calendar date.
    Date,
}

impl FieldType {
    /// All field types, in the order a type picker presents them.
    pub const ALL: [FieldType; 5] = [
        FieldType::Input,
        FieldType::Textarea,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Date,
    ];

    /// The wire name of this type (the `type` key of the document format).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
        }
    }

    /// Check if fields of this type own an option list.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnsupportedType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(Self::Input),
            "textarea" => Ok(Self::Textarea),
            "radio" => Ok(Self::Radio),
            "checkbox" => Ok(Self::Checkbox),
            "date" => Ok(Self::Date),
            other => Err(UnsupportedType(other.to_string())),
        }
    }
}
