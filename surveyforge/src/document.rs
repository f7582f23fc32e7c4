//! Serialization of the survey to its canonical JSON document, and
//! validated import of such a document back into a [`Survey`].

use serde_json::Value;

use crate::Survey;

/// Error type for document import.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The text is not syntactically valid JSON.
    #[error("failed to parse survey document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The text parses, but does not have the shape of a survey.
    #[error("not a survey document: {0}")]
    Schema(String),
}

impl DocumentError {
    /// Check if this error is a syntax failure.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this error is a shape failure.
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

/// Serialize a survey to its canonical textual form.
///
/// Pretty-printed JSON with keys in declaration order, so the output is
/// stable for a given survey and suitable for display in a raw-text
/// editor surface.
pub fn serialize(survey: &Survey) -> String {
    serde_json::to_string_pretty(survey).expect("survey serialization cannot fail")
}

/// Parse a survey document.
///
/// Two stages: a syntax pass ([`DocumentError::Parse`]), then a shape
/// check requiring an object with a `fields` array followed by the typed
/// decode (both reported as [`DocumentError::Schema`]). The caller's
/// survey is only replaced after full success, so a failed import leaves
/// the editing session untouched.
pub fn parse(text: &str) -> Result<Survey, DocumentError> {
    let value: Value = serde_json::from_str(text)?;

    let Some(object) = value.as_object() else {
        return Err(DocumentError::Schema("expected an object".to_string()));
    };
    if !object.get("fields").is_some_and(Value::is_array) {
        return Err(DocumentError::Schema(
            "expected a `fields` array".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|err| DocumentError::Schema(err.to_string()))
}
