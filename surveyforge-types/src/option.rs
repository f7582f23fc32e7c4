use serde::{Deserialize, Serialize};

/// A selectable choice within a radio or checkbox field.
///
/// The identifier is immutable once created and unique within the owning
/// field's option list; the label is free-form user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Stable identifier, unique within the owning field.
    id: String,

    /// Display text shown next to the control.
    pub label: String,
}

impl FieldOption {
    /// Create a new option with the given identifier and label.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Get the option identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}
