use serde::{Deserialize, Serialize};

use crate::SurveyField;

/// The title a freshly created survey starts with.
pub const DEFAULT_TITLE: &str = "My Survey";

/// The top-level survey document: a title and an ordered list of fields.
///
/// Field order is meaningful (display and navigation order) and field
/// identifiers are unique within the survey. The survey lives for the
/// editing session and is mutated in place through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    /// Display title of the survey.
    #[serde(default)]
    pub title: String,

    /// All fields, in display order.
    pub fields: Vec<SurveyField>,
}

impl Survey {
    /// Create an empty survey with the default title.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            fields: Vec::new(),
        }
    }

    /// Set the title, builder-style.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[SurveyField] {
        &self.fields
    }

    /// Get a mutable reference to the fields.
    pub fn fields_mut(&mut self) -> &mut Vec<SurveyField> {
        &mut self.fields
    }

    /// Look up a field by identifier.
    pub fn field(&self, id: &str) -> Option<&SurveyField> {
        self.fields.iter().find(|field| field.id() == id)
    }

    /// Look up a field by identifier, mutably.
    pub fn field_mut(&mut self, id: &str) -> Option<&mut SurveyField> {
        self.fields.iter_mut().find(|field| field.id() == id)
    }

    /// Get the position of a field within the survey.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    /// Check if the survey has any fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Default for Survey {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldKind;

    #[test]
    fn starts_empty_with_default_title() {
        let survey = Survey::new();
        assert_eq!(survey.title, DEFAULT_TITLE);
        assert!(survey.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let mut survey = Survey::new();
        survey.fields_mut().push(SurveyField::new("d1", FieldKind::Date));
        assert!(survey.field("d1").is_some());
        assert!(survey.field("missing").is_none());
        assert_eq!(survey.position("d1"), Some(0));
    }

    #[test]
    fn missing_title_deserializes_to_empty() {
        let survey: Survey = serde_json::from_str(r#"{ "fields": [] }"#).unwrap();
        assert_eq!(survey.title, "");
    }
}
