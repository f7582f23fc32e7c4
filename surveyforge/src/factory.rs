//! Construction of new fields and options with fresh identifiers and
//! type-appropriate defaults.

use uuid::Uuid;

use crate::{ChoiceField, FieldKind, FieldOption, FieldType, InputField, SurveyField, TextareaField};

/// Label given to the single option a new choice field starts with.
pub const FIRST_OPTION_LABEL: &str = "Option 1";

/// Label given to an option created without an explicit one.
pub const DEFAULT_OPTION_LABEL: &str = "New Option";

/// Number of visible rows a new textarea starts with.
pub const DEFAULT_TEXTAREA_ROWS: u16 = 3;

/// Generate a fresh identifier.
///
/// 128 random bits rendered as lowercase hex: URL-safe and collision-free
/// for any realistic session without a global counter.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Create a new field of the given type.
///
/// The question starts empty and the field starts optional. Input and
/// textarea fields get an empty placeholder (textareas additionally
/// [`DEFAULT_TEXTAREA_ROWS`] rows); radio and checkbox fields get a single
/// option labeled [`FIRST_OPTION_LABEL`]; date fields get nothing extra.
pub fn new_field(field_type: FieldType) -> SurveyField {
    let kind = match field_type {
        FieldType::Input => FieldKind::Input(InputField {
            placeholder: Some(String::new()),
        }),
        FieldType::Textarea => FieldKind::Textarea(TextareaField {
            placeholder: Some(String::new()),
            rows: Some(DEFAULT_TEXTAREA_ROWS),
        }),
        FieldType::Radio => FieldKind::Radio(first_choice()),
        FieldType::Checkbox => FieldKind::Checkbox(first_choice()),
        FieldType::Date => FieldKind::Date,
    };
    SurveyField::new(generate_id(), kind)
}

/// Create a new option with a fresh identifier and the given label.
pub fn new_option(label: impl Into<String>) -> FieldOption {
    FieldOption::new(generate_id(), label)
}

fn first_choice() -> ChoiceField {
    ChoiceField::new(vec![new_option(FIRST_OPTION_LABEL)])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn identifiers_are_distinct_and_url_safe() {
        let ids: HashSet<_> = (0..1000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1000);
        for id in &ids {
            assert!(id.len() >= 8);
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn new_fields_start_unanswered() {
        for field_type in FieldType::ALL {
            let field = new_field(field_type);
            assert_eq!(field.question, "");
            assert!(!field.required);
            assert_eq!(field.field_type(), field_type);
        }
    }

    #[test]
    fn textarea_defaults() {
        let field = new_field(FieldType::Textarea);
        let FieldKind::Textarea(textarea) = field.kind() else {
            panic!("expected a textarea kind");
        };
        assert_eq!(textarea.placeholder.as_deref(), Some(""));
        assert_eq!(textarea.rows, Some(DEFAULT_TEXTAREA_ROWS));
    }

    #[test]
    fn choice_fields_start_with_one_option() {
        for field_type in [FieldType::Radio, FieldType::Checkbox] {
            let field = new_field(field_type);
            let options = field.options().unwrap();
            assert_eq!(options.len(), 1);
            assert_eq!(options[0].label, FIRST_OPTION_LABEL);
        }
    }

    #[test]
    fn date_fields_carry_nothing_extra() {
        let field = new_field(FieldType::Date);
        assert_eq!(field.kind(), &FieldKind::Date);
        assert!(field.options().is_none());
    }

    #[test]
    fn options_get_fresh_identifiers() {
        let a = new_option(DEFAULT_OPTION_LABEL);
        let b = new_option(DEFAULT_OPTION_LABEL);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.label, DEFAULT_OPTION_LABEL);
    }
}
