use serde::{Deserialize, Serialize};

use crate::{FieldOption, FieldType};

/// A single field in a survey.
///
/// Common attributes live here; everything specific to one kind lives in
/// the [`FieldKind`] variant. The kind is immutable after creation:
/// changing a field's kind means deleting it and adding a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyField {
    /// Stable identifier, unique within the survey.
    id: String,

    /// The question text shown to the respondent. May be empty.
    pub question: String,

    /// Whether an answer is required.
    pub required: bool,

    /// Kind tag plus kind-specific attributes, inline on the wire.
    #[serde(flatten)]
    kind: FieldKind,
}

impl SurveyField {
    /// Create a new field with the given identifier and kind.
    ///
    /// The question starts empty and the field starts optional. Kind
    /// defaults (initial option, textarea rows) are the factory's job.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            question: String::new(),
            required: false,
            kind,
        }
    }

    /// Get the field identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the kind tag of this field.
    pub fn field_type(&self) -> FieldType {
        match &self.kind {
            FieldKind::Input(_) => FieldType::Input,
            FieldKind::Textarea(_) => FieldType::Textarea,
            FieldKind::Radio(_) => FieldType::Radio,
            FieldKind::Checkbox(_) => FieldType::Checkbox,
            FieldKind::Date => FieldType::Date,
        }
    }

    /// Get the field kind.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Get a mutable reference to the field kind.
    ///
    /// This mutates attributes within the kind; it does not change the
    /// kind tag itself.
    pub fn kind_mut(&mut self) -> &mut FieldKind {
        &mut self.kind
    }

    /// Get the option list, if this is a choice field.
    pub fn options(&self) -> Option<&[FieldOption]> {
        match &self.kind {
            FieldKind::Radio(choice) | FieldKind::Checkbox(choice) => Some(&choice.options),
            _ => None,
        }
    }

    /// Get a mutable option list, if this is a choice field.
    pub fn options_mut(&mut self) -> Option<&mut Vec<FieldOption>> {
        match &mut self.kind {
            FieldKind::Radio(choice) | FieldKind::Checkbox(choice) => Some(&mut choice.options),
            _ => None,
        }
    }

    /// Merge a partial update into this field.
    ///
    /// Common attributes always apply. Kind-specific attributes apply only
    /// to kinds that carry them and are silently ignored otherwise: the
    /// patch is permissive, it never fails and never changes the kind tag.
    pub fn apply(&mut self, patch: FieldPatch) {
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(placeholder) = patch.placeholder {
            match &mut self.kind {
                FieldKind::Input(input) => input.placeholder = Some(placeholder),
                FieldKind::Textarea(textarea) => textarea.placeholder = Some(placeholder),
                _ => {}
            }
        }
        if let Some(rows) = patch.rows
            && let FieldKind::Textarea(textarea) = &mut self.kind
        {
            textarea.rows = Some(rows);
        }
    }
}

/// The kind of a field, with kind-specific attributes.
///
/// Serialized inline with the common attributes under a `type` tag, so a
/// field on the wire reads `{"id": ..., "question": ..., "required": ...,
/// "type": "textarea", "placeholder": ..., "rows": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input.
    Input(InputField),

    /// Multi-line text input.
    Textarea(TextareaField),

    /// Single choice from a list of options.
    Radio(ChoiceField),

    /// Any number of choices from a list of options.
    Checkbox(ChoiceField),

    /// Calendar date. No extra attributes.
    Date,
}

/// Attributes of a single-line text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Hint text shown while the input is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// Attributes of a multi-line text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextareaField {
    /// Hint text shown while the textarea is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Visible rows, intended range 2-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u16>,
}

/// Attributes of a radio or checkbox field.
///
/// The option list is ordered (render and answer order) and must keep at
/// least one entry once the field exists; the store's remove operation
/// refuses to go below that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceField {
    /// The selectable options, in display order.
    pub options: Vec<FieldOption>,
}

impl ChoiceField {
    /// Create a choice field with the given options.
    pub fn new(options: Vec<FieldOption>) -> Self {
        Self { options }
    }
}

/// A partial update to a field, applied with [`SurveyField::apply`].
///
/// Unset attributes are left untouched. Kind-specific attributes on a
/// kind that lacks them are ignored, not rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    /// New question text.
    pub question: Option<String>,

    /// New required flag.
    pub required: Option<bool>,

    /// New placeholder (input and textarea kinds).
    pub placeholder: Option<String>,

    /// New row count (textarea kind).
    pub rows: Option<u16>,
}

impl FieldPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Set the required flag.
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the visible row count.
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = Some(rows);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textarea() -> SurveyField {
        SurveyField::new(
            "t1",
            FieldKind::Textarea(TextareaField {
                placeholder: Some(String::new()),
                rows: Some(3),
            }),
        )
    }

    #[test]
    fn apply_merges_common_attributes() {
        let mut field = SurveyField::new("d1", FieldKind::Date);
        field.apply(FieldPatch::new().question("When?").required(true));
        assert_eq!(field.question, "When?");
        assert!(field.required);
    }

    #[test]
    fn apply_leaves_unset_attributes_untouched() {
        let mut field = textarea();
        field.question = "Tell us more".to_string();
        field.apply(FieldPatch::new().rows(6));
        assert_eq!(field.question, "Tell us more");
        assert!(!field.required);
        assert_eq!(
            field.kind(),
            &FieldKind::Textarea(TextareaField {
                placeholder: Some(String::new()),
                rows: Some(6),
            })
        );
    }

    #[test]
    fn apply_ignores_attributes_of_other_kinds() {
        let mut field = SurveyField::new("d1", FieldKind::Date);
        field.apply(FieldPatch::new().placeholder("n/a").rows(5));
        assert_eq!(field.kind(), &FieldKind::Date);
        assert_eq!(field.field_type(), crate::FieldType::Date);
    }

    #[test]
    fn rows_patch_does_not_reach_input_fields() {
        let mut field = SurveyField::new("i1", FieldKind::Input(InputField::default()));
        field.apply(FieldPatch::new().placeholder("Your name").rows(8));
        assert_eq!(
            field.kind(),
            &FieldKind::Input(InputField {
                placeholder: Some("Your name".to_string()),
            })
        );
    }

    #[test]
    fn wire_shape_carries_inline_type_tag() {
        let field = textarea();
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["id"], "t1");
        assert_eq!(json["type"], "textarea");
        assert_eq!(json["rows"], 3);
        assert_eq!(json["placeholder"], "");
        assert_eq!(json["required"], false);
    }

    #[test]
    fn date_fields_have_no_extra_keys() {
        let field = SurveyField::new("d1", FieldKind::Date);
        let json = serde_json::to_value(&field).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["id", "question", "required", "type"]);
    }

    #[test]
    fn absent_optional_keys_deserialize_to_none() {
        let field: SurveyField = serde_json::from_value(serde_json::json!({
            "id": "x", "type": "textarea", "question": "", "required": false,
        }))
        .unwrap();
        assert_eq!(
            field.kind(),
            &FieldKind::Textarea(TextareaField::default())
        );
    }
}
