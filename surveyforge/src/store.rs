//! The authoritative in-memory survey document and its mutation API.

use log::{debug, info, warn};

use crate::{FieldPatch, Survey, SurveyField, document, factory, reorder};

/// The survey being edited, plus the current selection.
///
/// There is exactly one logical writer (the current editor action) and
/// every operation replaces state atomically from the caller's
/// perspective, so the store is a plain owned value: construct it once per
/// session and hand a reference to every surface. Surfaces read through
/// the accessors and mutate exclusively through the operations here.
#[derive(Debug, Clone, Default)]
pub struct SurveyStore {
    survey: Survey,
    selection: Option<String>,
}

impl SurveyStore {
    /// Create a store holding an empty survey with the default title.
    pub fn new() -> Self {
        Self {
            survey: Survey::new(),
            selection: None,
        }
    }

    /// Get the survey.
    pub fn survey(&self) -> &Survey {
        &self.survey
    }

    /// Get the identifier of the selected field, if any.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Get the selected field, if the selection points at a present field.
    ///
    /// A dangling selection is treated as no selection; it self-corrects
    /// on the next lookup.
    pub fn selected_field(&self) -> Option<&SurveyField> {
        self.survey.field(self.selection.as_deref()?)
    }

    /// Set the survey title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.survey.title = title.into();
    }

    /// Append a field and select it.
    ///
    /// The field comes from [`factory::new_field`](crate::factory::new_field),
    /// which guarantees a fresh identifier.
    pub fn add_field(&mut self, field: SurveyField) {
        debug!("adding {} field {}", field.field_type(), field.id());
        self.selection = Some(field.id().to_string());
        self.survey.fields_mut().push(field);
    }

    /// Merge a partial update into the field with the given identifier.
    ///
    /// No-op if the identifier is absent. The merge is permissive: see
    /// [`SurveyField::apply`].
    pub fn update_field(&mut self, id: &str, patch: FieldPatch) {
        if let Some(field) = self.survey.field_mut(id) {
            field.apply(patch);
        }
    }

    /// Remove the field with the given identifier.
    ///
    /// Clears the selection if it pointed at the removed field. No-op if
    /// the identifier is absent, so repeated deletion is harmless.
    pub fn delete_field(&mut self, id: &str) {
        let fields = self.survey.fields_mut();
        let before = fields.len();
        fields.retain(|field| field.id() != id);
        if fields.len() < before {
            debug!("deleted field {id}");
            if self.selection.as_deref() == Some(id) {
                self.selection = None;
            }
        }
    }

    /// Remove all fields and clear the selection.
    pub fn clear_fields(&mut self) {
        debug!("clearing {} fields", self.survey.len());
        self.survey.fields_mut().clear();
        self.selection = None;
    }

    /// Move the field with the given identifier one position earlier.
    pub fn move_up(&mut self, id: &str) {
        let reordered = reorder::move_up(self.survey.fields(), id);
        *self.survey.fields_mut() = reordered;
    }

    /// Move the field with the given identifier one position later.
    pub fn move_down(&mut self, id: &str) {
        let reordered = reorder::move_down(self.survey.fields(), id);
        *self.survey.fields_mut() = reordered;
    }

    /// Point the selection at a field identifier, or clear it.
    ///
    /// No existence check: a dangling selection behaves as no selection.
    pub fn set_selection(&mut self, selection: Option<String>) {
        self.selection = selection;
    }

    /// Replace the whole survey and clear the selection.
    pub fn replace(&mut self, survey: Survey) {
        self.survey = survey;
        self.selection = None;
    }

    /// Append a factory-built option to the choice field with the given
    /// identifier. No-op if the field is absent or not a choice field.
    pub fn add_option(&mut self, field_id: &str, label: impl Into<String>) {
        if let Some(field) = self.survey.field_mut(field_id)
            && let Some(options) = field.options_mut()
        {
            options.push(factory::new_option(label));
        }
    }

    /// Replace one option's label, leaving the others untouched.
    pub fn update_option(&mut self, field_id: &str, option_id: &str, label: impl Into<String>) {
        if let Some(field) = self.survey.field_mut(field_id)
            && let Some(options) = field.options_mut()
            && let Some(option) = options.iter_mut().find(|option| option.id() == option_id)
        {
            option.label = label.into();
        }
    }

    /// Remove an option from a choice field.
    ///
    /// Refused (returns `false`) when the removal would leave the field
    /// without options: a choice field never reaches zero options through
    /// this path. Also returns `false` when field or option is absent.
    pub fn remove_option(&mut self, field_id: &str, option_id: &str) -> bool {
        let Some(field) = self.survey.field_mut(field_id) else {
            return false;
        };
        let Some(options) = field.options_mut() else {
            return false;
        };
        if options.len() <= 1 {
            warn!("refusing to remove the last option of field {field_id}");
            return false;
        }
        let before = options.len();
        options.retain(|option| option.id() != option_id);
        options.len() < before
    }

    /// Serialize the survey to its canonical JSON document.
    pub fn export_json(&self) -> String {
        document::serialize(&self.survey)
    }

    /// Replace the survey with one parsed from a JSON document.
    ///
    /// On any failure the survey and selection are left untouched and the
    /// error is returned for display; on success the selection is cleared.
    pub fn import_json(&mut self, text: &str) -> Result<(), document::DocumentError> {
        let survey = document::parse(text)?;
        info!(
            "imported survey `{}` with {} fields",
            survey.title,
            survey.len()
        );
        self.replace(survey);
        Ok(())
    }
}
