//! Pure reordering of fields within a survey.
//!
//! Both functions return a new sequence and never fail: an absent
//! identifier or a swap across the boundary leaves the order unchanged.

use crate::SurveyField;

/// Swap the field with the given identifier with its predecessor.
///
/// No-op if the identifier is absent or already first.
pub fn move_up(fields: &[SurveyField], id: &str) -> Vec<SurveyField> {
    let mut fields = fields.to_vec();
    if let Some(index) = fields.iter().position(|field| field.id() == id)
        && index > 0
    {
        fields.swap(index, index - 1);
    }
    fields
}

/// Swap the field with the given identifier with its successor.
///
/// No-op if the identifier is absent or already last.
pub fn move_down(fields: &[SurveyField], id: &str) -> Vec<SurveyField> {
    let mut fields = fields.to_vec();
    if let Some(index) = fields.iter().position(|field| field.id() == id)
        && index + 1 < fields.len()
    {
        fields.swap(index, index + 1);
    }
    fields
}
