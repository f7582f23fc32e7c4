//! Core types for the surveyforge crate.
//!
//! This crate provides the foundational types for survey documents:
//! - `Survey` - The top-level survey structure
//! - `SurveyField` and `FieldKind` - Individual fields and their types
//! - `FieldOption` - A selectable choice within a radio/checkbox field
//! - `FieldType` - The closed set of field kinds
//! - `FieldPatch` - Partial updates applied to a field
//!
//! Everything here is presentation-agnostic: editor panels, previews, and
//! document generators all consume these types through the `surveyforge`
//! store without owning any of them.

mod field_type;
pub use field_type::{FieldType, UnsupportedType};

mod option;
pub use option::FieldOption;

mod field;
pub use field::{ChoiceField, FieldKind, FieldPatch, InputField, SurveyField, TextareaField};

mod survey;
pub use survey::{DEFAULT_TITLE, Survey};
