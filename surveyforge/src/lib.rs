//! # surveyforge
//!
//! The core of an interactive survey-definition editor: a user composes an
//! ordered list of form fields (text input, multi-line text, single-choice,
//! multi-choice, date), edits each field's properties, reorders or deletes
//! fields, and can view or replace the survey as a JSON document.
//!
//! ## Usage
//!
//! ```rust
//! use surveyforge::{FieldPatch, FieldType, SurveyStore, factory};
//!
//! let mut store = SurveyStore::new();
//!
//! let field = factory::new_field(FieldType::Radio);
//! let id = field.id().to_string();
//! store.add_field(field);
//!
//! store.update_field(&id, FieldPatch::new().question("How did you hear about us?"));
//! store.add_option(&id, "Option 2");
//!
//! let json = store.export_json();
//! assert!(store.import_json(&json).is_ok());
//! ```
//!
//! ## Surfaces
//!
//! Presentation surfaces (editor panels, previews, raw-JSON viewers) are
//! separate crates or applications that hold a handle to the [`SurveyStore`]
//! and go through its operation set; nothing mutates the survey directly.
//! `surveyforge-doc-html` renders the live form preview.

// Re-export all types from surveyforge-types
pub use surveyforge_types::*;

pub mod document;
pub mod factory;
pub mod reorder;
pub mod store;

pub use document::DocumentError;
pub use store::SurveyStore;
