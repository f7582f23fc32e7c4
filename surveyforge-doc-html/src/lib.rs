//! HTML preview backend for surveyforge: renders a survey as a fillable
//! form, the way the editor's live preview shows it.

mod generator;

pub use generator::{HtmlOptions, to_html, to_html_with_options};
