//! HTML form generator implementation.

use surveyforge::{FieldKind, Survey, SurveyField};

/// Shown in place of an empty question.
const UNTITLED_QUESTION: &str = "Untitled Question";

/// Placeholder text when a field does not provide one.
const DEFAULT_PLACEHOLDER: &str = "Enter text";

/// Textarea rows when a field does not provide them.
const DEFAULT_ROWS: u16 = 3;

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Identifier of the field to mark as selected, if any.
    pub selected: Option<String>,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            include_styles: true,
            full_document: true,
            class_prefix: "survey".to_string(),
            selected: None,
        }
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Mark one field as selected (highlighted in the preview).
    pub fn with_selected(mut self, id: impl Into<String>) -> Self {
        self.selected = Some(id.into());
        self
    }
}

/// Render a survey as an HTML form with default options.
pub fn to_html(survey: &Survey) -> String {
    to_html_with_options(survey, &HtmlOptions::new())
}

/// Render a survey as an HTML form with custom options.
pub fn to_html_with_options(survey: &Survey, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "  <title>{}</title>\n",
            escape_html(&survey.title)
        ));

        if options.include_styles {
            html.push_str(&generate_styles(prefix));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));
    html.push_str(&format!(
        "  <h1 class=\"{prefix}-title\">{}</h1>\n",
        escape_html(&survey.title)
    ));

    if survey.is_empty() {
        html.push_str(&format!(
            "  <p class=\"{prefix}-empty\">Add fields to your survey</p>\n"
        ));
    } else {
        for field in survey.fields() {
            let selected = options.selected.as_deref() == Some(field.id());
            html.push_str(&generate_field(field, prefix, selected));
        }

        html.push_str(&format!(
            "  <button type=\"submit\" class=\"{prefix}-submit\">Submit</button>\n"
        ));
    }

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single field.
fn generate_field(field: &SurveyField, prefix: &str, selected: bool) -> String {
    let field_id = field.id();
    let selected_class = if selected {
        format!(" {prefix}-selected")
    } else {
        String::new()
    };

    let question = if field.question.is_empty() {
        UNTITLED_QUESTION
    } else {
        &field.question
    };
    let required_mark = if field.required {
        format!("<span class=\"{prefix}-required\">*</span>")
    } else {
        String::new()
    };

    let mut html = String::new();
    html.push_str(&format!(
        "  <div class=\"{prefix}-field{selected_class}\" data-field=\"{field_id}\">\n"
    ));
    html.push_str(&format!(
        "    <label for=\"{field_id}\">{}{required_mark}</label>\n",
        escape_html(question)
    ));

    match field.kind() {
        FieldKind::Input(input) => {
            let placeholder = input.placeholder.as_deref().filter(|s| !s.is_empty());
            html.push_str(&format!(
                "    <input type=\"text\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\" placeholder=\"{}\">\n",
                escape_html(placeholder.unwrap_or(DEFAULT_PLACEHOLDER))
            ));
        }

        FieldKind::Textarea(textarea) => {
            let placeholder = textarea.placeholder.as_deref().filter(|s| !s.is_empty());
            let rows = textarea.rows.unwrap_or(DEFAULT_ROWS);
            html.push_str(&format!(
                "    <textarea id=\"{field_id}\" name=\"{field_id}\" rows=\"{rows}\" class=\"{prefix}-textarea\" placeholder=\"{}\"></textarea>\n",
                escape_html(placeholder.unwrap_or(DEFAULT_PLACEHOLDER))
            ));
        }

        FieldKind::Radio(choice) => {
            for option in &choice.options {
                let option_id = option.id();
                html.push_str(&format!("    <div class=\"{prefix}-choice-option\">\n"));
                html.push_str(&format!(
                    "      <input type=\"radio\" id=\"{option_id}\" name=\"{field_id}\" value=\"{option_id}\">\n"
                ));
                html.push_str(&format!(
                    "      <label for=\"{option_id}\">{}</label>\n",
                    escape_html(&option.label)
                ));
                html.push_str("    </div>\n");
            }
        }

        FieldKind::Checkbox(choice) => {
            for option in &choice.options {
                let option_id = option.id();
                html.push_str(&format!("    <div class=\"{prefix}-choice-option\">\n"));
                html.push_str(&format!(
                    "      <input type=\"checkbox\" id=\"{option_id}\" name=\"{field_id}\" value=\"{option_id}\">\n"
                ));
                html.push_str(&format!(
                    "      <label for=\"{option_id}\">{}</label>\n",
                    escape_html(&option.label)
                ));
                html.push_str("    </div>\n");
            }
        }

        FieldKind::Date => {
            html.push_str(&format!(
                "    <input type=\"date\" id=\"{field_id}\" name=\"{field_id}\" class=\"{prefix}-input\">\n"
            ));
        }
    }

    html.push_str("  </div>\n");
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str) -> String {
    format!(
        r#"  <style>
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-empty {{
      padding: 1rem;
      color: #888;
      text-align: center;
    }}
    .{prefix}-field {{
      margin: 0.5rem 0;
      padding: 1rem;
      border: 1px solid #ccc;
      border-radius: 4px;
    }}
    .{prefix}-selected {{
      border-color: #7c3aed;
      background: #f5f0ff;
    }}
    .{prefix}-field label {{
      display: block;
      margin-bottom: 0.25rem;
    }}
    .{prefix}-required {{
      color: #dc2626;
      margin-left: 0.25rem;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: 100%;
      padding: 0.5rem;
      box-sizing: border-box;
    }}
    .{prefix}-choice-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-choice-option label {{
      display: inline;
    }}
    .{prefix}-submit {{
      margin-top: 1rem;
      padding: 0.5rem 1rem;
    }}
  </style>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyforge::{FieldPatch, FieldType, SurveyStore, factory};

    #[test]
    fn html_options_chaining() {
        let options = HtmlOptions::new()
            .with_styles(false)
            .full_document(false)
            .with_class_prefix("my-form")
            .with_selected("abc");

        assert!(!options.include_styles);
        assert!(!options.full_document);
        assert_eq!(options.class_prefix, "my-form");
        assert_eq!(options.selected, Some("abc".to_string()));
    }

    #[test]
    fn empty_survey_renders_a_hint() {
        let html = to_html(&Survey::new());
        assert!(html.contains("Add fields to your survey"));
        assert!(!html.contains("type=\"submit\""));
    }

    #[test]
    fn every_kind_renders_its_control() {
        let mut store = SurveyStore::new();
        for field_type in FieldType::ALL {
            store.add_field(factory::new_field(field_type));
        }

        let html = to_html(store.survey());
        assert!(html.contains("<input type=\"text\""));
        assert!(html.contains("<textarea"));
        assert!(html.contains("rows=\"3\""));
        assert!(html.contains("<input type=\"radio\""));
        assert!(html.contains("<input type=\"checkbox\""));
        assert!(html.contains("<input type=\"date\""));
        assert!(html.contains(&format!(">{}<", factory::FIRST_OPTION_LABEL)));
    }

    #[test]
    fn empty_question_falls_back_to_untitled() {
        let mut store = SurveyStore::new();
        store.add_field(factory::new_field(FieldType::Input));
        let html = to_html(store.survey());
        assert!(html.contains(UNTITLED_QUESTION));
        assert!(html.contains(&format!("placeholder=\"{DEFAULT_PLACEHOLDER}\"")));
    }

    #[test]
    fn required_fields_are_marked() {
        let mut store = SurveyStore::new();
        let field = factory::new_field(FieldType::Input);
        let id = field.id().to_string();
        store.add_field(field);
        store.update_field(&id, FieldPatch::new().question("Name").required(true));

        let html = to_html(store.survey());
        assert!(html.contains("survey-required\">*</span>"));
    }

    #[test]
    fn selected_field_is_highlighted() {
        let mut store = SurveyStore::new();
        store.add_field(factory::new_field(FieldType::Date));
        let id = store.selection().unwrap().to_string();

        let highlighted =
            to_html_with_options(store.survey(), &HtmlOptions::new().with_selected(&id));
        assert!(highlighted.contains("survey-field survey-selected"));

        let plain = to_html(store.survey());
        assert!(!plain.contains("survey-selected"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut store = SurveyStore::new();
        store.set_title("Q&A <draft>");
        let field = factory::new_field(FieldType::Input);
        let id = field.id().to_string();
        store.add_field(field);
        store.update_field(&id, FieldPatch::new().question("<script>alert(1)</script>"));

        let html = to_html(store.survey());
        assert!(html.contains("Q&amp;A &lt;draft&gt;"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn fragment_mode_omits_document_chrome() {
        let html = to_html_with_options(&Survey::new(), &HtmlOptions::new().full_document(false));
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.starts_with("<form"));
    }

    #[test]
    fn renders_a_full_example_form() {
        let survey = example_forms::customer_feedback();
        let html = to_html(&survey);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains(&escape_html(&survey.title)));
        for field in survey.fields() {
            assert!(html.contains(&format!("data-field=\"{}\"", field.id())));
        }
    }
}
