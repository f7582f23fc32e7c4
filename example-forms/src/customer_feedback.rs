use surveyforge::{FieldPatch, FieldType, Survey, SurveyStore, factory};

/// A short customer-feedback form: one field of every kind.
pub fn customer_feedback() -> Survey {
    let mut store = SurveyStore::new();
    store.set_title("Customer Feedback");

    let name = add(&mut store, FieldType::Input);
    store.update_field(
        &name,
        FieldPatch::new()
            .question("What is your name?")
            .placeholder("Jane Doe"),
    );

    let visit = add(&mut store, FieldType::Date);
    store.update_field(
        &visit,
        FieldPatch::new().question("When did you visit us?").required(true),
    );

    let rating = add(&mut store, FieldType::Radio);
    store.update_field(
        &rating,
        FieldPatch::new().question("How was your experience?").required(true),
    );
    store.update_option(&rating, &first_option(&store, &rating), "Great");
    store.add_option(&rating, "Okay");
    store.add_option(&rating, "Poor");

    let channels = add(&mut store, FieldType::Checkbox);
    store.update_field(
        &channels,
        FieldPatch::new().question("How did you hear about us?"),
    );
    store.update_option(&channels, &first_option(&store, &channels), "Word of mouth");
    store.add_option(&channels, "Social media");
    store.add_option(&channels, "Search engine");

    let comments = add(&mut store, FieldType::Textarea);
    store.update_field(
        &comments,
        FieldPatch::new()
            .question("Anything else we should know?")
            .placeholder("Tell us more")
            .rows(5),
    );

    store.survey().clone()
}

fn add(store: &mut SurveyStore, field_type: FieldType) -> String {
    let field = factory::new_field(field_type);
    let id = field.id().to_string();
    store.add_field(field);
    id
}

fn first_option(store: &SurveyStore, field_id: &str) -> String {
    store
        .survey()
        .field(field_id)
        .and_then(|field| field.options())
        .map(|options| options[0].id().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_field_of_every_kind() {
        let survey = customer_feedback();
        assert_eq!(survey.len(), 5);

        let kinds: Vec<_> = survey
            .fields()
            .iter()
            .map(|field| field.field_type())
            .collect();
        for field_type in FieldType::ALL {
            assert!(kinds.contains(&field_type), "{field_type} missing");
        }
    }

    #[test]
    fn rating_has_three_options() {
        let survey = customer_feedback();
        let rating = survey
            .fields()
            .iter()
            .find(|field| field.question.starts_with("How was"))
            .unwrap();
        let labels: Vec<_> = rating
            .options()
            .unwrap()
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, ["Great", "Okay", "Poor"]);
    }
}
