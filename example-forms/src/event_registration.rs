use surveyforge::{FieldPatch, FieldType, Survey, SurveyStore, factory};

/// An event-registration form, including a reorder and a deletion, so the
/// fixture exercises more of the store than straight-line appends.
pub fn event_registration() -> Survey {
    let mut store = SurveyStore::new();
    store.set_title("Event Registration");

    let email = add(&mut store, FieldType::Input);
    store.update_field(
        &email,
        FieldPatch::new()
            .question("Email address")
            .placeholder("you@example.com")
            .required(true),
    );

    let scratch = add(&mut store, FieldType::Textarea);

    let day = add(&mut store, FieldType::Radio);
    store.update_field(&day, FieldPatch::new().question("Which day?").required(true));
    let first = store
        .survey()
        .field(&day)
        .and_then(|field| field.options())
        .map(|options| options[0].id().to_string())
        .unwrap_or_default();
    store.update_option(&day, &first, "Saturday");
    store.add_option(&day, "Sunday");

    // The drafting detour: the scratch field gets dropped and the day
    // picker moves to the top.
    store.delete_field(&scratch);
    store.move_up(&day);

    store.survey().clone()
}

fn add(store: &mut SurveyStore, field_type: FieldType) -> String {
    let field = factory::new_field(field_type);
    let id = field.id().to_string();
    store.add_field(field);
    id
}
