//! A scripted editing session: compose a survey, tweak it, export the JSON
//! document, and re-import it.
//!
//! Run with `RUST_LOG=debug cargo run --example editing_session` to see the
//! store's log records.

use surveyforge::{FieldPatch, FieldType, SurveyStore, factory};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut store = SurveyStore::new();
    store.set_title("Team Lunch Poll");

    let dish = factory::new_field(FieldType::Radio);
    let dish_id = dish.id().to_string();
    store.add_field(dish);
    store.update_field(
        &dish_id,
        FieldPatch::new().question("Where should we go?").required(true),
    );
    store.add_option(&dish_id, "Ramen");
    store.add_option(&dish_id, "Tacos");

    let notes = factory::new_field(FieldType::Textarea);
    let notes_id = notes.id().to_string();
    store.add_field(notes);
    store.update_field(
        &notes_id,
        FieldPatch::new()
            .question("Dietary restrictions?")
            .placeholder("Leave empty if none"),
    );

    // Second thoughts: the notes field should come first.
    store.move_up(&notes_id);

    let document = store.export_json();
    println!("{document}");

    // The document round-trips through import.
    let mut imported = SurveyStore::new();
    imported.import_json(&document)?;
    assert_eq!(imported.survey(), store.survey());

    Ok(())
}
