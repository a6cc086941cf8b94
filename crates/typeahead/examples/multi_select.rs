//! Multi-Select Session Example
//!
//! Drives a complete multi-select session against a small fruit dataset,
//! printing every signal the field emits along the way:
//! - typing filters the dataset and shows the panel
//! - picks toggle selections and rewrite the text
//! - layout passes place the panel above or below the field
//!
//! Run with: cargo run -p typeahead --example multi_select

use typeahead::{AutocompleteField, FieldEvent, LayoutContext, Rect, SelectionMode, TextItem};

fn print_rows(field: &AutocompleteField<TextItem>) {
    for index in 0..field.row_count() {
        let mark = if field.row_is_selected(index) { "x" } else { " " };
        if let Some(text) = field.row_text(index) {
            println!("  [{mark}] {text}");
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut field = AutocompleteField::new()
        .with_mode(SelectionMode::Multi)
        .with_items(vec![
            TextItem::new("1", "Apple"),
            TextItem::new("2", "Apricot"),
            TextItem::new("3", "Banana"),
            TextItem::new("4", "Cherry"),
        ]);

    field
        .text_changed
        .connect(|text| println!("text          -> {text:?}"));
    field
        .selections_changed
        .connect(|count| println!("selections    -> {count}"));
    field
        .panel_visibility_changed
        .connect(|visible| println!("panel visible -> {visible}"));
    field.panel_geometry_changed.connect(|geometry| {
        println!("panel placed  -> {:?} {:?}", geometry.direction, geometry.rect);
    });

    // The host attaches the field near the top of an 800-unit window and
    // raises a 300-unit keyboard.
    field.handle_event(FieldEvent::AttachedToHost);
    field.handle_event(FieldEvent::KeyboardHeightChanged(300.0));
    field.handle_event(FieldEvent::LayoutPass(LayoutContext::new(
        Rect::new(20.0, 100.0, 300.0, 40.0),
        800.0,
    )));

    field.handle_event(FieldEvent::EditingBegan);
    field.handle_event(FieldEvent::TextEdited("Ap".to_string()));
    print_rows(&field);

    field.handle_event(FieldEvent::RowPicked(0)); // Apple
    field.handle_event(FieldEvent::TextEdited("Apple, Ban".to_string()));
    print_rows(&field);

    field.handle_event(FieldEvent::RowPicked(0)); // Banana
    field.handle_event(FieldEvent::EditingEnded);

    println!();
    println!("final text:       {:?}", field.text());
    println!(
        "final selections: {:?}",
        field
            .selections()
            .iter()
            .map(TextItem::text)
            .collect::<Vec<_>>()
    );
}
