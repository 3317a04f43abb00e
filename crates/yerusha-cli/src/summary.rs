use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::types::RunResult;

const VALUE_PREVIEW_LIMIT: usize = 60;

pub fn print_summary(result: &RunResult) {
    println!("Document: {}", result.document.display());
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    if result.report.is_valid() {
        println!(
            "All {} field occurrence(s) passed validation.",
            result.report.fields_checked
        );
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Problems"),
    ]);
    apply_table_style(&mut table);
    for failure in &result.report.failures {
        table.add_row(vec![
            Cell::new(&failure.label).fg(Color::Red),
            Cell::new(preview(&failure.value)),
            Cell::new(failure.messages.join("; ")),
        ]);
    }
    println!("{table}");
    println!(
        "{} of {} field occurrence(s) failed validation.",
        result.report.failure_count(),
        result.report.fields_checked
    );
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn preview(value: &str) -> String {
    if value.is_empty() {
        return "(empty)".to_string();
    }
    let mut preview: String = value.chars().take(VALUE_PREVIEW_LIMIT).collect();
    if value.chars().count() > VALUE_PREVIEW_LIMIT {
        preview.push('…');
    }
    preview
}
