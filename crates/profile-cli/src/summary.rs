use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use profile_model::{FieldValue, ValidationResult};
use profile_validate::Submission;

use profile_cli::session::{CheckReport, FieldReport};

pub fn print_check(report: &CheckReport) {
    println!("{}", render_check(report, false));
}

/// Render the field table and submission outcome. `plain` disables styling.
fn render_check(report: &CheckReport, plain: bool) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Original"),
        header_cell("Current"),
        header_cell("Changed"),
        header_cell("Validation"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in &report.fields {
        table.add_row(field_row(field));
    }
    if plain {
        table.force_no_tty();
    }
    format!(
        "Field set: {}\n{table}\n{}",
        report.field_set,
        render_submission(&report.submission, plain)
    )
}

fn field_row(field: &FieldReport) -> Vec<Cell> {
    let field_cell = Cell::new(field.key.label())
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold);
    let changed_cell = if field.changed {
        Cell::new("✓")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    };
    let validation_cell = match &field.validation {
        ValidationResult::Success => Cell::new("ok").fg(Color::Green),
        ValidationResult::Failure(message) => Cell::new(message).fg(Color::Red),
    };
    vec![
        field_cell,
        value_cell(field.original.as_ref()),
        value_cell(field.current.as_ref()),
        changed_cell,
        validation_cell,
    ]
}

fn render_submission(submission: &Submission, plain: bool) -> String {
    match submission {
        Submission::NoChanges => "No changes: you haven't made any changes to update.".to_string(),
        Submission::Invalid(errors) => {
            let mut lines = vec!["Cannot save changes:".to_string()];
            lines.extend(
                errors
                    .failures()
                    .map(|(key, message)| format!("- {}: {message}", key.label())),
            );
            lines.join("\n")
        }
        Submission::Ready(changes) => {
            let mut table = Table::new();
            table.set_header(vec![header_cell("Key"), header_cell("Value")]);
            apply_table_style(&mut table);
            for (key, value) in changes.iter() {
                table.add_row(vec![Cell::new(key), value_cell(value)]);
            }
            if plain {
                table.force_no_tty();
            }
            format!("Can successfully save changes:\n{table}")
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn value_cell(value: Option<&FieldValue>) -> Cell {
    match value {
        Some(FieldValue::Text(text)) if text.is_empty() => dim_cell("\"\""),
        Some(value) => Cell::new(value),
        None => dim_cell("(absent)"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
