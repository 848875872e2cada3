use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};

use risorsa_output::Artifact;

use crate::commands::GenerateResult;

pub fn print_summary(result: &GenerateResult) {
    let submission = &result.submission;
    println!("Utenza: {}", submission.identifier.value);
    println!("Display name: {}", submission.display_name);
    if submission.groups.is_empty() {
        println!("Gruppi: -");
    } else {
        println!("Gruppi: {}", submission.groups);
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schema"),
        header_cell("File"),
        header_cell("Columns"),
        header_cell("Populated"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for artifact in &result.artifacts {
        let populated = artifact.row.iter().filter(|v| !v.is_empty()).count();
        let written = result
            .written
            .iter()
            .any(|path| path.ends_with(&artifact.file_name));
        table.add_row(vec![
            schema_cell(artifact),
            Cell::new(&artifact.file_name),
            Cell::new(artifact.header.len()),
            Cell::new(populated),
            written_cell(written, result.dry_run),
        ]);
    }
    println!("{table}");

    for artifact in &result.artifacts {
        println!();
        println!("{}:", artifact.schema);
        println!("{}", record_table(artifact));
    }
}

/// Column/value preview of one artifact, values shown as written.
pub fn record_table(artifact: &Artifact) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (column, value) in artifact.header.iter().zip(&artifact.row) {
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(column), value_cell]);
    }
    table
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ]);
    }
}

fn schema_cell(artifact: &Artifact) -> Cell {
    Cell::new(artifact.schema)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn written_cell(written: bool, dry_run: bool) -> Cell {
    match (written, dry_run) {
        (true, _) => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        (false, true) => dim_cell("dry-run"),
        (false, false) => dim_cell("-"),
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
