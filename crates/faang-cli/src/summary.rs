//! Printed summaries of a checks run.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use faang_model::Section;
use faang_validate::ChecksOutcome;

pub fn print_summary(outcome: &ChecksOutcome) {
    println!("{}", summary_table(outcome));
    if outcome.error_count() + outcome.warning_count() > 0 {
        println!();
        println!("Issues:");
        println!("{}", issue_table(outcome));
    }
    if !outcome.failures.is_empty() {
        eprintln!("Failed record types:");
        for (record_type, error) in &outcome.failures {
            eprintln!("- {record_type}: {error}");
            eprintln!("  {}", error.suggestion());
        }
    }
}

/// One row per record type plus a total row.
pub fn summary_table(outcome: &ChecksOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record type"),
        header_cell("Records"),
        header_cell("With errors"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total_records = 0usize;
    for (record_type, report) in &outcome.reports {
        total_records += report.record_count();
        table.add_row(vec![
            record_type_cell(record_type),
            Cell::new(report.record_count()),
            count_cell(Some(report.failing_records()), Color::Red),
            count_cell(Some(report.error_count()), Color::Red),
            count_cell(Some(report.warning_count()), Color::Yellow),
        ]);
    }
    for record_type in outcome.failures.keys() {
        table.add_row(vec![
            record_type_cell(record_type),
            Cell::new("failed").fg(Color::Red).add_attribute(Attribute::Bold),
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(Some(outcome.error_count()), Color::Red).add_attribute(Attribute::Bold),
        count_cell(Some(outcome.warning_count()), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Every error and warning, errors first.
pub fn issue_table(outcome: &ChecksOutcome) -> Table {
    let mut rows = Vec::new();
    for (record_type, report) in &outcome.reports {
        for tree in &report.issues {
            for section in [Section::Core, Section::Type, Section::Custom] {
                let bucket = tree.bucket(section);
                for message in &bucket.errors {
                    rows.push((true, record_type, &tree.name, section, message));
                }
                for message in &bucket.warnings {
                    rows.push((false, record_type, &tree.name, section, message));
                }
            }
        }
    }
    rows.sort_by_key(|(is_error, ..)| !*is_error);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Record type"),
        header_cell("Record"),
        header_cell("Section"),
        header_cell("Severity"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for (is_error, record_type, record, section, message) in rows {
        table.add_row(vec![
            record_type_cell(record_type),
            Cell::new(record),
            Cell::new(section.as_str()),
            severity_cell(is_error),
            Cell::new(message),
        ]);
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
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn record_type_cell(record_type: &str) -> Cell {
    Cell::new(record_type)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(is_error: bool) -> Cell {
    if is_error {
        Cell::new("ERROR").fg(Color::Red)
    } else {
        Cell::new("WARN").fg(Color::Yellow)
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
