use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_run_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.mappings_path {
        println!("Mappings: {}", path.display());
    }
    println!(
        "Rows: {} in, {} dropped (unresolved age), {} out",
        result.report.rows_in,
        result.report.rows_dropped_unresolved_age,
        result.report.rows_out
    );
    println!(
        "Summary: {} groups across {} part file(s)",
        result.summary_rows,
        result.part_files.len()
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Labels"),
        header_cell("Unseen index"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (column, mapping) in result.catalog.iter() {
        table.add_row(vec![
            Cell::new(column).fg(Color::Blue),
            Cell::new(mapping.len()),
            Cell::new(mapping.unseen_index()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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
