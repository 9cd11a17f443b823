//! Table rendering for assembled report sections.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use lrs_model::{PrintRow, RangeFlag, RowKind};
use lrs_report::{ReportSection, ReportSummary};

/// Render one section as a table plus its out-of-range summary line.
pub fn render_section(section: &ReportSection) -> String {
    let mut out = String::new();
    out.push_str(&section.title);
    out.push('\n');
    if section.rows.is_empty() {
        out.push_str("  no parameters available\n");
        return out;
    }
    out.push_str(&section_table(section).to_string());
    out.push('\n');
    let summary = ReportSummary::from_rows(&section.rows);
    if summary.out_of_range() > 0 {
        out.push_str(&format!(
            "  {} of {} results out of range ({} low, {} high)\n",
            summary.out_of_range(),
            summary.rows,
            summary.low,
            summary.high
        ));
    }
    out
}

/// Build the table for one section's rows.
pub fn section_table(section: &ReportSection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Result"),
        header_cell("Unit"),
        header_cell("Reference range"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in &section.rows {
        table.add_row(row_cells(row));
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn row_cells(row: &PrintRow) -> Vec<Cell> {
    if row.kind == RowKind::Heading {
        return vec![
            Cell::new(&row.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ];
    }
    vec![
        name_cell(row),
        value_cell(row),
        Cell::new(&row.unit),
        Cell::new(&row.range),
    ]
}

fn name_cell(row: &PrintRow) -> Cell {
    if row.kind == RowKind::SubParameter {
        Cell::new(&row.name).fg(Color::DarkGrey)
    } else {
        Cell::new(&row.name)
    }
}

fn value_cell(row: &PrintRow) -> Cell {
    match row.flag {
        RangeFlag::Low => Cell::new(&row.value)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        RangeFlag::High => Cell::new(&row.value)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        RangeFlag::None => Cell::new(&row.value),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
