use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use emoji_cli::types::{CategorySummary, GenerationResult};

pub fn print_summary(result: &GenerationResult) {
    if result.written {
        println!("Output: {}", result.output.display());
    } else {
        println!("Output: {} (dry run, not written)", result.output.display());
    }
    println!("{}", summary_table(result));
}

fn summary_table(result: &GenerationResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Read"),
        header_cell("Emitted"),
        header_cell("Dropped"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..=3 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for summary in &result.categories {
        table.add_row(category_row(summary));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.total_read()).add_attribute(Attribute::Bold),
        Cell::new(result.total_emitted()).add_attribute(Attribute::Bold),
        count_cell(result.total_dropped()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn category_row(summary: &CategorySummary) -> Vec<Cell> {
    vec![
        Cell::new(summary.category.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.read),
        Cell::new(summary.emitted),
        count_cell(summary.dropped),
    ]
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
