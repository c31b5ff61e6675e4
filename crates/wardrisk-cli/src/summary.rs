use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wardrisk_common::format_numeric;
use wardrisk_model::{ScoreModel, SourceCatalog};
use wardrisk_score::CovariateSummary;

use crate::types::ScoreResult;

/// Models listed in the run summary before the rest are elided.
const MODEL_PREVIEW_LIMIT: usize = 15;

pub fn print_score_summary(result: &ScoreResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    for id in &result.unknown_sources {
        println!("Skipped unknown source: {id}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Covariate"),
        header_cell("Normalized"),
        header_cell("Values"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Note"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for summary in &result.covariates {
        table.add_row(covariate_row(summary, result.rows));
    }
    println!("{table}");

    println!();
    println!(
        "Rows: {}  Columns: {}  Covariates: {}  Models: {}",
        result.rows,
        result.columns,
        result.covariates.len(),
        result.models.len()
    );
    print_model_table(&result.models, MODEL_PREVIEW_LIMIT);
}

pub fn print_models(models: &[ScoreModel]) {
    print_model_table(models, models.len());
}

pub fn print_sources(catalog: &SourceCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Column"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in catalog.entries() {
        table.add_row(vec![
            Cell::new(&entry.id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&entry.column),
            entry
                .description
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
}

fn print_model_table(models: &[ScoreModel], limit: usize) {
    if models.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Model"),
        header_cell("Size"),
        header_cell("Covariates"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for model in models.iter().take(limit) {
        table.add_row(vec![
            Cell::new(model.column_name())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(model.size()),
            Cell::new(model.covariates.join(" + ")),
        ]);
    }
    if models.len() > limit {
        table.add_row(vec![
            dim_cell("..."),
            dim_cell(""),
            dim_cell(format!("{} more", models.len() - limit)),
        ]);
    }
    println!();
    println!("{table}");
}

fn covariate_row(summary: &CovariateSummary, rows: usize) -> Vec<Cell> {
    let (min, max) = match summary.range {
        Some(range) => (
            Cell::new(format_numeric(range.min)),
            Cell::new(format_numeric(range.max)),
        ),
        None => (dim_cell("-"), dim_cell("-")),
    };
    let note = if summary.range.is_none() {
        Cell::new("all missing").fg(Color::Yellow)
    } else if summary.is_degenerate() {
        Cell::new("zero variance, NaN").fg(Color::Yellow)
    } else {
        dim_cell("-")
    };
    vec![
        Cell::new(&summary.covariate),
        Cell::new(&summary.normalized_column),
        values_cell(summary.non_missing, rows),
        min,
        max,
        note,
    ]
}

fn values_cell(non_missing: usize, rows: usize) -> Cell {
    let text = format!("{non_missing}/{rows}");
    if non_missing < rows {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text)
    }
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
