use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use discforge::error::DfResult;
use discforge::model::types::fmt_num;
use discforge::model::{DiscField, DiscRatings, FlightResult, PowerLevel, ThrowStyle};
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;

pub const PLACEHOLDER: &str = "Enter disc specifications to see flight characteristics";

fn level_color(level: PowerLevel) -> Color {
    match level {
        PowerLevel::Under => Color::DarkYellow,
        PowerLevel::Normal => Color::Green,
        PowerLevel::Over => Color::Red,
    }
}

/// `title: speed 7 | glide 5 | turn -2 | fade 2`
pub fn disc_line(title: &str, disc: &DiscRatings) -> String {
    let fields: Vec<String> = DiscField::iter()
        .map(|field| format!("{} {}", field, fmt_num(disc.get(field))))
        .collect();
    format!("{}: {}", title, fields.join(" | "))
}

pub fn print_disc(title: &str, disc: &DiscRatings) {
    println!("{}", disc_line(title, disc));
}

/// Stability and distance readouts, or the placeholder before the first commit.
pub fn readout_table(result: Option<&FlightResult>, style: ThrowStyle) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let Some(result) = result else {
        table.add_row(vec![Cell::new(PLACEHOLDER).fg(Color::DarkGrey)]);
        return table;
    };

    table.set_header(vec![
        Cell::new("Flight Characteristics").add_attribute(Attribute::Bold),
        Cell::new(style.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Stability").fg(Color::Blue),
        Cell::new(result.stability.to_string()).add_attribute(Attribute::Bold),
    ]);
    for level in PowerLevel::iter() {
        let title = match level {
            PowerLevel::Normal => "Distance",
            other => other.label(),
        };
        table.add_row(vec![
            Cell::new(title).fg(level_color(level)),
            Cell::new(format!("{} ft", fmt_num(*result.distances.get(level))))
                .add_attribute(Attribute::Bold),
        ]);
    }
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    table
}

pub fn print_readouts(result: Option<&FlightResult>, style: ThrowStyle) {
    println!("{}", readout_table(result, style));
}

#[derive(Serialize)]
struct CsvRow<'a> {
    power: PowerLevel,
    factor: f64,
    stability: String,
    distance_ft: String,
    path: &'a str,
}

pub fn write_csv<W: Write>(out: W, result: &FlightResult) -> DfResult<()> {
    let mut writer = csv::Writer::from_writer(out);
    for level in PowerLevel::iter() {
        let path = result.paths.get(level).to_svg_path();
        writer.serialize(CsvRow {
            power: level,
            factor: level.factor(),
            stability: result.stability.to_string(),
            distance_ft: fmt_num(*result.distances.get(level)),
            path: &path,
        })?;
    }
    writer.flush()?;
    Ok(())
}
