//! Listing output for buses, customers and seat summaries.
//!
//! Every listing command renders rows through [`write_rows`], in one of
//! three formats: a tab-separated table with an uppercase header, a JSON
//! array, or CSV with a header row.

use crate::error::CliError;
use busres::config::OutputFormat;
use busres::{Bus, Customer, SeatSummary};
use clap::ValueEnum;
use serde_json::json;
use std::io::Write;

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<OutputFormat> for ListFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
        }
    }
}

/// A value that renders as one listing row.
pub trait Tabular {
    /// Column names, in cell order.
    const COLUMNS: &'static [&'static str];

    /// The row's cells as text.
    fn cells(&self) -> Vec<String>;

    /// The row as a JSON object.
    fn to_json(&self) -> serde_json::Value;
}

impl Tabular for Bus {
    const COLUMNS: &'static [&'static str] = &[
        "bus_number",
        "total_seats",
        "start_point",
        "end_point",
        "start_time",
        "fare",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.bus_number().to_string(),
            self.total_seats().to_string(),
            self.start_point().to_string(),
            self.end_point().to_string(),
            self.start_time().to_string(),
            format!("{:.2}", self.fare()),
        ]
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "bus_number": self.bus_number(),
            "total_seats": self.total_seats(),
            "start_point": self.start_point(),
            "end_point": self.end_point(),
            "start_time": self.start_time(),
            "fare": self.fare(),
        })
    }
}

impl Tabular for Customer {
    const COLUMNS: &'static [&'static str] = &["name", "mobile_number", "email", "city", "age"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.mobile_number().to_string(),
            self.email().to_string(),
            self.city().to_string(),
            self.age().to_string(),
        ]
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "name": self.name(),
            "mobile_number": self.mobile_number(),
            "email": self.email(),
            "city": self.city(),
            "age": self.age(),
        })
    }
}

impl Tabular for SeatSummary {
    const COLUMNS: &'static [&'static str] =
        &["bus_number", "capacity", "seated", "available", "waiting"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.bus_number.clone(),
            self.capacity.to_string(),
            self.seated.to_string(),
            self.available().to_string(),
            self.waiting.to_string(),
        ]
    }

    fn to_json(&self) -> serde_json::Value {
        json!({
            "bus_number": self.bus_number,
            "capacity": self.capacity,
            "seated": self.seated,
            "available": self.available(),
            "waiting": self.waiting,
        })
    }
}

/// Write rows in the requested format.
///
/// In table format an empty listing prints `empty_message` instead of a
/// header; JSON prints `[]` and CSV prints only the header.
pub fn write_rows<W: Write, T: Tabular>(
    out: &mut W,
    rows: &[&T],
    format: ListFormat,
    empty_message: &str,
) -> Result<(), CliError> {
    match format {
        ListFormat::Table => format_as_table(out, rows, empty_message),
        ListFormat::Json => format_as_json(out, rows),
        ListFormat::Csv => format_as_csv(out, rows),
    }
}

fn format_as_table<W: Write, T: Tabular>(
    out: &mut W,
    rows: &[&T],
    empty_message: &str,
) -> Result<(), CliError> {
    if rows.is_empty() {
        writeln!(out, "{empty_message}")?;
        return Ok(());
    }

    let header_line = T::COLUMNS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        writeln!(out, "{}", row.cells().join("\t"))?;
    }

    Ok(())
}

fn format_as_json<W: Write, T: Tabular>(out: &mut W, rows: &[&T]) -> Result<(), CliError> {
    let json_data: Vec<serde_json::Value> = rows.iter().map(|r| r.to_json()).collect();

    serde_json::to_writer_pretty(&mut *out, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn format_as_csv<W: Write, T: Tabular>(out: &mut W, rows: &[&T]) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);

    writer.write_record(T::COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.cells()).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
