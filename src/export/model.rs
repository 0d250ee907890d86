// src/export/model.rs

use crate::core::sheet::Sheet;
use crate::models::field::csv_headers;
use crate::models::log_row::LogRow;
use crate::models::row_set::RowSet;
use serde::Serialize;

/// Header for CSV / PDF / print
pub(crate) fn get_headers() -> Vec<&'static str> {
    csv_headers()
}

/// Full row set as a table of strings, ferry first.
pub(crate) fn rows_to_table(rows: &RowSet) -> Vec<Vec<String>> {
    rows.iter().map(LogRow::cells).collect()
}

/// Flat document used by the JSON export.
#[derive(Serialize, Debug)]
pub struct SheetExport<'a> {
    pub pilot: &'a str,
    pub dz: &'a str,
    pub registration: &'a str,
    pub date: &'a str,
    pub closed: bool,
    pub start_fuel: &'a str,
    pub end_fuel: String,
    pub flights: usize,
    pub pax: u64,
    pub ldg: u64,
    pub flight_time: String,
    pub rows: Vec<&'a LogRow>,
}

impl<'a> SheetExport<'a> {
    pub fn from_sheet(sheet: &'a Sheet) -> Self {
        let totals = sheet.totals("");
        Self {
            pilot: &sheet.meta.pilot,
            dz: &sheet.meta.dz,
            registration: &sheet.meta.registration,
            date: &sheet.meta.date,
            closed: sheet.meta.closed,
            start_fuel: &sheet.meta.start_fuel,
            end_fuel: sheet.ending_fuel(),
            flights: totals.flights,
            pax: totals.pax,
            ldg: totals.ldg,
            flight_time: totals.flight_time,
            rows: sheet.rows.iter().collect(),
        }
    }
}

/// Metadata block printed above the table: header fields, the four totals
/// and start / end fuel. Totals cover every row.
pub(crate) fn summary_lines(sheet: &Sheet) -> Vec<(String, String)> {
    let totals = sheet.totals("");
    vec![
        ("Pilot".into(), sheet.meta.pilot.clone()),
        ("DZ".into(), sheet.meta.dz.clone()),
        ("Registration".into(), sheet.meta.registration.clone()),
        ("Date".into(), sheet.meta.date.clone()),
        ("Flights".into(), totals.flights.to_string()),
        ("PAX".into(), totals.pax.to_string()),
        ("LDG".into(), totals.ldg.to_string()),
        ("Flight time".into(), totals.flight_time),
        ("Start fuel".into(), sheet.meta.start_fuel.clone()),
        ("End fuel".into(), sheet.ending_fuel()),
    ]
}

/// Document title: `Flight log <date> <registration>`, skipping blanks.
pub(crate) fn sheet_title(sheet: &Sheet) -> String {
    let mut title = String::from("Flight log");
    for part in [&sheet.meta.date, &sheet.meta.registration] {
        if !part.trim().is_empty() {
            title.push(' ');
            title.push_str(part.trim());
        }
    }
    title
}
