// src/export/csv_format.rs
//
// Fixed eleven-column format. Cells are written and read positionally with
// no quoting, so a comma inside a cell shifts the columns after it.

use crate::core::sequencing::parse_count;
use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::models::log_row::{FERRY_ID, FERRY_LABEL, LogRow, new_row_id};
use crate::models::row_set::RowSet;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::io::{Read, Write};

/// Write the header and every row, ferry first.
pub fn write_csv<W: Write>(out: W, rows: &RowSet) -> AppResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(out);

    wtr.write_record(get_headers())?;
    for row in rows.iter() {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    Ok(())
}

/// Parse a CSV document into a row set.
///
/// The header must match the expected columns one by one, otherwise nothing
/// is returned. A `FERRY` load becomes the ferry row; every other row gets a
/// fresh identifier.
pub fn read_csv<R: Read>(input: R) -> AppResult<RowSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(input);

    let mut records = rdr.records();

    let header = match records.next() {
        Some(h) => h?,
        None => return Err(AppError::CsvHeader("the file is empty".into())),
    };
    check_header(&header)?;

    let mut rows = RowSet::new();

    for record in records {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row = record_to_row(&record, line)?;

        if row.is_ferry() {
            if rows.has_ferry() {
                return Err(AppError::DuplicateFerry);
            }
            rows.ferry = Some(row);
        } else {
            rows.loads.push(row);
        }
    }

    Ok(rows)
}

fn check_header(header: &StringRecord) -> AppResult<()> {
    let expected_headers = get_headers();
    if header.len() != expected_headers.len() {
        return Err(AppError::CsvHeader(format!(
            "{} columns, expected {}",
            header.len(),
            expected_headers.len()
        )));
    }

    for (i, expected) in expected_headers.iter().enumerate() {
        let found = header.get(i).unwrap_or("");
        if found != *expected {
            return Err(AppError::CsvHeader(format!(
                "column {} is '{}', expected '{}'",
                i + 1,
                found,
                expected
            )));
        }
    }
    Ok(())
}

fn record_to_row(record: &StringRecord, line: usize) -> AppResult<LogRow> {
    let cell = |i: usize| record.get(i).unwrap_or("").to_string();
    let count = |i: usize| {
        parse_count(record.get(i).unwrap_or("")).map_err(|e| AppError::CsvRow {
            line,
            message: e.to_string(),
        })
    };

    let load = cell(0);
    let id = if load == FERRY_LABEL {
        FERRY_ID.to_string()
    } else {
        new_row_id()
    };

    Ok(LogRow {
        id,
        load,
        takeoff: cell(1),
        landing: cell(2),
        flight_time: cell(3),
        block_time: cell(4),
        fuel_on_board: cell(5),
        fuel_burned: cell(6),
        passengers: count(7)?,
        landings: count(8)?,
        follow_up: cell(9),
        remarks: cell(10),
    })
}
