//! Row creation, load numbering and per-field edits.

use crate::errors::{AppError, AppResult};
use crate::models::field::RowField;
use crate::models::log_row::{FERRY_ID, FERRY_LABEL, LogRow};
use crate::models::row_set::RowSet;
use crate::utils::time::elapsed;

/// Next load number: one past the highest numeric load label, `1` when there
/// is none. The ferry row, non-numeric labels and labels with no successor
/// (`i64::MAX`) are ignored.
pub fn next_load_number(rows: &RowSet) -> i64 {
    rows.loads
        .iter()
        .filter(|r| !r.is_ferry())
        .filter_map(LogRow::load_number)
        .filter_map(|n| n.checked_add(1))
        .max()
        .unwrap_or(1)
}

/// New load row. Only the first load row of the sheet inherits the starting
/// fuel; later rows start with an empty fuel-on-board.
pub fn create_load_row(rows: &RowSet, default_fuel: &str) -> LogRow {
    let mut row = LogRow::with_load(next_load_number(rows).to_string());
    if rows.loads.is_empty() {
        row.fuel_on_board = default_fuel.to_string();
    }
    row
}

pub fn create_ferry_row(default_fuel: &str) -> LogRow {
    LogRow {
        id: FERRY_ID.to_string(),
        load: FERRY_LABEL.to_string(),
        fuel_on_board: default_fuel.to_string(),
        ..LogRow::default()
    }
}

/// Insert a row. A ferry row goes in the ferry slot, unless one is already
/// there, in which case nothing changes. A load row lands immediately after
/// the ferry row when there is one, at the end otherwise.
///
/// Returns whether the set changed.
pub fn insert_row(rows: &mut RowSet, row: LogRow) -> bool {
    if row.is_ferry() {
        if rows.has_ferry() {
            return false;
        }
        rows.ferry = Some(row);
        return true;
    }

    if rows.has_ferry() {
        rows.loads.insert(0, row);
    } else {
        rows.loads.push(row);
    }
    true
}

/// Parse a passenger / landing count. Blank means "no count".
pub fn parse_count(value: &str) -> AppResult<Option<u32>> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(None);
    }
    v.parse::<u32>()
        .map(Some)
        .map_err(|_| AppError::InvalidCount(value.to_string()))
}

/// Apply one field edit to a row.
///
/// Editing takeoff or landing recomputes flight time; block time is only
/// ever changed by editing it directly.
pub fn update_field(row: &mut LogRow, field: RowField, value: &str) -> AppResult<()> {
    if !field.is_editable() {
        return Err(AppError::UnknownField(format!(
            "{} is not editable",
            field.header()
        )));
    }

    match field {
        RowField::Load | RowField::FlightTime => {}
        RowField::Takeoff => row.takeoff = value.to_string(),
        RowField::Landing => row.landing = value.to_string(),
        RowField::BlockTime => row.block_time = value.to_string(),
        RowField::FuelOnBoard => row.fuel_on_board = value.to_string(),
        RowField::FuelBurned => row.fuel_burned = value.to_string(),
        RowField::Passengers => row.passengers = parse_count(value)?,
        RowField::Landings => row.landings = parse_count(value)?,
        RowField::FollowUp => row.follow_up = value.to_string(),
        RowField::Remarks => row.remarks = value.to_string(),
    }

    if matches!(field, RowField::Takeoff | RowField::Landing) {
        recompute_flight_time(row);
    }

    Ok(())
}

/// Keep flight time in step with takeoff / landing.
pub fn recompute_flight_time(row: &mut LogRow) {
    if !row.takeoff.is_empty() || !row.landing.is_empty() {
        row.flight_time = elapsed(&row.takeoff, &row.landing);
    } else {
        row.flight_time.clear();
    }
}

/// Blank a row in place, keeping its identity, load label and block time.
pub fn clear_row(row: &mut LogRow) {
    *row = LogRow {
        id: std::mem::take(&mut row.id),
        load: std::mem::take(&mut row.load),
        block_time: std::mem::take(&mut row.block_time),
        ..LogRow::default()
    };
}
