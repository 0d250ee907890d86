//! Totals, search filtering and fuel mirroring.

use crate::models::log_row::LogRow;
use crate::models::row_set::RowSet;
use crate::utils::time::sum_clocks;
use serde::Serialize;

/// Totals shown under the sheet. Always computed over the rows on display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub flights: usize,
    pub pax: u64,
    pub ldg: u64,
    pub flight_time: String,
}

pub fn totals<'a, I>(visible: I) -> Totals
where
    I: IntoIterator<Item = &'a LogRow>,
{
    let rows: Vec<&LogRow> = visible.into_iter().collect();

    Totals {
        flights: rows.len(),
        pax: rows.iter().filter_map(|r| r.passengers).map(u64::from).sum(),
        ldg: rows.iter().filter_map(|r| r.landings).map(u64::from).sum(),
        flight_time: sum_clocks(rows.iter().map(|r| r.flight_time.as_str())),
    }
}

/// A row matches when any column, lowercased, contains the lowercased query.
/// An empty query matches everything.
pub fn matches_query(row: &LogRow, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }
    row.cells().iter().any(|c| c.to_lowercase().contains(&q))
}

/// Rows on display for a search query, ferry first.
pub fn filter_rows<'a>(rows: &'a RowSet, query: &str) -> Vec<&'a LogRow> {
    rows.iter().filter(|r| matches_query(r, query)).collect()
}

/// Forward seed of the starting fuel: the first load row, or the ferry row
/// when there are no load rows, receives the value if its fuel-on-board is
/// still empty. Never overwrites.
///
/// Returns whether a row changed.
pub fn seed_start_fuel(rows: &mut RowSet, start_fuel: &str) -> bool {
    if start_fuel.is_empty() {
        return false;
    }

    let target = match rows.loads.first_mut() {
        Some(first) => Some(first),
        None => rows.ferry.as_mut(),
    };

    match target {
        Some(row) if row.fuel_on_board.is_empty() => {
            row.fuel_on_board = start_fuel.to_string();
            true
        }
        _ => false,
    }
}

/// Ending fuel: fuel-on-board of the last load row in storage order, empty
/// when there are no load rows. Unaffected by search.
pub fn ending_fuel(rows: &RowSet) -> String {
    rows.loads
        .last()
        .map(|r| r.fuel_on_board.clone())
        .unwrap_or_default()
}
