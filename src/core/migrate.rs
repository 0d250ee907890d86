//! Upgrade of row blobs written in the legacy flat format.
//!
//! The flat format stored every row, ferry included, in one list. When such a
//! blob is read the ferry row is always dropped, and the old 19-row blank
//! scaffold is discarded altogether.

use crate::models::log_row::{FERRY_LABEL, LogRow};
use crate::models::row_set::RowSet;

/// Number of placeholder rows the old sheet was pre-filled with.
pub const LEGACY_SCAFFOLD_ROWS: usize = 19;

/// True for the untouched 1..19 scaffold: exactly those loads, all blank.
pub fn is_legacy_scaffold(rows: &[LogRow]) -> bool {
    rows.len() == LEGACY_SCAFFOLD_ROWS
        && rows
            .iter()
            .enumerate()
            .all(|(i, r)| r.load_number() == Some(i as i64 + 1) && r.is_blank())
}

pub fn migrate_legacy_rows(rows: Vec<LogRow>) -> RowSet {
    if is_legacy_scaffold(&rows) {
        return RowSet::new();
    }

    RowSet {
        ferry: None,
        loads: rows
            .into_iter()
            .filter(|r| !r.is_ferry() && r.load != FERRY_LABEL)
            .collect(),
    }
}
