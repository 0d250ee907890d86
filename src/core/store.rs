//! Loading and saving the sheet through the storage slots.
//!
//! Rows, header and duty window are three independent blobs. A blob that is
//! missing or unreadable falls back to its empty state; nothing else resets
//! state.

use crate::core::migrate::migrate_legacy_rows;
use crate::core::sheet::Sheet;
use crate::db::storage::{self, DUTY_KEY, META_KEY, ROWS_KEY};
use crate::errors::AppResult;
use crate::models::duty::DutyWindow;
use crate::models::log_row::{FERRY_ID, FERRY_LABEL, LogRow};
use crate::models::row_set::RowSet;
use crate::models::sheet_meta::SheetMeta;
use crate::ui::messages::warning;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

pub const ROWS_FORMAT_VERSION: u32 = 2;

#[derive(Serialize, Deserialize)]
struct StoredRows {
    version: u32,
    #[serde(flatten)]
    rows: RowSet,
}

/// Either the current structured blob or the legacy flat list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowsBlob {
    Current(StoredRows),
    Legacy(Vec<LogRow>),
}

pub fn encode_rows(rows: &RowSet) -> AppResult<String> {
    let stored = StoredRows {
        version: ROWS_FORMAT_VERSION,
        rows: rows.clone(),
    };
    Ok(serde_json::to_string(&stored)?)
}

pub fn decode_rows(json: &str) -> AppResult<RowSet> {
    let mut rows = match serde_json::from_str::<RowsBlob>(json)? {
        RowsBlob::Current(stored) => stored.rows,
        RowsBlob::Legacy(flat) => migrate_legacy_rows(flat),
    };

    if let Some(ferry) = rows.ferry.as_mut() {
        ferry.id = FERRY_ID.to_string();
        ferry.load = FERRY_LABEL.to_string();
    }
    Ok(rows)
}

pub struct SheetStore;

impl SheetStore {
    /// Read the whole sheet. Never fails: unreadable parts start empty.
    pub fn load(conn: &Connection) -> Sheet {
        let rows = read_slot(conn, ROWS_KEY, decode_rows);
        let meta: SheetMeta = read_slot(conn, META_KEY, |s| Ok(serde_json::from_str(s)?));
        let duty: DutyWindow = read_slot(conn, DUTY_KEY, |s| Ok(serde_json::from_str(s)?));

        Sheet { meta, rows, duty }
    }

    /// Write all three blobs in one transaction: either every slot is
    /// updated or none is.
    pub fn save(conn: &mut Connection, sheet: &Sheet) -> AppResult<()> {
        let rows = encode_rows(&sheet.rows)?;
        let meta = serde_json::to_string(&sheet.meta)?;
        let duty = serde_json::to_string(&sheet.duty)?;

        let tx = conn.transaction()?;
        storage::put(&tx, ROWS_KEY, &rows)?;
        storage::put(&tx, META_KEY, &meta)?;
        storage::put(&tx, DUTY_KEY, &duty)?;
        tx.commit()?;
        Ok(())
    }
}

fn read_slot<T, F>(conn: &Connection, key: &str, decode: F) -> T
where
    T: Default,
    F: FnOnce(&str) -> AppResult<T>,
{
    let raw = match storage::get(conn, key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            warning(format!("Could not read '{key}', starting empty: {e}"));
            return T::default();
        }
    };

    decode(&raw).unwrap_or_else(|e| {
        warning(format!("Stored '{key}' is unreadable, starting empty: {e}"));
        T::default()
    })
}
