//! Key-value slots holding the persisted sheet blobs.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const ROWS_KEY: &str = "flightlog.rows";
pub const META_KEY: &str = "flightlog.meta";
pub const DUTY_KEY: &str = "flightlog.duty";

/// Read a slot. `None` when nothing was ever written under `key`.
pub fn get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Write a slot, replacing any previous value. Writing the same value twice is
/// harmless.
pub fn put(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}
