use crate::core::sheet::Sheet;
use crate::core::store::SheetStore;
use crate::db::log::fllog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Load → mutate → save cycle shared by every command that changes the sheet.
pub struct SheetLogic;

impl SheetLogic {
    /// Load the sheet, run `op` on it and save it back.
    /// When `op` fails nothing is written, so stored state stays as it was.
    pub fn apply<T, F>(pool: &mut DbPool, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut Sheet) -> AppResult<T>,
    {
        let mut sheet = SheetStore::load(&pool.conn);
        let out = op(&mut sheet)?;
        SheetStore::save(&mut pool.conn, &sheet)?;
        Ok(out)
    }

    /// Read-only view of the stored sheet.
    pub fn snapshot(pool: &DbPool) -> Sheet {
        SheetStore::load(&pool.conn)
    }

    /// Audit line for a completed operation (non-blocking).
    pub fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
        if let Err(e) = fllog(&pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
