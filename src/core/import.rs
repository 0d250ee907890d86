use crate::core::logic::SheetLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::csv_format::read_csv;
use crate::ui::messages::{info, success};
use std::fs::File;
use std::io;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Replace every row with the content of a CSV file.
    ///
    /// The whole file is parsed before anything is stored, so a bad header or
    /// a bad line leaves the sheet exactly as it was.
    pub fn import(pool: &mut DbPool, path: &Path) -> AppResult<usize> {
        info(format!("Importing CSV: {}", path.display()));

        let file = File::open(path).map_err(|e| {
            AppError::from(io::Error::new(
                e.kind(),
                format!("cannot open {}: {e}", path.display()),
            ))
        })?;
        let rows = read_csv(file)?;
        let count = rows.len();

        SheetLogic::apply(pool, |sheet| sheet.replace_rows(rows))?;
        SheetLogic::audit(
            pool,
            "import",
            &path.display().to_string(),
            &format!("Imported {count} rows"),
        );

        success(format!("Imported {count} rows from {}", path.display()));
        Ok(count)
    }
}
