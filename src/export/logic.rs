// src/export/logic.rs

use crate::core::sheet::Sheet;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_format::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::notify_export_success;
use crate::export::pdf::PageSize;
use crate::export::pdf_export::export_pdf;
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole sheet, ignoring any search filter.
    ///
    /// - `format`: csv | json | pdf
    /// - `path`: output file; an existing file is only replaced with `force`
    ///   or after confirmation
    pub fn export(
        sheet: &Sheet,
        format: ExportFormat,
        path: &Path,
        force: bool,
        page: PageSize,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if sheet.rows.is_empty() {
            warning("The sheet has no rows: exporting header only.");
        }

        match format {
            ExportFormat::Csv => export_csv(sheet, path)?,
            ExportFormat::Json => export_json(sheet, path)?,
            ExportFormat::Pdf => export_pdf(sheet, path, page)?,
        }

        Ok(())
    }
}

fn export_csv(sheet: &Sheet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(file, &sheet.rows)?;

    notify_export_success("CSV", path);
    Ok(())
}
