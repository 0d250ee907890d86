// src/export/pdf_export.rs

use crate::core::sheet::Sheet;
use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, rows_to_table, sheet_title, summary_lines};
use crate::export::notify_export_success;
use crate::export::pdf::{PageSize, PdfManager};
use crate::ui::messages::info;
use std::path::Path;

/// Lay the sheet out as a PDF document and return its bytes.
pub fn render_pdf(sheet: &Sheet, page: PageSize) -> Vec<u8> {
    let headers = get_headers();
    let table = rows_to_table(&sheet.rows);

    let mut pdf = PdfManager::new(page);
    pdf.write_sheet(&sheet_title(sheet), &summary_lines(sheet), &headers, &table);
    pdf.finish()
}

/// PDF export of the full sheet.
pub(crate) fn export_pdf(sheet: &Sheet, path: &Path, page: PageSize) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    std::fs::write(path, render_pdf(sheet, page))
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
