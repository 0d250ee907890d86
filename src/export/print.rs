// src/export/print.rs

use crate::core::sheet::Sheet;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::PageSize;
use crate::export::pdf_export::render_pdf;
use crate::export::text::render_text_sheet;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// How the sheet ended up being presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    Viewer(PathBuf),
    Text,
}

pub struct PrintLogic;

impl PrintLogic {
    /// Render the sheet to PDF and hand it to a viewer. When the PDF cannot
    /// be written or no viewer starts, the plain-text sheet goes to stdout
    /// instead. Nothing is retried.
    pub fn print(
        sheet: &Sheet,
        page: PageSize,
        viewer: Option<&str>,
        file: Option<&Path>,
    ) -> AppResult<PrintOutcome> {
        let path = file.map_or_else(default_print_path, Path::to_path_buf);

        match open_pdf(sheet, page, viewer, &path) {
            Ok(()) => {
                success(format!("Print preview opened: {}", path.display()));
                Ok(PrintOutcome::Viewer(path))
            }
            Err(e) => {
                warning(format!("{e}; printing as text instead"));
                print_text(sheet, &mut io::stdout().lock())?;
                Ok(PrintOutcome::Text)
            }
        }
    }
}

fn default_print_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    std::env::temp_dir().join(format!("flightlog-print-{stamp}.pdf"))
}

fn open_pdf(sheet: &Sheet, page: PageSize, viewer: Option<&str>, path: &Path) -> AppResult<()> {
    std::fs::write(path, render_pdf(sheet, page))
        .map_err(|e| AppError::Print(format!("cannot write {}: {e}", path.display())))?;

    let program = viewer
        .map(str::to_string)
        .or_else(|| std::env::var("PDF_VIEWER").ok())
        .unwrap_or_else(default_viewer);

    info(format!("Opening {} with '{}'", path.display(), program));

    let mut cmd = if cfg!(target_os = "windows") && program == "start" {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new(&program)
    };

    match cmd.arg(path).status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(AppError::Print(format!("viewer '{program}' exited with {s}"))),
        Err(e) => Err(AppError::Print(format!("viewer '{program}' not available: {e}"))),
    }
}

fn default_viewer() -> String {
    if cfg!(target_os = "windows") {
        "start".to_string()
    } else if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}

/// Write the plain-text sheet, surfacing a failure as an explicit error.
pub fn print_text<W: Write>(sheet: &Sheet, out: &mut W) -> AppResult<()> {
    out.write_all(render_text_sheet(sheet).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|e| AppError::Print(format!("cannot print the sheet: {e}")))
}
