use flightlog::core::sheet::Sheet;
use flightlog::export::pdf::{PageSize, PdfManager, fit_text, text_width};
use flightlog::export::pdf_export::render_pdf;
use flightlog::models::field::{RowField, csv_headers};

fn table(rows: usize, remarks: &str) -> Vec<Vec<String>> {
    (1..=rows)
        .map(|n| {
            let mut cells = vec![String::new(); 11];
            cells[0] = n.to_string();
            cells[10] = remarks.to_string();
            cells
        })
        .collect()
}

fn summary() -> Vec<(String, String)> {
    (0..10)
        .map(|i| (format!("Key {i}"), format!("value {i}")))
        .collect()
}

#[test]
fn test_render_pdf_produces_pdf_bytes() {
    let mut sheet = Sheet::new();
    sheet.add_ferry_row().unwrap();
    sheet.add_load_row().unwrap();
    sheet
        .update_field("1", RowField::Remarks, "Tandem")
        .unwrap();

    let bytes = render_pdf(&sheet, PageSize::A4);
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Helvetica"));
}

#[test]
fn test_render_pdf_for_empty_sheet() {
    let bytes = render_pdf(&Sheet::new(), PageSize::Letter);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_short_sheet_fits_one_page() {
    let mut pdf = PdfManager::new(PageSize::A4);
    pdf.write_sheet("Flight log", &summary(), &csv_headers(), &table(5, ""));
    assert_eq!(pdf.page_count(), 1);
}

#[test]
fn test_long_sheet_paginates() {
    let mut pdf = PdfManager::new(PageSize::A4);
    pdf.write_sheet("Flight log", &summary(), &csv_headers(), &table(60, ""));
    assert_eq!(pdf.page_count(), 3);

    let bytes = pdf.finish();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_columns_are_scaled_to_page_width() {
    let pdf = PdfManager::new(PageSize::A4);
    let long = "very long remark ".repeat(40);
    let widths = pdf.compute_col_widths(&csv_headers(), &table(3, &long));

    assert_eq!(widths.len(), 11);
    let total: f32 = widths.iter().sum();
    assert!(total <= pdf.usable_width() + 0.01);
    // the remarks column still gets the largest share
    let max = widths.iter().cloned().fold(0.0_f32, f32::max);
    assert_eq!(max, widths[10]);
}

#[test]
fn test_narrow_table_is_not_stretched() {
    let pdf = PdfManager::new(PageSize::Letter);
    let widths = pdf.compute_col_widths(&csv_headers(), &table(2, "x"));
    let total: f32 = widths.iter().sum();
    assert!(total < pdf.usable_width());
}

#[test]
fn test_fit_text_truncates_to_width() {
    assert_eq!(fit_text("short", 9.0, 500.0), "short");

    let fitted = fit_text("a rather long remark", 9.0, 40.0);
    assert!(text_width(&fitted, 9.0) <= 40.0);
    assert!("a rather long remark".starts_with(&fitted));
    assert!(fitted.len() < "a rather long remark".len());

    assert_eq!(fit_text("anything", 9.0, 0.0), "");
}
