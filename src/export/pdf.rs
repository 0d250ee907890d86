use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use serde::{Deserialize, Serialize};

/// Paper size. Sheets are always printed in landscape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// (width, height) in points, landscape.
    pub fn landscape(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (842.0, 595.0),
            PageSize::Letter => (792.0, 612.0),
        }
    }
}

/// Approximate Helvetica advance width, in 1/1000 em.
fn glyph_width(c: char) -> f32 {
    match c {
        ' ' | ',' | '.' | ':' | ';' | '/' | '!' | 'I' | 'f' | 't' => 278.0,
        'i' | 'j' | 'l' | '\'' | '|' => 222.0,
        '-' | 'r' | '(' | ')' => 333.0,
        '0'..='9' | 'a' | 'b' | 'd' | 'e' | 'g' | 'h' | 'n' | 'o' | 'p' | 'q' | 'u' => 556.0,
        'c' | 'k' | 's' | 'v' | 'x' | 'y' | 'z' | 'J' => 500.0,
        'm' | 'M' => 833.0,
        'w' => 722.0,
        'W' => 944.0,
        'C' | 'D' | 'G' | 'H' | 'N' | 'O' | 'Q' | 'R' | 'U' => 722.0,
        'A'..='Z' => 667.0,
        _ => 556.0,
    }
}

/// Measured width of `text` at `size` points.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().map(glyph_width).sum::<f32>() * size / 1000.0
}

/// Drop trailing characters until `text` fits in `max` points.
pub fn fit_text(text: &str, size: f32, max: f32) -> String {
    let mut out = text.to_string();
    while !out.is_empty() && text_width(&out, size) > max {
        out.pop();
    }
    out
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    cell_pad: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl PdfManager {
    pub fn new(page: PageSize) -> Self {
        let mut pdf = Pdf::new();

        // object ids are assigned by hand
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        let (page_w, page_h) = page.landscape();

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin: 36.0,
            row_h: 18.0,
            cell_pad: 3.0,
            line_h: 13.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 9.0,
            header_font_size: 9.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// New page with its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: &str,
    ) {
        // base-14 fonts: keep to ASCII
        let bytes: Vec<u8> = text
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect();
        let font = if bold { Name(b"F2") } else { Name(b"F1") };

        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    /// One table row whose bottom edge sits at `y`. Cells are truncated to
    /// their column.
    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        bold: bool,
    ) {
        let size = if bold {
            self.header_font_size
        } else {
            self.font_size
        };
        let mut x = self.margin;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map_or("", String::as_str);
            let fitted = fit_text(text, size, w - 2.0 * self.cell_pad);
            self.draw_text(content, x + self.cell_pad, y + 5.0, size, bold, &fitted);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Column widths from the measured header and body text, scaled down
    /// proportionally when the table would not fit between the margins.
    pub fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let pad = 2.0 * self.cell_pad;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| text_width(h, self.header_font_size) + pad)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(text_width(cell, self.font_size) + pad);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.usable_width();

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    pub fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin,
            self.title_font_size,
            true,
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - text_width(&pg, self.font_size),
            self.margin / 2.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Key/value block in two columns. Returns the y below the block.
    fn draw_summary(
        &self,
        content: &mut Content,
        summary: &[(String, String)],
        top: f32,
    ) -> f32 {
        let per_col = summary.len().div_ceil(2);
        let col_w = self.usable_width() / 3.0;
        let key_w = summary
            .iter()
            .map(|(k, _)| text_width(k, self.font_size))
            .fold(0.0_f32, f32::max)
            + 8.0;

        for (i, (key, value)) in summary.iter().enumerate() {
            let col = (i / per_col) as f32;
            let line = (i % per_col) as f32;
            let x = self.margin + col * col_w;
            let y = top - (line + 1.0) * self.line_h;

            self.draw_text(content, x, y, self.font_size, true, key);
            let fitted = fit_text(value, self.font_size, col_w - key_w - 8.0);
            self.draw_text(content, x + key_w, y, self.font_size, false, &fitted);
        }

        top - per_col as f32 * self.line_h - self.line_h
    }

    fn draw_header_row(
        &self,
        content: &mut Content,
        top: f32,
        col_widths: &[f32],
        headers: &[String],
    ) -> f32 {
        let y = top - self.row_h;
        self.fill_band(content, y, col_widths.iter().sum(), 0.85);
        self.draw_row(content, y, col_widths, headers, true);
        y
    }

    /// Whole sheet: title, summary block, then the table over as many pages as
    /// needed. The column header is repeated at the top of every page.
    pub fn write_sheet(
        &mut self,
        title: &str,
        summary: &[(String, String)],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let top = self.page_h - self.margin - 12.0;

        let mut page_idx = 1;
        let mut content = self.new_page();
        self.draw_page_header_footer(&mut content, title, page_idx);

        let mut y = self.draw_summary(&mut content, summary, top);
        y = self.draw_header_row(&mut content, y, &col_widths, &header_row);

        for (i, row) in rows.iter().enumerate() {
            if y - self.row_h < self.margin {
                self.finalize_page(content);
                page_idx += 1;
                content = self.new_page();
                self.draw_page_header_footer(&mut content, title, page_idx);
                y = self.draw_header_row(&mut content, top, &col_widths, &header_row);
            }

            y -= self.row_h;

            // zebra stripe
            if i % 2 == 1 {
                self.fill_band(&mut content, y, col_widths.iter().sum(), 0.96);
            }

            self.draw_row(&mut content, y, &col_widths, row, false);
        }

        self.finalize_page(content);
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}
