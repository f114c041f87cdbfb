//! PDF renderer
//!
//! Lays a [`Report`] out on A4 pages with the built-in Helvetica fonts.
//! Text width is estimated from the character count, which is close enough
//! for wrapping table cells and paragraphs.

use super::report::{Block, Cover, Report, Table};
use crate::config::{
    PDF_FLOOR_PLAN_MAX_HEIGHT_MM, PDF_FLOOR_PLAN_MAX_WIDTH_MM, PDF_FOOTER_HEIGHT_MM,
    PDF_MARGIN_MM, PDF_PAGE_HEIGHT_MM, PDF_PAGE_WIDTH_MM,
};
use crate::error::{AppError, Result};
use printpdf::image_crate::{self, DynamicImage};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rect, Rgb,
};
use std::path::Path;

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;

const TITLE_SIZE: f32 = 22.0;
const HEADING_SIZE: f32 = 13.0;
const BODY_SIZE: f32 = 10.0;
const CELL_SIZE: f32 = 8.0;
const FOOTER_SIZE: f32 = 8.0;

const CELL_PADDING_MM: f32 = 1.5;
const CELL_LINE_MM: f32 = 4.0;
const BODY_LINE_MM: f32 = 5.0;

const LOGO_MAX_WIDTH_MM: f32 = 60.0;
const LOGO_MAX_HEIGHT_MM: f32 = 30.0;
const FOOTER_LOGO_MAX_WIDTH_MM: f32 = 30.0;
const FOOTER_LOGO_MAX_HEIGHT_MM: f32 = 8.0;

/// Render the report to PDF bytes
pub fn render_pdf(report: &Report) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Auditoría {}", report.cover.site_name),
        Mm(PDF_PAGE_WIDTH_MM),
        Mm(PDF_PAGE_HEIGHT_MM),
        "Contenido",
    );
    let first = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Export(format!("Failed to load font: {}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Export(format!("Failed to load font: {}", e)))?;

    let mut layout = Layout {
        doc,
        regular,
        bold,
        pages: vec![first],
        y: top(),
        fresh: true,
    };

    let logo = load_logo(&report.cover);
    layout.cover(&report.cover, logo.as_ref());
    layout.new_page();

    for block in &report.blocks {
        match block {
            Block::Title(text) => layout.title(text),
            Block::Heading(text) => layout.heading(text),
            Block::Paragraph(text) => layout.paragraph(text),
            Block::Table(table) => layout.table(table),
            Block::Image(path) => layout.image(path),
            Block::Spacer(height) => layout.spacer(*height),
            Block::PageBreak => layout.page_break(),
        }
    }

    layout.footers(&report.footer, logo.as_ref());

    let page_count = layout.pages.len();
    let bytes = layout
        .doc
        .save_to_bytes()
        .map_err(|e| AppError::Export(format!("Failed to write PDF: {}", e)))?;

    tracing::debug!("Rendered PDF: {} pages, {} bytes", page_count, bytes.len());
    Ok(bytes)
}

fn top() -> f32 {
    PDF_PAGE_HEIGHT_MM - PDF_MARGIN_MM
}

fn bottom() -> f32 {
    PDF_MARGIN_MM
}

fn content_width() -> f32 {
    PDF_PAGE_WIDTH_MM - 2.0 * PDF_MARGIN_MM
}

fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * 1.5
}

/// Greedy word wrap. Words longer than a line are split.
fn wrap(text: &str, size: f32, width: f32) -> Vec<String> {
    let max_chars = ((width / (size * AVG_GLYPH_WIDTH * PT_TO_MM)) as usize).max(1);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut line = String::new();
        for word in raw.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                lines.push(word.drain(..max_chars).collect());
            }
            let word: String = word.into_iter().collect();

            let needed = line.chars().count() + usize::from(!line.is_empty()) + word.chars().count();
            if needed > max_chars && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&word);
        }
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Scale a picture into a box, keeping its aspect ratio
fn fit(width_px: u32, height_px: u32, max_width: f32, max_height: f32) -> (f32, f32) {
    let ratio = height_px.max(1) as f32 / width_px.max(1) as f32;
    let width = max_width.min(max_height / ratio);
    (width, width * ratio)
}

fn load_image(path: &Path) -> std::result::Result<DynamicImage, String> {
    let image = image_crate::open(path).map_err(|e| e.to_string())?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

/// Company logo, or `None` when unset or unreadable
fn load_logo(cover: &Cover) -> Option<DynamicImage> {
    let path = cover.logo_path.as_deref()?;
    match load_image(path) {
        Ok(image) => Some(image),
        Err(e) => {
            tracing::warn!("Logo {:?} could not be loaded: {}", path, e);
            None
        }
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn white() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn teal() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.5, 0.5, None))
}

struct Layout {
    doc: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    pages: Vec<PdfLayerReference>,
    /// Top of the free space on the current page
    y: f32,
    /// Nothing drawn on the current page yet
    fresh: bool,
}

impl Layout {
    fn layer(&self) -> &PdfLayerReference {
        // `pages` always holds the first page
        &self.pages[self.pages.len() - 1]
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(
            Mm(PDF_PAGE_WIDTH_MM),
            Mm(PDF_PAGE_HEIGHT_MM),
            "Contenido",
        );
        self.pages.push(self.doc.get_page(page).get_layer(layer));
        self.y = top();
        self.fresh = true;
    }

    fn page_break(&mut self) {
        if !self.fresh {
            self.new_page();
        }
    }

    /// Start a new page unless `height` still fits on this one
    fn ensure(&mut self, height: f32) {
        if self.y - height < bottom() && !self.fresh {
            self.new_page();
        }
    }

    fn text_at(&self, text: &str, size: f32, bold: bool, x: f32, baseline: f32) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer().use_text(text, size, Mm(x), Mm(baseline), font);
    }

    fn line(&mut self, text: &str, size: f32, bold: bool) {
        let height = line_height(size);
        self.ensure(height);
        self.text_at(text, size, bold, PDF_MARGIN_MM, self.y - size * PT_TO_MM);
        self.y -= height;
        self.fresh = false;
    }

    fn title(&mut self, text: &str) {
        for line in wrap(text, TITLE_SIZE, content_width()) {
            self.line(&line, TITLE_SIZE, true);
        }
    }

    fn heading(&mut self, text: &str) {
        // Keep a heading together with the first lines that follow it
        self.ensure(line_height(HEADING_SIZE) + 3.0 * CELL_LINE_MM);
        for line in wrap(text, HEADING_SIZE, content_width()) {
            self.line(&line, HEADING_SIZE, true);
        }
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap(text, BODY_SIZE, content_width()) {
            self.ensure(BODY_LINE_MM);
            self.text_at(&line, BODY_SIZE, false, PDF_MARGIN_MM, self.y - BODY_SIZE * PT_TO_MM);
            self.y -= BODY_LINE_MM;
            self.fresh = false;
        }
    }

    fn spacer(&mut self, height: f32) {
        if !self.fresh {
            self.y = (self.y - height).max(bottom());
        }
    }

    fn table(&mut self, table: &Table) {
        let columns = table.headers.len().max(1);
        let column_width = content_width() / columns as f32;

        self.ensure(2.0 * (CELL_LINE_MM + 2.0 * CELL_PADDING_MM));
        self.table_row(&table.headers, column_width, true);

        for row in &table.rows {
            let height = row_height(row, column_width);
            if self.y - height < bottom() {
                self.new_page();
                self.table_row(&table.headers, column_width, true);
            }
            self.table_row(row, column_width, false);
        }
    }

    fn table_row(&mut self, cells: &[String], column_width: f32, header: bool) {
        let height = row_height(cells, column_width);
        let row_top = self.y;
        let row_bottom = row_top - height;
        let right = PDF_MARGIN_MM + column_width * cells.len().max(1) as f32;
        let layer = self.layer().clone();

        layer.set_outline_color(black());
        layer.set_outline_thickness(0.5);

        if header {
            layer.set_fill_color(teal());
            layer.add_rect(
                Rect::new(Mm(PDF_MARGIN_MM), Mm(row_bottom), Mm(right), Mm(row_top))
                    .with_mode(PaintMode::FillStroke),
            );
            layer.set_fill_color(white());
        }

        for (index, cell) in cells.iter().enumerate() {
            let x = PDF_MARGIN_MM + column_width * index as f32;
            let lines = wrap(cell, CELL_SIZE, column_width - 2.0 * CELL_PADDING_MM);
            for (line_index, line) in lines.iter().enumerate() {
                let baseline = row_top
                    - CELL_PADDING_MM
                    - CELL_SIZE * PT_TO_MM
                    - line_index as f32 * CELL_LINE_MM;
                self.text_at(line, CELL_SIZE, header, x + CELL_PADDING_MM, baseline);
            }
        }
        layer.set_fill_color(black());

        let mut edges = vec![
            ((PDF_MARGIN_MM, row_top), (right, row_top)),
            ((PDF_MARGIN_MM, row_bottom), (right, row_bottom)),
        ];
        for index in 0..=cells.len() {
            let x = PDF_MARGIN_MM + column_width * index as f32;
            edges.push(((x, row_top), (x, row_bottom)));
        }
        for ((x1, y1), (x2, y2)) in edges {
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(x1), Mm(y1)), false),
                    (Point::new(Mm(x2), Mm(y2)), false),
                ],
                is_closed: false,
            });
        }

        self.y = row_bottom;
        self.fresh = false;
    }

    fn image(&mut self, path: &Path) {
        let image = match load_image(path) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!("Floor plan {:?} could not be loaded: {}", path, e);
                self.paragraph(&format!("No se pudo cargar la imagen del plano: {}", e));
                return;
            }
        };

        let available = (self.y - bottom()).min(PDF_FLOOR_PLAN_MAX_HEIGHT_MM);
        let (width, height) = fit(
            image.width(),
            image.height(),
            PDF_FLOOR_PLAN_MAX_WIDTH_MM,
            available.max(PDF_FLOOR_PLAN_MAX_HEIGHT_MM / 2.0),
        );
        self.ensure(height);

        let x = PDF_MARGIN_MM + (content_width() - width) / 2.0;
        draw_image(self.layer(), &image, x, self.y - height, width);
        self.y -= height;
        self.fresh = false;
    }

    fn cover(&mut self, cover: &Cover, logo: Option<&DynamicImage>) {
        match logo {
            Some(image) => {
                let (width, height) = fit(
                    image.width(),
                    image.height(),
                    LOGO_MAX_WIDTH_MM,
                    LOGO_MAX_HEIGHT_MM,
                );
                draw_image(self.layer(), image, PDF_MARGIN_MM, top() - height, width);
            }
            None => self.text_at(
                &cover.company_name,
                HEADING_SIZE,
                true,
                PDF_MARGIN_MM,
                top() - HEADING_SIZE * PT_TO_MM,
            ),
        }

        let mut baseline = PDF_PAGE_HEIGHT_MM * 0.45;
        self.text_at(&cover.title, 40.0, true, PDF_MARGIN_MM, baseline);
        baseline -= 14.0;
        for line in wrap(&cover.site_name, 18.0, content_width()) {
            self.text_at(&line, 18.0, false, PDF_MARGIN_MM, baseline);
            baseline -= line_height(18.0);
        }
        self.text_at(&cover.date, BODY_SIZE, false, PDF_MARGIN_MM, baseline - 2.0);

        self.fresh = false;
    }

    /// Rule, logo (or company name) and page number on every page
    fn footers(&self, footer: &str, logo: Option<&DynamicImage>) {
        let total = self.pages.len();
        let rule = PDF_FOOTER_HEIGHT_MM;
        let baseline = PDF_FOOTER_HEIGHT_MM - 5.0;

        for (index, layer) in self.pages.iter().enumerate() {
            layer.set_outline_color(black());
            layer.set_outline_thickness(0.3);
            layer.add_line(Line {
                points: vec![
                    (Point::new(Mm(PDF_MARGIN_MM), Mm(rule)), false),
                    (Point::new(Mm(PDF_PAGE_WIDTH_MM - PDF_MARGIN_MM), Mm(rule)), false),
                ],
                is_closed: false,
            });

            match logo {
                Some(image) => {
                    let (width, _) = fit(
                        image.width(),
                        image.height(),
                        FOOTER_LOGO_MAX_WIDTH_MM,
                        FOOTER_LOGO_MAX_HEIGHT_MM,
                    );
                    // Stays below the rule
                    let y = rule - 2.0 - FOOTER_LOGO_MAX_HEIGHT_MM;
                    draw_image(layer, image, PDF_MARGIN_MM, y, width);
                }
                None => layer.use_text(
                    footer,
                    FOOTER_SIZE,
                    Mm(PDF_MARGIN_MM),
                    Mm(baseline),
                    &self.regular,
                ),
            }

            let number = format!("Página {} de {}", index + 1, total);
            let x = PDF_PAGE_WIDTH_MM - PDF_MARGIN_MM - text_width(&number, FOOTER_SIZE);
            layer.use_text(number, FOOTER_SIZE, Mm(x), Mm(baseline), &self.regular);
        }
    }
}

fn draw_image(layer: &PdfLayerReference, image: &DynamicImage, x: f32, y: f32, width: f32) {
    let dpi = image.width().max(1) as f32 * 25.4 / width;
    Image::from_dynamic_image(image).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}

fn row_height(cells: &[String], column_width: f32) -> f32 {
    let lines = cells
        .iter()
        .map(|cell| wrap(cell, CELL_SIZE, column_width - 2.0 * CELL_PADDING_MM).len())
        .max()
        .unwrap_or(1);
    lines as f32 * CELL_LINE_MM + 2.0 * CELL_PADDING_MM
}
