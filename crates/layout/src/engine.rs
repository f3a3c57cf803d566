//! Page lifecycle and primitive drawing operations.
//!
//! The engine owns the page coordinate space: a mutable cursor, the graphics
//! state (font, colors, line width), per-page decoration, and the decision
//! when content must move to a new page. Pages are buffered as positioned
//! elements; `finish_document` resolves the page-count marker once the total
//! is known and hands the pages to a render backend.

use crate::chrome::PageChrome;
use crate::config::PageGeometry;
use crate::elements::{
    DrawStyle, LaidOutDocument, LayoutElement, Page, PositionedElement, RectElement, TextElement,
};
use crate::logo::LogoImage;
use crate::{LayoutError, metrics, text};
use faktura_types::{Color, FontWeight, MM_TO_PT, TextAlign};

// Tolerance for floating point drift in fit checks.
const EPSILON: f32 = 0.01;

// Header block: sender lines left, label/value metadata rows right.
const SENDER_COLUMN_WIDTH: f32 = 90.0;
const SENDER_FONT_SIZE: f32 = 11.0;
const META_LABEL_X: f32 = 110.0;
const META_COLUMN_WIDTH: f32 = 40.0;
const META_FONT_SIZE: f32 = 10.0;

// Footer block: 8pt text on 4mm lines. Every column after the first starts
// three lines above wherever the previous column ended.
const FOOTER_FONT_SIZE: f32 = 8.0;
const FOOTER_LINE_HEIGHT: f32 = 4.0;
const FOOTER_COLUMN_REWIND: f32 = 12.0;
const MARKER_ROW_HEIGHT: f32 = 10.0;

/// Current drawing position and graphics state on the active page.
///
/// Lives for one document render; positions are millimeters from the top-left
/// page corner, font sizes are points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetCursor {
    pub x: f32,
    pub y: f32,
    pub font_weight: FontWeight,
    pub font_size: f32,
    pub text_color: Color,
    pub draw_color: Color,
    pub fill_color: Color,
    pub line_width: f32,
    pub page_no: usize,
}

impl Default for SheetCursor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            font_weight: FontWeight::Regular,
            font_size: 12.0,
            text_color: Color::BLACK,
            draw_color: Color::BLACK,
            fill_color: Color::WHITE,
            line_width: 0.2,
            page_no: 0,
        }
    }
}

impl SheetCursor {
    fn style(&self) -> DrawStyle {
        DrawStyle {
            font_weight: self.font_weight,
            font_size: self.font_size,
            text_color: self.text_color,
            fill_color: self.fill_color,
            draw_color: self.draw_color,
            line_width: self.line_width,
        }
    }
}

/// One fixed-size rectangular cell placed at the cursor.
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    /// Width in millimeters; `0.0` extends the cell to the right margin.
    pub width: f32,
    pub height: f32,
    pub text: &'a str,
    pub border: bool,
    pub align: TextAlign,
    pub fill: bool,
    /// Move to the next row at the left margin instead of advancing right.
    pub ln: bool,
}

impl Default for Cell<'_> {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            text: "",
            border: false,
            align: TextAlign::Left,
            fill: false,
            ln: false,
        }
    }
}

pub struct LayoutEngine {
    geometry: PageGeometry,
    chrome: PageChrome,
    cursor: SheetCursor,
    pages: Vec<Page>,
    after_header_y: f32,
    logo: Option<LogoImage>,
    begun: bool,
    page_open: bool,
    body_placed: bool,
}

impl LayoutEngine {
    pub fn new(geometry: PageGeometry, chrome: PageChrome) -> Self {
        let header_rows = chrome.sender_lines.len().max(chrome.meta_rows.len());
        let after_header_y = geometry.header_top
            + header_rows as f32 * geometry.header_row_height
            + geometry.header_gap;
        Self {
            geometry,
            chrome,
            cursor: SheetCursor::default(),
            pages: Vec::new(),
            after_header_y,
            logo: None,
            begun: false,
            page_open: false,
            body_placed: false,
        }
    }

    /// Initialize an empty page sequence. Page-count markers placed by
    /// `end_page` stay unresolved until `finish_document`, when the total
    /// page count is finally known.
    pub fn begin_document(&mut self) -> Result<(), LayoutError> {
        self.pages.clear();
        self.cursor = SheetCursor::default();
        self.begun = true;
        self.page_open = false;
        self.body_placed = false;
        Ok(())
    }

    /// Start a new page: border, header block, and logo are drawn, and the
    /// cursor resumes at [`after_header_y`](Self::after_header_y).
    ///
    /// Idempotent on a page that has received no body content. If the open
    /// page already carries content this is an explicit break request and
    /// the page is closed (footer drawn) first. Overflowing body content
    /// triggers the same sequence automatically.
    pub fn begin_page(&mut self) -> Result<(), LayoutError> {
        if !self.begun {
            return Err(LayoutError::NoPage);
        }
        if self.page_open {
            if !self.body_placed {
                return Ok(());
            }
            self.end_page()?;
        }
        self.open_page()
    }

    /// Close the active page by drawing the footer block: the configured
    /// text columns and the right-aligned page marker. Runs at a fixed
    /// offset from the bottom edge regardless of how much body was placed.
    pub fn end_page(&mut self) -> Result<(), LayoutError> {
        if !self.page_open {
            return Err(LayoutError::NoPage);
        }
        let footer_y = self.geometry.footer_y();
        let padding = self.geometry.cell_padding;

        let mut resume_y = footer_y;
        let columns = self.chrome.footer_columns.clone();
        for (i, col) in columns.iter().enumerate() {
            let top = if i == 0 { footer_y } else { resume_y - FOOTER_COLUMN_REWIND };
            let lines = text::wrap(
                &col.text,
                col.width - 2.0 * padding,
                FontWeight::Regular,
                FOOTER_FONT_SIZE,
            );
            for (j, line) in lines.iter().enumerate() {
                self.chrome_text(
                    col.x,
                    top + j as f32 * FOOTER_LINE_HEIGHT,
                    col.width,
                    FOOTER_LINE_HEIGHT,
                    line,
                    FontWeight::Regular,
                    FOOTER_FONT_SIZE,
                );
            }
            resume_y = top + lines.len() as f32 * FOOTER_LINE_HEIGHT;
        }

        let marker = PositionedElement {
            x: self.geometry.margin_left,
            y: self.geometry.marker_y(),
            width: self.geometry.content_width(),
            height: MARKER_ROW_HEIGHT,
            element: LayoutElement::PageCountPlaceholder {
                page_no: self.cursor.page_no,
                align: TextAlign::Right,
            },
            style: DrawStyle {
                font_weight: FontWeight::Regular,
                font_size: FOOTER_FONT_SIZE,
                ..DrawStyle::default()
            },
        };
        self.push(marker);

        self.page_open = false;
        Ok(())
    }

    /// Draw one cell at the cursor and advance it. Content that would cross
    /// the footer line moves to a fresh page first; the caller never sees
    /// the break.
    pub fn place_cell(&mut self, cell: Cell<'_>) -> Result<(), LayoutError> {
        if !self.page_open {
            return Err(LayoutError::NoPage);
        }

        let content_width = self.geometry.content_width();
        if cell.width > content_width + EPSILON {
            return Err(LayoutError::CellTooWide(cell.width, content_width));
        }
        let max_height = self.geometry.footer_y() - self.after_header_y;
        if cell.height > max_height + EPSILON {
            return Err(LayoutError::CellTooTall(cell.height, max_height));
        }

        if self.cursor.y + cell.height > self.geometry.footer_y() + EPSILON {
            self.break_page()?;
        }

        let width = if cell.width == 0.0 {
            (self.geometry.right_edge() - self.cursor.x).max(0.0)
        } else {
            cell.width
        };
        let (x, y) = (self.cursor.x, self.cursor.y);
        let style = self.cursor.style();

        if cell.fill || cell.border {
            self.push(PositionedElement {
                x,
                y,
                width,
                height: cell.height,
                element: LayoutElement::Rect(RectElement { fill: cell.fill, stroke: cell.border }),
                style,
            });
        }

        if !cell.text.is_empty() {
            let text_width = metrics::string_width(cell.text, style.font_weight, style.font_size);
            self.push(PositionedElement {
                x: aligned_x(x, width, text_width, cell.align, self.geometry.cell_padding),
                y: baseline_in(y, cell.height, style.font_size),
                width: text_width,
                height: cell.height,
                element: LayoutElement::Text(TextElement { content: cell.text.to_string() }),
                style,
            });
        }

        if cell.ln {
            self.cursor.x = self.geometry.margin_left;
            self.cursor.y += cell.height;
        } else {
            self.cursor.x += width;
        }
        self.body_placed = true;
        Ok(())
    }

    /// Draw a multi-line text block wrapped at `width`, advancing the cursor
    /// by one `line_height` per wrapped line. The cursor ends at the left
    /// margin below the block. A `width` of `0.0` spans to the right margin.
    pub fn place_wrapped_text(
        &mut self,
        width: f32,
        line_height: f32,
        content: &str,
        align: TextAlign,
    ) -> Result<(), LayoutError> {
        if !self.page_open {
            return Err(LayoutError::NoPage);
        }

        let width = if width == 0.0 {
            (self.geometry.right_edge() - self.cursor.x).max(0.0)
        } else {
            width
        };
        let style = self.cursor.style();
        let lines = text::wrap(
            content,
            width - 2.0 * self.geometry.cell_padding,
            style.font_weight,
            style.font_size,
        );

        for line in lines {
            if self.cursor.y + line_height > self.geometry.footer_y() + EPSILON {
                self.break_page()?;
            }
            if !line.is_empty() {
                let text_width = metrics::string_width(&line, style.font_weight, style.font_size);
                self.push(PositionedElement {
                    x: aligned_x(self.cursor.x, width, text_width, align, self.geometry.cell_padding),
                    y: baseline_in(self.cursor.y, line_height, style.font_size),
                    width: text_width,
                    height: line_height,
                    element: LayoutElement::Text(TextElement { content: line }),
                    style,
                });
            }
            self.cursor.y += line_height;
            self.body_placed = true;
        }
        self.cursor.x = self.geometry.margin_left;
        Ok(())
    }

    /// Resolve page-count markers and hand the buffered pages to a backend.
    /// A still-open page is closed first.
    pub fn finish_document(mut self) -> Result<LaidOutDocument, LayoutError> {
        if !self.begun {
            return Err(LayoutError::NoPage);
        }
        if self.page_open {
            self.end_page()?;
        }

        let total = self.pages.len();
        let padding = self.geometry.cell_padding;
        for page in &mut self.pages {
            for el in &mut page.elements {
                let marker = match &el.element {
                    LayoutElement::PageCountPlaceholder { page_no, align } => {
                        Some((*page_no, *align))
                    }
                    _ => None,
                };
                let Some((page_no, align)) = marker else {
                    continue;
                };
                let content = format!(
                    "{} {} {} {}",
                    self.chrome.page_word, page_no, self.chrome.of_word, total
                );
                let text_width =
                    metrics::string_width(&content, el.style.font_weight, el.style.font_size);
                *el = PositionedElement {
                    x: aligned_x(el.x, el.width, text_width, align, padding),
                    y: baseline_in(el.y, el.height, el.style.font_size),
                    width: text_width,
                    height: el.height,
                    element: LayoutElement::Text(TextElement { content }),
                    style: el.style,
                };
            }
        }
        log::debug!("document finished: {} page(s)", total);

        Ok(LaidOutDocument { pages: self.pages, geometry: self.geometry, logo: self.logo })
    }

    // --- Cursor and graphics state ---

    pub fn set_cursor(&mut self, x: f32, y: f32) {
        self.cursor.x = x;
        self.cursor.y = y;
    }

    pub fn cursor(&self) -> (f32, f32) {
        (self.cursor.x, self.cursor.y)
    }

    /// Line feed: move down by `dy` and back to the left margin.
    pub fn advance_y(&mut self, dy: f32) {
        self.cursor.x = self.geometry.margin_left;
        self.cursor.y += dy;
    }

    /// First body position free of header content. Body placed here can
    /// never overlap the header block.
    pub fn after_header_y(&self) -> f32 {
        self.after_header_y
    }

    pub fn set_font(&mut self, weight: FontWeight, size: f32) {
        self.cursor.font_weight = weight;
        self.cursor.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.cursor.text_color = color;
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.cursor.draw_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.cursor.fill_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.cursor.line_width = width;
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    // --- Internals ---

    fn open_page(&mut self) -> Result<(), LayoutError> {
        self.pages.push(Page::default());
        self.cursor.page_no += 1;
        self.page_open = true;
        self.body_placed = false;
        log::debug!("page {} started", self.cursor.page_no);

        let border = self.geometry.border;
        self.push(PositionedElement {
            x: border.x,
            y: border.y,
            width: border.width,
            height: border.height,
            element: LayoutElement::Rect(RectElement { fill: false, stroke: true }),
            style: DrawStyle {
                line_width: self.geometry.border_line_width,
                ..DrawStyle::default()
            },
        });

        if let Some(placement) = self.chrome.logo.clone() {
            if self.logo.is_none() {
                self.logo = Some(LogoImage::load(&placement.path)?);
            }
            let height = self
                .logo
                .as_ref()
                .map(|logo| logo.height_for_width(placement.width))
                .unwrap_or_default();
            self.push(PositionedElement {
                x: placement.x,
                y: placement.y,
                width: placement.width,
                height,
                element: LayoutElement::Logo,
                style: DrawStyle::default(),
            });
        }

        let rows = self.chrome.sender_lines.len().max(self.chrome.meta_rows.len());
        for i in 0..rows {
            let y = self.geometry.header_top + i as f32 * self.geometry.header_row_height;
            let height = self.geometry.header_row_height;
            if let Some(line) = self.chrome.sender_lines.get(i).cloned() {
                self.chrome_text(
                    self.geometry.margin_left,
                    y,
                    SENDER_COLUMN_WIDTH,
                    height,
                    &line,
                    FontWeight::Regular,
                    SENDER_FONT_SIZE,
                );
            }
            if let Some((label, value)) = self.chrome.meta_rows.get(i).cloned() {
                self.chrome_text(
                    META_LABEL_X,
                    y,
                    META_COLUMN_WIDTH,
                    height,
                    &label,
                    FontWeight::Regular,
                    META_FONT_SIZE,
                );
                self.chrome_text(
                    META_LABEL_X + META_COLUMN_WIDTH,
                    y,
                    META_COLUMN_WIDTH,
                    height,
                    &value,
                    FontWeight::Bold,
                    META_FONT_SIZE,
                );
            }
        }

        self.cursor.x = self.geometry.margin_left;
        self.cursor.y = self.after_header_y;
        Ok(())
    }

    fn break_page(&mut self) -> Result<(), LayoutError> {
        // The pending content keeps its x position on the new page.
        let x = self.cursor.x;
        log::debug!(
            "content would overflow page {} at y {:.1}mm; breaking",
            self.cursor.page_no,
            self.cursor.y
        );
        self.end_page()?;
        self.open_page()?;
        self.cursor.x = x;
        Ok(())
    }

    /// Left-aligned decoration text at an absolute box, independent of the
    /// cursor and the overflow check.
    fn chrome_text(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        content: &str,
        weight: FontWeight,
        size: f32,
    ) {
        if content.is_empty() {
            return;
        }
        let style = DrawStyle { font_weight: weight, font_size: size, ..DrawStyle::default() };
        self.push(PositionedElement {
            x: x + self.geometry.cell_padding,
            y: baseline_in(y, height, size),
            width: metrics::string_width(content, weight, size),
            height,
            element: LayoutElement::Text(TextElement { content: content.to_string() }),
            style,
        });
    }

    fn push(&mut self, element: PositionedElement) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }
}

fn aligned_x(x: f32, width: f32, text_width: f32, align: TextAlign, padding: f32) -> f32 {
    match align {
        TextAlign::Left => x + padding,
        TextAlign::Center => x + (width - text_width) / 2.0,
        TextAlign::Right => x + width - padding - text_width,
    }
}

/// Text baseline inside a cell box, vertically centered the way the row
/// heights in this layout assume.
fn baseline_in(top: f32, height: f32, font_size_pt: f32) -> f32 {
    top + 0.5 * height + 0.3 * font_size_pt / MM_TO_PT
}
