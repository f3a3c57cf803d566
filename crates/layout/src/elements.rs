use crate::config::PageGeometry;
use crate::logo::LogoImage;
use faktura_types::{Color, FontWeight, TextAlign};

/// A single drawable item with its absolute position and the graphics state
/// it was placed under. A page is simply a collection of these.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub style: DrawStyle,
}

#[derive(Clone, Debug)]
pub enum LayoutElement {
    /// A single already-aligned text run. `y` of the carrying element is the
    /// text baseline, not the box top.
    Text(TextElement),
    /// A rectangle; fill and stroke colors come from the element style.
    Rect(RectElement),
    /// The header logo. The bitmap itself lives on `LaidOutDocument`.
    Logo,
    /// "page X of N" marker, resolved in `finish_document` once the total
    /// page count is known. Position is the marker cell box.
    PageCountPlaceholder { page_no: usize, align: TextAlign },
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rect(_) => write!(f, "Rect"),
            LayoutElement::Logo => write!(f, "Logo"),
            LayoutElement::PageCountPlaceholder { page_no, .. } => {
                write!(f, "PageCountPlaceholder(page={})", page_no)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct TextElement {
    pub content: String,
}

#[derive(Clone, Copy, Debug)]
pub struct RectElement {
    pub fill: bool,
    pub stroke: bool,
}

/// Snapshot of the cursor graphics state an element was placed under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawStyle {
    pub font_weight: FontWeight,
    /// Points.
    pub font_size: f32,
    pub text_color: Color,
    pub fill_color: Color,
    pub draw_color: Color,
    /// Millimeters.
    pub line_width: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            font_weight: FontWeight::Regular,
            font_size: 12.0,
            text_color: Color::BLACK,
            fill_color: Color::WHITE,
            draw_color: Color::BLACK,
            line_width: 0.2,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    pub elements: Vec<PositionedElement>,
}

/// The result of laying out one document: pages of positioned elements with
/// every placeholder resolved, ready for a render backend.
#[derive(Clone, Debug)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
    pub geometry: PageGeometry,
    pub logo: Option<LogoImage>,
}
