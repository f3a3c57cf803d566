//! Translation of positioned elements into PDF content-stream operations.
//!
//! Layout coordinates are millimeters on a top-down y axis; everything here
//! is scaled to points and flipped into PDF user space. Graphics state is
//! diffed so repeated runs in the same font and color emit no redundant
//! operators.

use faktura_layout::metrics::encode_win_ansi;
use faktura_layout::{DrawStyle, LayoutElement, PositionedElement, RectElement, TextElement};
use faktura_types::{Color, FontWeight, MM_TO_PT};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

pub(crate) fn font_resource_name(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Regular => "F1",
        FontWeight::Bold => "F2",
    }
}

pub(crate) struct PageContext<'a> {
    /// Page height in millimeters, for the y flip.
    page_height: f32,
    content: Content,
    state: PageRenderState,
    logo_name: Option<&'a str>,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(&'static str, f32)>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(page_height: f32, logo_name: Option<&'a str>) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            logo_name,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) {
        match &el.element {
            LayoutElement::Rect(rect) => self.draw_rect(el, *rect),
            LayoutElement::Text(text) => self.draw_text(el, text),
            LayoutElement::Logo => self.draw_logo(el),
            LayoutElement::PageCountPlaceholder { page_no, .. } => {
                log::warn!("unresolved page-count placeholder for page {}; skipped", page_no);
            }
        }
    }

    fn draw_rect(&mut self, el: &PositionedElement, rect: RectElement) {
        if !rect.fill && !rect.stroke {
            return;
        }
        if rect.fill {
            self.set_fill_color(el.style.fill_color);
        }
        if rect.stroke {
            self.set_stroke_color(el.style.draw_color);
            self.set_line_width(el.style.line_width * MM_TO_PT);
        }

        let x = el.x * MM_TO_PT;
        let y = (self.page_height - el.y - el.height) * MM_TO_PT;
        self.push(
            "re",
            vec![
                x.into(),
                y.into(),
                (el.width * MM_TO_PT).into(),
                (el.height * MM_TO_PT).into(),
            ],
        );
        let paint = match (rect.fill, rect.stroke) {
            (true, true) => "B",
            (true, false) => "f",
            _ => "S",
        };
        self.push(paint, vec![]);
    }

    fn draw_text(&mut self, el: &PositionedElement, text: &TextElement) {
        if text.content.trim().is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.set_font(&el.style);
        self.set_fill_color(el.style.text_color);
        // el.y carries the baseline for text elements.
        let x = el.x * MM_TO_PT;
        let y = (self.page_height - el.y) * MM_TO_PT;
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(encode_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_logo(&mut self, el: &PositionedElement) {
        let Some(name) = self.logo_name else {
            log::warn!("logo element on page but no logo resource embedded; skipped");
            return;
        };
        let x = el.x * MM_TO_PT;
        let y = (self.page_height - el.y - el.height) * MM_TO_PT;
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                (el.width * MM_TO_PT).into(),
                0.into(),
                0.into(),
                (el.height * MM_TO_PT).into(),
                x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }

    fn set_font(&mut self, style: &DrawStyle) {
        let name = font_resource_name(style.font_weight);
        if self.state.font != Some((name, style.font_size)) {
            self.push(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), style.font_size.into()],
            );
            self.state.font = Some((name, style.font_size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", color_operands(color));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.push("RG", color_operands(color));
            self.state.stroke_color = Some(color);
        }
    }

    fn set_line_width(&mut self, width_pt: f32) {
        if self.state.line_width != Some(width_pt) {
            self.push("w", vec![width_pt.into()]);
            self.state.line_width = Some(width_pt);
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }
}

fn color_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}
