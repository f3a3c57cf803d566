use faktura_types::{Rect, Size};

/// Fixed page geometry for one render. All lengths are millimeters on a
/// top-down y axis; font sizes stay in points throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page: Size,
    pub margin_left: f32,
    pub margin_right: f32,
    /// The decorative frame drawn on every page.
    pub border: Rect,
    pub border_line_width: f32,
    /// y of the first header row.
    pub header_top: f32,
    /// Vertical space consumed by one header row.
    pub header_row_height: f32,
    /// Gap between the last header row and the body resume position.
    pub header_gap: f32,
    /// Footer block top, measured up from the bottom page edge. Body content
    /// never crosses this line; overflow starts a new page instead.
    pub footer_rise: f32,
    /// Page marker row, measured up from the bottom page edge.
    pub marker_rise: f32,
    /// Horizontal inset between a cell edge and its text.
    pub cell_padding: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            page: Size::a4(),
            margin_left: 10.0,
            margin_right: 10.0,
            border: Rect::new(8.0, 8.0, 194.0, 281.0),
            border_line_width: 0.6,
            header_top: 35.0,
            header_row_height: 7.0,
            header_gap: 5.0,
            footer_rise: 30.0,
            marker_rise: 10.0,
            cell_padding: 1.0,
        }
    }
}

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.page.width - self.margin_left - self.margin_right
    }

    pub fn right_edge(&self) -> f32 {
        self.page.width - self.margin_right
    }

    /// y of the footer block; also the body overflow limit.
    pub fn footer_y(&self) -> f32 {
        self.page.height - self.footer_rise
    }

    pub fn marker_y(&self) -> f32 {
        self.page.height - self.marker_rise
    }
}
