/// Conversion factor between layout units (millimeters) and PDF points.
///
/// Layout happens in millimeters on a top-down y axis; the render backend
/// multiplies by this factor and flips y into PDF user space.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// ISO A4 in millimeters.
    pub fn a4() -> Self {
        Self { width: 210.0, height: 297.0 }
    }
}
