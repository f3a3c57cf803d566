use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Cell is {0:.2}mm wide but the page content area is only {1:.2}mm.")]
    CellTooWide(f32, f32),
    #[error("Cell is {0:.2}mm tall but a fresh page offers only {1:.2}mm of content height.")]
    CellTooTall(f32, f32),
    #[error("No page is active. Call begin_document() before placing content.")]
    NoPage,
    #[error("Header asset {path}: {reason}")]
    Asset { path: String, reason: String },
}

pub mod chrome;
pub mod config;
pub mod engine;
pub mod logo;
pub mod metrics;
pub mod text;

mod elements;

pub use self::chrome::{FooterColumn, LogoPlacement, PageChrome};
pub use self::config::PageGeometry;
pub use self::elements::{
    DrawStyle, LaidOutDocument, LayoutElement, Page, PositionedElement, RectElement, TextElement,
};
pub use self::engine::{Cell, LayoutEngine, SheetCursor};
pub use self::logo::LogoImage;

// Re-export geometry types used throughout to prevent type mismatches
pub use faktura_types::{Color, FontWeight, MM_TO_PT, Rect, Size, TextAlign};

#[cfg(test)]
mod test_utils;
