//! PDF serialization backend using lopdf.
//!
//! Converts laid-out pages into PDF content streams and serializes the
//! final document: catalog, page tree, WinAnsi Type1 base fonts, an
//! optional logo XObject, cross-reference table and trailer.

mod content;
mod error;
mod renderer;
mod writer;

pub use error::RenderError;
pub use renderer::render_document;
pub use writer::PdfWriter;
