//! Per-render page decoration context.
//!
//! `PageChrome` is handed to the engine at construction and read back on
//! every `begin_page`/`end_page`. It is never mutated during a render, so
//! header and footer content is identical on every page of a document.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Immutable decoration content repeated on every page: the two-column
/// header block, the multi-column footer block, and the page marker words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageChrome {
    /// Static sender address lines, left header column.
    pub sender_lines: Vec<String>,
    /// Label/value metadata rows, right header column.
    pub meta_rows: Vec<(String, String)>,
    /// Footer text columns, each at an explicit x position.
    pub footer_columns: Vec<FooterColumn>,
    /// First word of the "page X of N" marker.
    pub page_word: String,
    /// Joining word of the "page X of N" marker.
    pub of_word: String,
    /// Optional header logo.
    pub logo: Option<LogoPlacement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterColumn {
    pub x: f32,
    pub width: f32,
    pub text: String,
}

impl FooterColumn {
    pub fn new(x: f32, width: f32, text: impl Into<String>) -> Self {
        Self { x, width, text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoPlacement {
    pub path: PathBuf,
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl LogoPlacement {
    /// Logo across the top right quarter of the page.
    pub fn top_right(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), x: 100.0, y: 10.0, width: 100.0 }
    }
}
