//! Header logo loading.
//!
//! The logo is the one external asset a render depends on. It is loaded at
//! `begin_page()` time and a missing or undecodable file aborts the render;
//! a malformed header would silently corrupt every subsequent page.

use crate::LayoutError;
use std::path::Path;

/// A probed JPEG ready for embedding. The raw bytes are passed through to
/// the PDF untouched; only dimensions and color model are decoded here.
#[derive(Clone, Debug)]
pub struct LogoImage {
    pub data: Vec<u8>,
    pub px_width: u32,
    pub px_height: u32,
    pub grayscale: bool,
}

impl LogoImage {
    #[cfg(feature = "logo")]
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        use image::GenericImageView;

        let asset_error = |reason: String| LayoutError::Asset {
            path: path.display().to_string(),
            reason,
        };

        let data = std::fs::read(path).map_err(|e| asset_error(e.to_string()))?;
        let format = image::guess_format(&data).map_err(|e| asset_error(e.to_string()))?;
        if format != image::ImageFormat::Jpeg {
            return Err(asset_error(format!("expected a JPEG, got {:?}", format)));
        }
        let decoded = image::load_from_memory(&data).map_err(|e| asset_error(e.to_string()))?;
        let grayscale = decoded.color().channel_count() < 3;

        Ok(Self {
            data,
            px_width: decoded.width(),
            px_height: decoded.height(),
            grayscale,
        })
    }

    #[cfg(not(feature = "logo"))]
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        Err(LayoutError::Asset {
            path: path.display().to_string(),
            reason: "built without the `logo` feature".into(),
        })
    }

    /// Display height in layout units for a given display width.
    pub fn height_for_width(&self, width: f32) -> f32 {
        width * self.px_height as f32 / self.px_width as f32
    }
}
