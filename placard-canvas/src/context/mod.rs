//! Placeholder canvas implementation.

mod image_ops;
mod mask;
mod text_rendering;

pub use mask::corner_radius;

use crate::error::{CanvasError, CanvasResult};
use crate::font_config::ResolvedFontConfig;
use crate::geometry::CanvasColor;
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::Pixmap;

/// Maximum canvas dimension (same as Chrome).
pub const MAX_DIMENSION: u32 = 32767;

/// A width×height RGBA pixel grid owned by a single render.
pub struct Canvas {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pub(crate) pixmap: Pixmap,
    /// Font system for label rendering.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph outlines.
    pub(crate) swash_cache: SwashCache,
    /// Family of the label face, if one is loaded.
    pub(crate) label_family: Option<String>,
    pub(crate) label_weight: fontdb::Weight,
}

impl Canvas {
    /// Create a fully transparent canvas using a pre-resolved font configuration.
    ///
    /// The font database is cloned from `fonts`; no file is read here.
    pub fn new(width: u32, height: u32, fonts: &ResolvedFontConfig) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), fonts.fontdb.clone());

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            label_family: fonts.family.clone(),
            label_weight: fonts.weight,
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paint every pixel with `color`, replacing whatever was there.
    pub fn fill_background(&mut self, color: CanvasColor) {
        log::debug!(target: "canvas", "fillBackground {:?}", color);
        self.pixmap.fill(color.into());
    }
}
