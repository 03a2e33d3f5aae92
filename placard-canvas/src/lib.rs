//! Raster canvas for placeholder images using tiny-skia and cosmic-text.
//!
//! This crate paints the pieces of a placeholder image without any HTTP or
//! request handling. It uses:
//! - `tiny-skia` for the pixel buffer and compositing
//! - `cosmic-text` for shaping the size label and producing glyph outlines
//! - `fontdb` for holding the single bundled typeface
//!
//! # Example
//!
//! ```rust,ignore
//! use placard_canvas::{Canvas, CanvasColor, FontConfig};
//!
//! let fonts = FontConfig::default().resolve()?;
//! let mut canvas = Canvas::new(200, 100, &fonts)?;
//! canvas.fill_background(CanvasColor::from_rgba8(0, 0, 255, 255));
//! canvas.round_corners(25)?;
//! canvas.fill_label("200 X 100", 40.0, 60.0, 10.0, CanvasColor::BLACK)?;
//! let png_data = canvas.to_png()?;
//! ```

mod context;
mod error;
mod font_config;
mod geometry;
mod text;

// Re-export public API
pub use context::{corner_radius, Canvas, MAX_DIMENSION};
pub use error::{CanvasError, CanvasResult};
pub use font_config::{FontConfig, ResolvedFontConfig, DEFAULT_FONT_PATH};
pub use geometry::CanvasColor;
pub use text::LabelMetrics;
