//! Rounded-corner opacity mask for Canvas.

use super::Canvas;
use crate::error::{CanvasError, CanvasResult};

/// Corner radius in pixels for a `width`×`height` canvas rounded by `percent`.
///
/// Computed as `((width + height) / 4) * percent / 100` in integer arithmetic.
/// The radius is not clamped against either side.
pub fn corner_radius(width: u32, height: u32, percent: u8) -> u32 {
    let quarter = (u64::from(width) + u64::from(height)) / 4;
    (quarter * u64::from(percent.min(100)) / 100) as u32
}

impl Canvas {
    /// Make the four corners transparent outside a circular arc.
    ///
    /// An opaque mask the size of the canvas is cleared wherever a pixel of a
    /// `radius`×`radius` corner square lies farther than `radius` from the
    /// square's inner corner, mirrored into all four corners. The canvas is
    /// then composited through the mask, so cleared pixels become fully
    /// transparent and every other pixel keeps its color and alpha.
    ///
    /// Returns the radius used. A zero radius leaves the canvas untouched.
    pub fn round_corners(&mut self, percent: u8) -> CanvasResult<u32> {
        let radius = corner_radius(self.width, self.height, percent);
        log::debug!(target: "canvas", "roundCorners {}% radius={}", percent, radius);
        if radius == 0 {
            return Ok(0);
        }

        let mut mask = tiny_skia::Mask::new(self.width, self.height).ok_or_else(|| {
            CanvasError::MaskError(format!("cannot allocate {}x{} mask", self.width, self.height))
        })?;
        mask.data_mut().fill(u8::MAX);

        let w = i64::from(self.width);
        let h = i64::from(self.height);
        let r = i64::from(radius);
        let stride = self.width as usize;
        let data = mask.data_mut();
        let mut clear = |x: i64, y: i64| {
            if (0..w).contains(&x) && (0..h).contains(&y) {
                data[y as usize * stride + x as usize] = 0;
            }
        };

        // Squares larger than the canvas only add points outside it
        for y in 0..r.min(h) {
            for x in 0..r.min(w) {
                let dx = x - r;
                let dy = y - r;
                if dx * dx + dy * dy > r * r {
                    clear(x, y);
                    clear(w - x - 1, y);
                    clear(x, h - y - 1);
                    clear(w - x - 1, h - y - 1);
                }
            }
        }

        self.pixmap.apply_mask(&mask);
        Ok(radius)
    }
}
