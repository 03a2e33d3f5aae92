//! Pixel data and PNG output operations for Canvas.

use super::Canvas;
use crate::error::CanvasResult;
use crate::geometry::CanvasColor;

impl Canvas {
    /// Straight-alpha color of the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<CanvasColor> {
        // tiny-skia indexes linearly, so an x past the row end would wrap
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|p| CanvasColor::from(p.demultiply()))
    }

    /// Whole-canvas RGBA data, 4 bytes per pixel, non-premultiplied.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Encode the canvas as an 8-bit RGBA PNG.
    ///
    /// Output depends only on pixel content, so equal canvases encode to
    /// byte-identical files. No ancillary chunks (pHYs, gAMA, text) are written.
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data();
            writer.write_image_data(&data)?;
        }
        log::debug!(target: "canvas", "toPng {}x{} -> {} bytes", self.width, self.height, buf.len());
        Ok(buf)
    }
}
