//! Label rendering operations for Canvas.

use super::Canvas;
use crate::error::{CanvasError, CanvasResult};
use crate::geometry::CanvasColor;
use crate::text::{measure_buffer, shape_label, LabelFace, LabelMetrics};
use cosmic_text::{Buffer, Command};
use tiny_skia::Transform;

impl Canvas {
    /// Measure `text` at `size_px` with the baseline at the origin.
    pub fn measure_label(&mut self, text: &str, size_px: f32) -> CanvasResult<LabelMetrics> {
        let buffer = self.shape(text, size_px)?;
        Ok(measure_buffer(&buffer, size_px))
    }

    /// Fill `text` with its baseline origin at `(x, y)`.
    ///
    /// Glyphs are drawn as vector outlines; anything outside the canvas is
    /// clipped. Nothing is drawn when the label face does not cover the text.
    pub fn fill_label(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size_px: f32,
        color: CanvasColor,
    ) -> CanvasResult<()> {
        log::debug!(target: "canvas", "fillLabel \"{}\" {} {} size={}", text, x, y, size_px);
        let buffer = self.shape(text, size_px)?;

        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(color.into());

        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((x, y), 1.0);

                // Floating-point glyph position for sub-pixel precision
                let glyph_x = x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    // Whitespace glyphs have no outline
                    continue;
                };

                // Font outlines have Y pointing up, screen has Y pointing down
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        tiny_skia::FillRule::Winding,
                        Transform::from_translate(glyph_x, glyph_y),
                        None,
                    );
                }
            }
        }
        Ok(())
    }

    fn shape(&mut self, text: &str, size_px: f32) -> CanvasResult<Buffer> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CanvasError::TextError(format!(
                "invalid font size {}",
                size_px
            )));
        }
        let family = self
            .label_family
            .clone()
            .ok_or_else(|| CanvasError::TextError("no label face loaded".to_string()))?;
        let face = LabelFace {
            family: &family,
            weight: self.label_weight,
        };
        shape_label(&mut self.font_system, &face, text, size_px)
    }
}
