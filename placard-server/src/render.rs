//! The render pipeline behind `/generate`.

use crate::params::RenderRequest;
use base64::Engine as _;
use placard_canvas::{Canvas, CanvasColor, CanvasResult, ResolvedFontConfig};
use std::sync::Arc;

/// Color of the size label, independent of the background.
pub const LABEL_COLOR: CanvasColor = CanvasColor::BLACK;

/// What to do when the size label cannot be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// Log the failure and return the image without a label.
    #[default]
    BestEffort,
    /// Fail the render.
    Strict,
}

/// Renders placeholder images against a shared, read-only font configuration.
#[derive(Clone)]
pub struct Renderer {
    fonts: Arc<ResolvedFontConfig>,
    label_policy: LabelPolicy,
}

impl Renderer {
    pub fn new(fonts: Arc<ResolvedFontConfig>) -> Self {
        Self {
            fonts,
            label_policy: LabelPolicy::default(),
        }
    }

    pub fn with_label_policy(mut self, label_policy: LabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }

    pub fn label_policy(&self) -> LabelPolicy {
        self.label_policy
    }

    /// Paint the canvas for `request`: background, rounded corners, label.
    pub fn render_canvas(&self, request: &RenderRequest) -> CanvasResult<Canvas> {
        let mut canvas = Canvas::new(request.width, request.height, &self.fonts)?;
        canvas.fill_background(request.color.rgba());
        canvas.round_corners(request.round_percent)?;

        match draw_label(&mut canvas, &request.label()) {
            Ok(()) => {}
            Err(err) if self.label_policy == LabelPolicy::BestEffort => {
                tracing::warn!(error = %err, "size label skipped");
            }
            Err(err) => return Err(err),
        }
        Ok(canvas)
    }

    /// Render `request` to PNG bytes.
    pub fn render_png(&self, request: &RenderRequest) -> CanvasResult<Vec<u8>> {
        self.render_canvas(request)?.to_png()
    }

    /// Render `request` to a base64 (standard alphabet, padded) PNG.
    pub fn render_base64(&self, request: &RenderRequest) -> CanvasResult<String> {
        let png_data = self.render_png(request)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(png_data))
    }
}

/// Center `text` horizontally at a size of one tenth of the canvas height.
///
/// The baseline sits on the vertical midpoint, so the glyphs occupy the band
/// just above `height / 2`. A single-line label has no vertical advance, so
/// only the measured width feeds into the placement.
fn draw_label(canvas: &mut Canvas, text: &str) -> CanvasResult<()> {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    let font_size = height as f32 / 10.0;

    let metrics = canvas.measure_label(text, font_size)?;
    let x = (width - i64::from(metrics.width)) / 2;
    let y = height / 2;

    canvas.fill_label(text, x as f32, y as f32, font_size, LABEL_COLOR)
}
