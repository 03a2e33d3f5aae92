//! Label shaping and measurement using cosmic-text.

use crate::error::{CanvasError, CanvasResult};
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Pixel extent of a shaped label, measured with the baseline at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelMetrics {
    /// Advance width of the glyph run, rounded up.
    pub width: u32,
    /// Distance from the baseline to the top of the line box, rounded up.
    pub height: u32,
}

/// Face selection used when shaping a label.
pub(crate) struct LabelFace<'a> {
    pub family: &'a str,
    pub weight: fontdb::Weight,
}

/// Shape `text` as a single line with the given face.
///
/// Fails when the font system has no faces or when any glyph of the text is
/// not covered by the face (shaped to glyph 0).
pub(crate) fn shape_label(
    font_system: &mut FontSystem,
    face: &LabelFace<'_>,
    text: &str,
    size_px: f32,
) -> CanvasResult<Buffer> {
    if font_system.db().faces().next().is_none() {
        return Err(CanvasError::TextError("no font faces available".to_string()));
    }

    let metrics = Metrics::new(size_px, size_px);
    let mut buffer = Buffer::new(font_system, metrics);

    // Unhinted outlines keep glyph positions sub-pixel exact
    let attrs = Attrs::new()
        .family(Family::Name(face.family))
        .weight(face.weight)
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut glyph_count = 0usize;
    for run in buffer.layout_runs() {
        for glyph in run.glyphs.iter() {
            if glyph.glyph_id == 0 {
                return Err(CanvasError::TextError(format!(
                    "missing glyph for {:?} in \"{}\"",
                    &text[glyph.start..glyph.end],
                    face.family
                )));
            }
            glyph_count += 1;
        }
    }
    if glyph_count == 0 && !text.is_empty() {
        return Err(CanvasError::TextError(format!(
            "text \"{}\" produced no glyphs",
            text
        )));
    }

    Ok(buffer)
}

/// Measure a shaped buffer.
pub(crate) fn measure_buffer(buffer: &Buffer, size_px: f32) -> LabelMetrics {
    let mut width: f32 = 0.0;
    let mut ascent: f32 = 0.0;
    let mut has_runs = false;
    for run in buffer.layout_runs() {
        has_runs = true;
        width = width.max(run.line_w);
        ascent = ascent.max(run.line_y - run.line_top);
    }
    if !has_runs {
        return LabelMetrics::default();
    }
    if ascent == 0.0 {
        // Approximation used when the face reports no vertical metrics
        ascent = size_px * 0.8;
    }

    LabelMetrics {
        width: width.max(0.0).ceil() as u32,
        height: ascent.max(0.0).ceil() as u32,
    }
}
