//! Query parameter parsing for `/generate`.
//!
//! Parsing never fails: anything malformed degrades to a default so that
//! every request yields an image.
//!
//! # Limits
//!
//! Each side of `size` must lie in `1..=`[`MAX_SIDE`] (8192). A larger side,
//! like any other malformed `size`, makes the whole request fall back to
//! [`FALLBACK_DIMENSIONS`] (200×200) instead of failing, so `size=9000*10`
//! returns a 200×200 image. The cap bounds a single render to 256 MiB of RGBA.

use crate::palette::PaletteColor;
use std::num::IntErrorKind;

pub const DEFAULT_SIZE: &str = "200*200";
pub const DEFAULT_ROUND: &str = "0";
pub const DEFAULT_COLOR: &str = "grey";

/// Width and height used whenever `size` cannot be parsed.
pub const FALLBACK_DIMENSIONS: (u32, u32) = (200, 200);

/// Largest accepted width or height. See the module-level limits.
pub const MAX_SIDE: u32 = 8192;

/// A fully resolved render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    /// Corner rounding in percent, always within `0..=100`.
    pub round_percent: u8,
    pub color: PaletteColor,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self::from_query(None, None, None)
    }
}

impl RenderRequest {
    /// Resolve raw query values. Missing and empty values take their defaults.
    pub fn from_query(size: Option<&str>, round: Option<&str>, color: Option<&str>) -> Self {
        let size = non_empty(size).unwrap_or(DEFAULT_SIZE);
        let round = non_empty(round).unwrap_or(DEFAULT_ROUND);
        let color = non_empty(color).unwrap_or(DEFAULT_COLOR);

        let (width, height) = parse_size(size);
        Self {
            width,
            height,
            round_percent: parse_round(round),
            color: PaletteColor::resolve(color),
        }
    }

    /// Resolve from decoded query pairs. The first occurrence of a key wins.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut size = None;
        let mut round = None;
        let mut color = None;
        for (key, value) in pairs {
            let slot = match key {
                "size" => &mut size,
                "round" => &mut round,
                "color" => &mut color,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        Self::from_query(size, round, color)
    }

    /// The size label drawn on the image.
    pub fn label(&self) -> String {
        format!("{} X {}", self.width, self.height)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse `"<width>*<height>"`.
///
/// Falls back to 200×200 unless there are exactly two `*`-separated parts and
/// both are integers in `1..=MAX_SIDE`.
pub fn parse_size(size: &str) -> (u32, u32) {
    let mut parts = size.split('*');
    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return FALLBACK_DIMENSIONS;
    };
    match (parse_side(width), parse_side(height)) {
        (Some(width), Some(height)) => (width, height),
        _ => FALLBACK_DIMENSIONS,
    }
}

fn parse_side(side: &str) -> Option<u32> {
    side.parse::<u32>()
        .ok()
        .filter(|v| (1..=MAX_SIDE).contains(v))
}

/// Parse the corner rounding percent and clamp it to `0..=100`.
///
/// Integers too large in magnitude saturate toward the matching bound; any
/// other unparsable value is treated as 0.
pub fn parse_round(round: &str) -> u8 {
    let value = match round.parse::<i64>() {
        Ok(value) => value,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            _ => 0,
        },
    };
    value.clamp(0, 100) as u8
}
