//! Named background colors accepted by `/generate`.

use placard_canvas::CanvasColor;
use std::fmt;

/// One of the fixed background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteColor {
    #[default]
    Grey,
    Blue,
    Green,
    White,
    Black,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Grey,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::White,
        PaletteColor::Black,
    ];

    /// Exact, case-sensitive lookup. Unknown names resolve to grey.
    pub fn resolve(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == name)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Grey => "grey",
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::White => "white",
            PaletteColor::Black => "black",
        }
    }

    pub fn rgba(self) -> CanvasColor {
        match self {
            PaletteColor::Grey => CanvasColor::from_rgba8(128, 128, 128, 255),
            PaletteColor::Blue => CanvasColor::from_rgba8(0, 0, 255, 255),
            PaletteColor::Green => CanvasColor::from_rgba8(0, 128, 0, 255),
            PaletteColor::White => CanvasColor::from_rgba8(255, 255, 255, 255),
            PaletteColor::Black => CanvasColor::from_rgba8(0, 0, 0, 255),
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
