//! Backend-neutral value types shared by the canvas operations.

/// A backend-neutral RGBA color with 8-bit, non-premultiplied components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CanvasColor {
    pub const BLACK: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 255);
    pub const WHITE: CanvasColor = CanvasColor::from_rgba8(255, 255, 255, 255);
    pub const TRANSPARENT: CanvasColor = CanvasColor::from_rgba8(0, 0, 0, 0);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components in RGBA byte order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<CanvasColor> for tiny_skia::Color {
    fn from(c: CanvasColor) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<tiny_skia::ColorU8> for CanvasColor {
    fn from(c: tiny_skia::ColorU8) -> Self {
        CanvasColor::from_rgba8(c.red(), c.green(), c.blue(), c.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tiny_skia_color() {
        let color: tiny_skia::Color = CanvasColor::from_rgba8(0, 0, 255, 255).into();
        assert_eq!(color.to_color_u8().blue(), 255);
        assert_eq!(color.to_color_u8().red(), 0);
        assert_eq!(color.to_color_u8().alpha(), 255);
    }

    #[test]
    fn test_to_array() {
        assert_eq!(CanvasColor::BLACK.to_array(), [0, 0, 0, 255]);
        assert_eq!(CanvasColor::TRANSPARENT.to_array(), [0, 0, 0, 0]);
    }
}
