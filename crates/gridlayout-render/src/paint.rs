//! Paint styles for filling shapes.

use crate::types::Color;

/// How a shape is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    /// Fill the interior.
    #[default]
    Fill,
    /// Outline only.
    Stroke,
}

/// Paint state used for a draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Solid fill color.
    pub color: Color,
    /// Smooth shape edges.
    pub anti_alias: bool,
    /// Dither gradients and translucent fills.
    pub dither: bool,
    /// Fill or stroke.
    pub style: PaintStyle,
}

impl Paint {
    /// Create a solid fill paint with anti-aliasing and dithering enabled.
    #[inline]
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            anti_alias: true,
            dither: true,
            style: PaintStyle::Fill,
        }
    }

    /// Return a copy with a different color.
    #[inline]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::fill(color)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::fill(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_paint_defaults() {
        let paint = Paint::fill(Color::RED);
        assert!(paint.anti_alias);
        assert!(paint.dither);
        assert_eq!(paint.style, PaintStyle::Fill);
        assert_eq!(paint.with_color(Color::BLUE).color, Color::BLUE);
    }
}
