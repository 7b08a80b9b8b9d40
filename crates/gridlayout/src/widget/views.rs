//! Stock views: [`TextView`] and [`ColorBlock`].

use gridlayout_render::{Canvas, Color, Paint, Point, Rect, Size};

use super::geometry::{LayoutParams, MeasureSpec, Padding};
use super::view::View;

/// Default glyph advance in pixels.
pub const DEFAULT_CHAR_WIDTH: i32 = 8;
/// Default line height in pixels.
pub const DEFAULT_LINE_HEIGHT: i32 = 16;

/// A single-style text label with fixed glyph metrics.
///
/// Text wraps at character boundaries when the width constraint is narrower
/// than the unwrapped text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    text: String,
    text_color: Color,
    background: Option<Color>,
    padding: Padding,
    char_width: i32,
    line_height: i32,
    layout_params: Option<LayoutParams>,
}

impl TextView {
    /// Create a text view with default metrics.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_color: Color::BLACK,
            background: None,
            padding: Padding::default(),
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            layout_params: None,
        }
    }

    /// Set the text color (builder pattern).
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set a background fill (builder pattern).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set inner padding (builder pattern).
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Override the glyph metrics (builder pattern). Values below 1 are raised to 1.
    pub fn with_metrics(mut self, char_width: i32, line_height: i32) -> Self {
        self.char_width = char_width.max(1);
        self.line_height = line_height.max(1);
        self
    }

    /// Request specific layout params from the container (builder pattern).
    pub fn with_layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = Some(params);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, used when a recycled view is rebound.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    fn char_count(&self) -> i32 {
        i32::try_from(self.text.chars().count()).unwrap_or(i32::MAX)
    }

    /// Characters that fit on one line for a given outer width.
    fn chars_per_line(&self, width: i32) -> i32 {
        (width.saturating_sub(self.padding.horizontal()) / self.char_width).max(1)
    }

    fn line_count(&self, width: i32) -> i32 {
        let chars = self.char_count();
        if chars == 0 {
            return 1;
        }
        let per_line = self.chars_per_line(width);
        chars.saturating_add(per_line - 1) / per_line
    }
}

impl View for TextView {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let desired_width = self
            .char_count()
            .saturating_mul(self.char_width)
            .saturating_add(self.padding.horizontal());
        let width = width_spec.resolve(desired_width);
        let desired_height = self
            .line_count(width)
            .saturating_mul(self.line_height)
            .saturating_add(self.padding.vertical());
        Size::new(width, height_spec.resolve(desired_height))
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        if let Some(background) = self.background {
            canvas.fill_rect(bounds, &Paint::fill(background));
        }

        let per_line = usize::try_from(self.chars_per_line(bounds.width)).unwrap_or(1);
        let chars: Vec<char> = self.text.chars().collect();
        let origin_x = bounds.x.saturating_add(self.padding.left);
        let mut y = bounds.y.saturating_add(self.padding.top);

        for line in chars.chunks(per_line) {
            if y >= bounds.bottom() {
                break;
            }
            let line: String = line.iter().collect();
            canvas.draw_text(Point::new(origin_x, y), &line, self.text_color);
            y = y.saturating_add(self.line_height);
        }
    }

    fn layout_params(&self) -> Option<LayoutParams> {
        self.layout_params
    }

    fn describe(&self) -> String {
        format!("TextView {:?}", self.text)
    }
}

/// A solid block of color with an intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBlock {
    color: Color,
    intrinsic: Size,
    layout_params: Option<LayoutParams>,
}

impl ColorBlock {
    /// Create a block that prefers `width x height` pixels.
    pub fn new(color: Color, width: i32, height: i32) -> Self {
        Self {
            color,
            intrinsic: Size::new(width, height),
            layout_params: None,
        }
    }

    /// Request specific layout params from the container (builder pattern).
    pub fn with_layout_params(mut self, params: LayoutParams) -> Self {
        self.layout_params = Some(params);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn intrinsic_size(&self) -> Size {
        self.intrinsic
    }
}

impl View for ColorBlock {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        Size::new(
            width_spec.resolve(self.intrinsic.width),
            height_spec.resolve(self.intrinsic.height),
        )
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        canvas.fill_rect(bounds, &Paint::fill(self.color));
    }

    fn layout_params(&self) -> Option<LayoutParams> {
        self.layout_params
    }

    fn describe(&self) -> String {
        format!("ColorBlock {}", self.color)
    }
}
