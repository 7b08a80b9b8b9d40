//! The drawing surface abstraction.
//!
//! Widgets paint through the object-safe [`Canvas`] trait so the same draw
//! code can target a real backend or the recording [`DisplayList`].
//!
//! # Example
//!
//! ```
//! use gridlayout_render::{Canvas, Color, DisplayList, Paint, Rect};
//!
//! let mut list = DisplayList::new();
//! list.fill_rect(Rect::new(0, 0, 10, 10), &Paint::fill(Color::RED));
//! assert_eq!(list.len(), 1);
//! ```

use crate::paint::Paint;
use crate::types::{Color, Point, Rect};

/// A 2D drawing surface.
pub trait Canvas {
    /// Fill a rectangle with the specified paint.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, color: Color);
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, paint: Paint },
    /// A text run.
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
}

impl DrawCommand {
    /// The rectangle of a fill command.
    pub fn fill_rect(&self) -> Option<Rect> {
        match self {
            Self::FillRect { rect, .. } => Some(*rect),
            Self::Text { .. } => None,
        }
    }
}

/// A canvas that records every command in submission order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rectangles of recorded fills painted with `color`, in order.
    pub fn fills_with_color(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, paint } if paint.color == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replay the recorded commands onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, paint } => target.fill_rect(*rect, paint),
                DrawCommand::Text {
                    origin,
                    text,
                    color,
                } => target.draw_text(*origin, text, *color),
            }
        }
    }
}

impl Canvas for DisplayList {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        tracing::trace!(target: "gridlayout_render::canvas", ?rect, "record fill_rect");
        self.commands.push(DrawCommand::FillRect {
            rect,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            color,
        });
    }
}
