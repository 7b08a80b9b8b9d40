//! Measure specs, layout params and padding for view layout.
//!
//! This module provides the types used for layout negotiation between a
//! container and its children. A parent hands each child a [`MeasureSpec`]
//! per axis; the child answers with the size it wants within that constraint.

use serde::{Deserialize, Serialize};

/// How a [`MeasureSpec`] constrains the measured dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The parent has fixed the size; the child must use it.
    Exactly,
    /// The child may be as large as it wants up to the size.
    AtMost,
    /// No constraint; the size is only a hint.
    #[default]
    Unspecified,
}

/// A per-axis measurement constraint passed from parent to child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    /// The constraint mode.
    pub mode: MeasureMode,
    /// The size in pixels; meaningless for [`MeasureMode::Unspecified`]
    /// except as a hint.
    pub size: i32,
}

impl MeasureSpec {
    /// An exact size.
    #[inline]
    pub const fn exactly(size: i32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// An upper bound.
    #[inline]
    pub const fn at_most(size: i32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint, with a size hint.
    #[inline]
    pub const fn unspecified(size: i32) -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size,
        }
    }

    /// Derive the spec for a child from this (parent) spec and the child's
    /// requested dimension.
    ///
    /// An explicit pixel dimension always wins. Otherwise a match-parent
    /// child fills an exact parent, and everything else is bounded by the
    /// parent's size or left unconstrained when the parent is.
    pub fn child_spec(self, dimension: Dimension) -> Self {
        match (dimension, self.mode) {
            (Dimension::Exact(px), _) => Self::exactly(px.max(0)),
            (Dimension::MatchParent, MeasureMode::Exactly) => Self::exactly(self.size.max(0)),
            (Dimension::WrapContent, MeasureMode::Exactly)
            | (_, MeasureMode::AtMost) => Self::at_most(self.size.max(0)),
            (_, MeasureMode::Unspecified) => Self::unspecified(0),
        }
    }

    /// Resolve a desired size against this constraint.
    #[inline]
    pub fn resolve(self, desired: i32) -> i32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// A child's requested size along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// As large as the parent allows.
    MatchParent,
    /// Just large enough for the content.
    WrapContent,
    /// A fixed number of pixels.
    Exact(i32),
}

/// Per-child layout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

impl LayoutParams {
    /// Create layout params from both dimensions.
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

impl Default for LayoutParams {
    /// Fill the cell horizontally, wrap the content vertically.
    fn default() -> Self {
        Self::new(Dimension::MatchParent, Dimension::WrapContent)
    }
}

/// Whether a child is drawn and whether it takes part in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Laid out and drawn.
    #[default]
    Visible,
    /// Laid out (keeps its cell) but not drawn.
    Invisible,
    /// Skipped entirely; consumes no cell.
    Gone,
}

impl Visibility {
    /// Whether the child takes part in measurement and layout.
    #[inline]
    pub fn takes_space(self) -> bool {
        !matches!(self, Self::Gone)
    }

    /// Whether the child is painted.
    #[inline]
    pub fn is_drawn(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Inner spacing between a container's edges and its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    /// Create padding from the four sides.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on all sides.
    pub const fn uniform(padding: i32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Same horizontal and same vertical padding.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal padding (left + right).
    #[inline]
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding (top + bottom).
    #[inline]
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Whether any side is negative.
    #[inline]
    pub fn has_negative(&self) -> bool {
        self.left < 0 || self.top < 0 || self.right < 0 || self.bottom < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_spec_exact_dimension_wins() {
        let parent = MeasureSpec::unspecified(0);
        assert_eq!(parent.child_spec(Dimension::Exact(40)), MeasureSpec::exactly(40));
        assert_eq!(
            MeasureSpec::at_most(10).child_spec(Dimension::Exact(40)),
            MeasureSpec::exactly(40)
        );
    }

    #[test]
    fn test_child_spec_from_exact_parent() {
        let parent = MeasureSpec::exactly(105);
        assert_eq!(parent.child_spec(Dimension::MatchParent), MeasureSpec::exactly(105));
        assert_eq!(parent.child_spec(Dimension::WrapContent), MeasureSpec::at_most(105));
    }

    #[test]
    fn test_child_spec_from_at_most_and_unspecified() {
        let at_most = MeasureSpec::at_most(80);
        assert_eq!(at_most.child_spec(Dimension::MatchParent), MeasureSpec::at_most(80));
        assert_eq!(at_most.child_spec(Dimension::WrapContent), MeasureSpec::at_most(80));

        let free = MeasureSpec::unspecified(500);
        assert_eq!(free.child_spec(Dimension::MatchParent), MeasureSpec::unspecified(0));
        assert_eq!(free.child_spec(Dimension::WrapContent), MeasureSpec::unspecified(0));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::exactly(50).resolve(100), 50);
        assert_eq!(MeasureSpec::at_most(50).resolve(100), 50);
        assert_eq!(MeasureSpec::at_most(50).resolve(20), 20);
        assert_eq!(MeasureSpec::unspecified(0).resolve(100), 100);
    }

    #[test]
    fn test_default_layout_params() {
        let params = LayoutParams::default();
        assert_eq!(params.width, Dimension::MatchParent);
        assert_eq!(params.height, Dimension::WrapContent);
    }

    #[test]
    fn test_visibility_flags() {
        assert!(Visibility::Invisible.takes_space());
        assert!(!Visibility::Invisible.is_drawn());
        assert!(!Visibility::Gone.takes_space());
    }

    #[test]
    fn test_padding() {
        let padding = Padding::new(1, 2, 3, 4);
        assert_eq!(padding.horizontal(), 4);
        assert_eq!(padding.vertical(), 6);
        assert!(!padding.has_negative());
        assert!(Padding::symmetric(-1, 0).has_negative());
        assert_eq!(Padding::uniform(5), Padding::new(5, 5, 5, 5));
    }
}
