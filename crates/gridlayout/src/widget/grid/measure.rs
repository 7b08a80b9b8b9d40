//! Measurement pass of the grid container.

use gridlayout_core::logging::targets;
use gridlayout_render::Size;

use super::children::Children;
use crate::widget::geometry::{LayoutParams, MeasureMode, MeasureSpec, Padding};

/// Snapshot of the layout parameters used by one measure/layout/paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridMetrics {
    pub(crate) columns: i32,
    pub(crate) column_width: i32,
    pub(crate) horizontal_spacing: i32,
    pub(crate) vertical_spacing: i32,
    pub(crate) horizontal_edge: bool,
    pub(crate) vertical_edge: bool,
    pub(crate) padding: Padding,
}

impl GridMetrics {
    /// Sum of all horizontal gaps in one row.
    pub(crate) fn horizontal_total_spacing(&self) -> i32 {
        let gaps = if self.horizontal_edge {
            self.columns.saturating_add(1)
        } else {
            self.columns - 1
        };
        gaps.saturating_mul(self.horizontal_spacing)
    }

    /// Spacing to the left of `column`, excluding padding.
    pub(crate) fn leading_horizontal(&self, column: i32) -> i32 {
        let edge = if self.horizontal_edge {
            self.horizontal_spacing
        } else {
            0
        };
        column.saturating_mul(self.horizontal_spacing).saturating_add(edge)
    }

    /// Spacing above `row`, excluding padding.
    pub(crate) fn leading_vertical(&self, row: i32) -> i32 {
        let edge = if self.vertical_edge {
            self.vertical_spacing
        } else {
            0
        };
        row.saturating_mul(self.vertical_spacing).saturating_add(edge)
    }

    /// Width handed to each child, padding already removed from `width`.
    pub(crate) fn child_width(&self, width: i32) -> i32 {
        (width.saturating_sub(self.horizontal_total_spacing()) / self.columns).max(0)
    }
}

/// Measure the grid and every child that takes space.
///
/// Returns the resolved container size. With no children at all the result
/// is zero regardless of the specs.
pub(crate) fn measure_grid(
    metrics: &GridMetrics,
    children: &mut Children,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size {
    if children.is_empty() {
        return Size::ZERO;
    }

    let padding = metrics.padding;
    let mut width = width_spec.size;
    if width_spec.mode == MeasureMode::Unspecified {
        if metrics.column_width > 0 {
            width = metrics
                .column_width
                .saturating_mul(metrics.columns)
                .saturating_add(metrics.horizontal_total_spacing());
        }
        width = width.saturating_add(padding.horizontal());
    }
    // Padding wider than the offered space leaves nothing for the columns.
    width = width.saturating_sub(padding.horizontal()).max(0);

    let child_width_spec = MeasureSpec::exactly(metrics.child_width(width));
    let child_height_spec = MeasureSpec::unspecified(0);

    // Only the last measured child's height is used as the row height.
    let mut row_height = 0;
    let mut laid_out = 0;
    children.for_each_mut(|_, _, child| {
        if !child.visibility.takes_space() {
            return;
        }
        let params = *child.layout_params.get_or_insert_with(LayoutParams::default);
        child.measured = child.view.measure(
            child_width_spec.child_spec(params.width),
            child_height_spec.child_spec(params.height),
        );
        row_height = child.measured.height;
        laid_out += 1;
    });

    let height = match height_spec.mode {
        MeasureMode::Exactly => height_spec.size,
        MeasureMode::AtMost | MeasureMode::Unspecified => {
            stacked_height(metrics, laid_out, row_height, height_spec)
        }
    };

    tracing::trace!(
        target: targets::GRID,
        width,
        height,
        row_height,
        laid_out,
        "measured grid"
    );
    Size::new(width, height)
}

fn stacked_height(metrics: &GridMetrics, count: i32, row_height: i32, height_spec: MeasureSpec) -> i32 {
    let spacing = metrics.vertical_spacing;
    let mut size = metrics.padding.vertical();
    if metrics.vertical_edge {
        size = size.saturating_add(spacing);
    }

    let mut first_in_row = 0;
    while first_in_row < count {
        size = size.saturating_add(row_height);
        let last_row = count - first_in_row <= metrics.columns;
        if !last_row || metrics.vertical_edge {
            size = size.saturating_add(spacing);
        }

        if height_spec.mode == MeasureMode::AtMost && size >= height_spec.size {
            size = height_spec.size;
            break;
        }
        first_in_row = first_in_row.saturating_add(metrics.columns);
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::{Dimension, Visibility};
    use crate::widget::grid::children::ChildView;
    use crate::widget::ColorBlock;
    use gridlayout_render::Color;

    fn metrics(columns: i32, horizontal: i32, vertical: i32) -> GridMetrics {
        GridMetrics {
            columns,
            column_width: 0,
            horizontal_spacing: horizontal,
            vertical_spacing: vertical,
            horizontal_edge: false,
            vertical_edge: false,
            padding: Padding::default(),
        }
    }

    fn blocks(count: usize, width: i32, height: i32) -> Children {
        let mut children = Children::default();
        for _ in 0..count {
            children.push(ChildView::new(
                Box::new(ColorBlock::new(Color::RED, width, height)),
                None,
            ));
        }
        children
    }

    #[test]
    fn test_no_children_is_zero() {
        let mut children = Children::default();
        let m = metrics(3, 10, 10);
        for spec in [
            MeasureSpec::exactly(300),
            MeasureSpec::at_most(300),
            MeasureSpec::unspecified(300),
        ] {
            assert_eq!(measure_grid(&m, &mut children, spec, spec), Size::ZERO);
        }
    }

    #[test]
    fn test_two_column_scenario() {
        let mut children = blocks(3, 100, 50);
        let size = measure_grid(
            &metrics(2, 10, 5),
            &mut children,
            MeasureSpec::exactly(220),
            MeasureSpec::at_most(9999),
        );
        assert_eq!(size, Size::new(220, 105));
        for (_, _, child) in children.iter() {
            assert_eq!(child.measured, Size::new(105, 50));
            assert_eq!(child.layout_params, Some(LayoutParams::default()));
        }
    }

    #[test]
    fn test_integer_division_drops_remainder() {
        let mut children = blocks(3, 10, 10);
        measure_grid(
            &metrics(3, 0, 0),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        let (_, _, first) = children.iter().next().unwrap();
        assert_eq!(first.measured.width, 33);
    }

    #[test]
    fn test_edge_spacing_totals() {
        let mut m = metrics(3, 10, 0);
        assert_eq!(m.horizontal_total_spacing(), 20);
        m.horizontal_edge = true;
        assert_eq!(m.horizontal_total_spacing(), 40);
        assert_eq!(m.leading_horizontal(0), 10);
        assert_eq!(m.leading_horizontal(2), 30);
    }

    #[test]
    fn test_vertical_edge_spacing_height() {
        let mut m = metrics(2, 0, 5);
        m.vertical_edge = true;
        let mut children = blocks(3, 10, 20);
        let size = measure_grid(
            &m,
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        // 5 + 20 + 5 + 20 + 5
        assert_eq!(size.height, 55);
    }

    #[test]
    fn test_at_most_clamps() {
        let mut children = blocks(6, 10, 50);
        let size = measure_grid(
            &metrics(1, 0, 10),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::at_most(120),
        );
        assert_eq!(size.height, 120);
    }

    #[test]
    fn test_exact_height_is_kept() {
        let mut children = blocks(6, 10, 50);
        let size = measure_grid(
            &metrics(2, 0, 10),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::exactly(42),
        );
        assert_eq!(size.height, 42);
    }

    #[test]
    fn test_unspecified_width_uses_column_width() {
        let mut m = metrics(3, 10, 0);
        m.column_width = 40;
        m.padding = Padding::new(5, 0, 7, 0);
        let mut children = blocks(3, 10, 10);
        let size = measure_grid(
            &m,
            &mut children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
        );
        // 40 * 3 + 2 * 10, padding added then removed again.
        assert_eq!(size.width, 140);
        let (_, _, first) = children.iter().next().unwrap();
        assert_eq!(first.measured.width, 40);
    }

    #[test]
    fn test_unspecified_width_without_override_clamps_child_width() {
        let mut children = blocks(2, 10, 10);
        let size = measure_grid(
            &metrics(2, 10, 0),
            &mut children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size.width, 0);
        let (_, _, first) = children.iter().next().unwrap();
        assert_eq!(first.measured.width, 0);
    }

    #[test]
    fn test_gone_children_skipped() {
        let mut children = blocks(3, 10, 30);
        let gone = children.id_at(2).unwrap();
        children.get_mut(gone).unwrap().visibility = Visibility::Gone;

        let size = measure_grid(
            &metrics(2, 0, 0),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size.height, 30);
        assert_eq!(children.get(gone).unwrap().layout_params, None);
    }

    #[test]
    fn test_last_child_height_is_row_height() {
        let mut children = Children::default();
        children.push(ChildView::new(Box::new(ColorBlock::new(Color::RED, 10, 80)), None));
        children.push(ChildView::new(Box::new(ColorBlock::new(Color::RED, 10, 20)), None));

        let size = measure_grid(
            &metrics(1, 0, 0),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size.height, 40);
    }

    #[test]
    fn test_explicit_child_params() {
        let mut children = Children::default();
        let params = LayoutParams::new(Dimension::Exact(30), Dimension::Exact(12));
        children.push(ChildView::new(
            Box::new(ColorBlock::new(Color::RED, 10, 80).with_layout_params(params)),
            None,
        ));

        measure_grid(
            &metrics(1, 0, 0),
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        let (_, _, child) = children.iter().next().unwrap();
        assert_eq!(child.measured, Size::new(30, 12));
    }

    #[test]
    fn test_padding_wider_than_spec_measures_zero_width() {
        let mut m = metrics(2, 0, 0);
        m.padding = Padding::new(20, 0, 20, 0);
        let mut children = blocks(2, 10, 10);
        let size = measure_grid(
            &m,
            &mut children,
            MeasureSpec::exactly(10),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size.width, 0);
        let (_, _, first) = children.iter().next().unwrap();
        assert_eq!(first.measured.width, 0);
    }

    #[test]
    fn test_huge_column_width_saturates() {
        let mut m = metrics(3, 10, 0);
        m.column_width = 1_000_000_000;
        let mut children = blocks(3, 10, 10);
        let size = measure_grid(
            &m,
            &mut children,
            MeasureSpec::unspecified(0),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size.width, i32::MAX);
    }

    #[test]
    fn test_huge_spacing_saturates() {
        let m = metrics(3, i32::MAX, i32::MAX);
        assert_eq!(m.horizontal_total_spacing(), i32::MAX);
        assert_eq!(m.leading_horizontal(2), i32::MAX);
        assert_eq!(m.leading_vertical(5), i32::MAX);
        assert_eq!(m.child_width(100), 0);

        let mut children = blocks(7, 10, 10);
        let size = measure_grid(
            &m,
            &mut children,
            MeasureSpec::exactly(100),
            MeasureSpec::unspecified(0),
        );
        assert_eq!(size, Size::new(100, i32::MAX));
    }
}
