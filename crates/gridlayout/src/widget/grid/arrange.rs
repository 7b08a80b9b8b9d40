//! Positioning pass of the grid container.

use gridlayout_render::Rect;

use super::children::Children;
use super::measure::GridMetrics;

/// Row and column of a child that takes space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    /// The cell of the `visible_index`-th laid out child.
    #[inline]
    pub fn of(visible_index: usize, columns: usize) -> Self {
        Self {
            row: visible_index / columns,
            column: visible_index % columns,
        }
    }
}

/// Position every child that takes space from its measured size.
///
/// Strides use each child's own measured size, so children are expected to
/// share one size (the container gives them all the same width).
pub(crate) fn arrange_grid(metrics: &GridMetrics, children: &mut Children) {
    let padding = metrics.padding;
    let mut visible_index = 0;

    children.for_each_mut(|_, _, child| {
        if !child.visibility.takes_space() {
            child.frame = Rect::ZERO;
            return;
        }

        let column = visible_index % metrics.columns;
        let row = visible_index / metrics.columns;
        let size = child.measured;

        let left = column
            .saturating_mul(size.width)
            .saturating_add(metrics.leading_horizontal(column))
            .saturating_add(padding.left);
        let top = row
            .saturating_mul(size.height)
            .saturating_add(metrics.leading_vertical(row))
            .saturating_add(padding.top);
        child.frame = Rect::new(left, top, size.width, size.height);
        visible_index += 1;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::{MeasureSpec, Padding, Visibility};
    use crate::widget::grid::children::ChildView;
    use crate::widget::grid::measure::measure_grid;
    use crate::widget::ColorBlock;
    use gridlayout_render::Color;

    fn setup(count: usize, metrics: &GridMetrics, width: i32) -> Children {
        let mut children = Children::default();
        for _ in 0..count {
            children.push(ChildView::new(
                Box::new(ColorBlock::new(Color::RED, 100, 50)),
                None,
            ));
        }
        measure_grid(
            metrics,
            &mut children,
            MeasureSpec::exactly(width),
            MeasureSpec::unspecified(0),
        );
        children
    }

    fn frames(children: &Children) -> Vec<Rect> {
        children.iter().map(|(_, _, c)| c.frame).collect()
    }

    #[test]
    fn test_cell_of() {
        assert_eq!(Cell::of(0, 3), Cell { row: 0, column: 0 });
        assert_eq!(Cell::of(4, 3), Cell { row: 1, column: 1 });
        assert_eq!(Cell::of(5, 1), Cell { row: 5, column: 0 });
    }

    #[test]
    fn test_two_column_frames() {
        let metrics = GridMetrics {
            columns: 2,
            column_width: 0,
            horizontal_spacing: 10,
            vertical_spacing: 5,
            horizontal_edge: false,
            vertical_edge: false,
            padding: Padding::default(),
        };
        let mut children = setup(3, &metrics, 220);
        arrange_grid(&metrics, &mut children);

        assert_eq!(
            frames(&children),
            vec![
                Rect::from_ltrb(0, 0, 105, 50),
                Rect::from_ltrb(115, 0, 220, 50),
                Rect::from_ltrb(0, 55, 105, 105),
            ]
        );
    }

    #[test]
    fn test_padding_and_edges_offset_frames() {
        let metrics = GridMetrics {
            columns: 2,
            column_width: 0,
            horizontal_spacing: 10,
            vertical_spacing: 10,
            horizontal_edge: true,
            vertical_edge: true,
            padding: Padding::new(3, 4, 3, 4),
        };
        // 226 - 6 padding - 30 spacing = 190, two columns of 95.
        let mut children = setup(2, &metrics, 226);
        arrange_grid(&metrics, &mut children);

        assert_eq!(
            frames(&children),
            vec![
                Rect::from_ltrb(13, 14, 108, 64),
                Rect::from_ltrb(118, 14, 213, 64),
            ]
        );
    }

    #[test]
    fn test_gone_child_consumes_no_cell() {
        let metrics = GridMetrics {
            columns: 2,
            column_width: 0,
            horizontal_spacing: 0,
            vertical_spacing: 0,
            horizontal_edge: false,
            vertical_edge: false,
            padding: Padding::default(),
        };
        let mut children = setup(3, &metrics, 200);
        let first = children.id_at(0).unwrap();
        children.get_mut(first).unwrap().visibility = Visibility::Gone;
        arrange_grid(&metrics, &mut children);

        let laid_out = frames(&children);
        assert_eq!(laid_out[0], Rect::ZERO);
        assert_eq!(laid_out[1], Rect::from_ltrb(0, 0, 100, 50));
        assert_eq!(laid_out[2], Rect::from_ltrb(100, 0, 200, 50));
    }

    #[test]
    fn test_huge_spacing_saturates_frames() {
        let metrics = GridMetrics {
            columns: 3,
            column_width: 0,
            horizontal_spacing: i32::MAX,
            vertical_spacing: i32::MAX,
            horizontal_edge: true,
            vertical_edge: true,
            padding: Padding::default(),
        };
        let mut children = setup(4, &metrics, 100);
        arrange_grid(&metrics, &mut children);

        let laid_out = frames(&children);
        assert_eq!(laid_out.len(), 4);
        assert_eq!(laid_out[2].left(), i32::MAX);
        assert_eq!(laid_out[3].top(), i32::MAX);
        assert!(laid_out.iter().all(|frame| frame.width == 0));
    }
}
