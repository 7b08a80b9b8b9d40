//! Spacing-region computation and painting for the grid container.
//!
//! Regions are derived from the laid-out child frames, so a layout pass must
//! have run before painting.

use gridlayout_render::{Canvas, Color, Paint, Point, Rect};

use super::children::Children;
use super::measure::GridMetrics;

/// Which spacing a region fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingAxis {
    /// A gap beside a child, filled with the horizontal spacing color.
    Horizontal,
    /// A band above or below a row, filled with the vertical spacing color.
    Vertical,
}

/// A colored gap between or around children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacingRegion {
    pub axis: SpacingAxis,
    pub rect: Rect,
}

impl SpacingRegion {
    fn horizontal(rect: Rect) -> Self {
        Self {
            axis: SpacingAxis::Horizontal,
            rect,
        }
    }

    fn vertical(rect: Rect) -> Self {
        Self {
            axis: SpacingAxis::Vertical,
            rect,
        }
    }
}

/// Per-child facts shared by both spacing passes.
struct Placed {
    frame: Rect,
    row: i32,
    column: i32,
    last_column: bool,
    /// Last child of the container by raw position, whatever its visibility.
    last_child: bool,
}

fn placed_children(metrics: &GridMetrics, children: &Children) -> Vec<Placed> {
    let raw_count = children.len();
    let mut visible_index = 0;
    let mut placed = Vec::with_capacity(raw_count);

    for (position, _, child) in children.iter() {
        if !child.visibility.takes_space() {
            continue;
        }
        let column = visible_index % metrics.columns;
        placed.push(Placed {
            frame: child.frame,
            row: visible_index / metrics.columns,
            column,
            last_column: column == metrics.columns - 1,
            last_child: position + 1 == raw_count,
        });
        visible_index += 1;
    }
    placed
}

/// Compute every spacing region in paint order: horizontal regions first,
/// then vertical bands.
pub(crate) fn spacing_regions(metrics: &GridMetrics, children: &Children) -> Vec<SpacingRegion> {
    let placed = placed_children(metrics, children);
    let mut regions = Vec::new();

    let hs = metrics.horizontal_spacing;
    if hs > 0 {
        for child in &placed {
            let frame = child.frame;
            if child.column != 0 || metrics.horizontal_edge {
                regions.push(SpacingRegion::horizontal(Rect::from_ltrb(
                    frame.left().saturating_sub(hs),
                    frame.top(),
                    frame.left(),
                    frame.bottom(),
                )));
            }

            if !child.last_column && !child.last_child {
                continue;
            }
            // The last-column rule wins over the last-child rule.
            let trailing = if child.last_column {
                metrics.horizontal_edge
            } else {
                true
            };
            if trailing {
                regions.push(SpacingRegion::horizontal(Rect::from_ltrb(
                    frame.right(),
                    frame.top(),
                    frame.right().saturating_add(hs),
                    frame.bottom(),
                )));
            }
        }
    }

    let vs = metrics.vertical_spacing;
    if vs > 0 {
        let max_right = placed
            .iter()
            .map(|child| child.frame.right())
            .max()
            .unwrap_or(0);
        let extra = if metrics.horizontal_edge { hs } else { 0 };
        // Bands start at the content edge, leaving the left padding unpainted.
        let left = metrics.padding.left;

        for child in &placed {
            if !child.last_column && !child.last_child {
                continue;
            }
            let frame = child.frame;
            let row_end = if child.last_column {
                frame.right()
            } else {
                max_right
            };
            let right = row_end.saturating_add(extra);

            if child.row != 0 || metrics.vertical_edge {
                regions.push(SpacingRegion::vertical(Rect::from_ltrb(
                    left,
                    frame.top().saturating_sub(vs),
                    right,
                    frame.top(),
                )));
            }
            if child.last_child && metrics.vertical_edge {
                regions.push(SpacingRegion::vertical(Rect::from_ltrb(
                    left,
                    frame.bottom(),
                    right,
                    frame.bottom().saturating_add(vs),
                )));
            }
        }
    }

    regions
}

/// Colors used for one paint pass.
pub(crate) struct GridColors {
    pub(crate) background: Option<Color>,
    pub(crate) horizontal: Color,
    pub(crate) vertical: Color,
}

/// Paint background, spacing regions and children, offset by `origin`.
pub(crate) fn paint_grid(
    metrics: &GridMetrics,
    children: &Children,
    colors: &GridColors,
    bounds: Rect,
    canvas: &mut dyn Canvas,
) {
    let origin = Point::new(bounds.x, bounds.y);
    if let Some(background) = colors.background {
        canvas.fill_rect(bounds, &Paint::fill(background));
    }

    let horizontal = Paint::fill(colors.horizontal);
    let vertical = Paint::fill(colors.vertical);
    for region in spacing_regions(metrics, children) {
        let paint = match region.axis {
            SpacingAxis::Horizontal => &horizontal,
            SpacingAxis::Vertical => &vertical,
        };
        canvas.fill_rect(region.rect.offset(origin.x, origin.y), paint);
    }

    for (_, _, child) in children.iter() {
        if child.visibility.is_drawn() {
            child
                .view
                .draw(canvas, child.frame.offset(origin.x, origin.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::geometry::{MeasureSpec, Padding, Visibility};
    use crate::widget::grid::arrange::arrange_grid;
    use crate::widget::grid::children::ChildView;
    use crate::widget::grid::measure::measure_grid;
    use crate::widget::ColorBlock;
    use gridlayout_render::DisplayList;

    fn metrics(columns: i32, hs: i32, vs: i32, edge_h: bool, edge_v: bool) -> GridMetrics {
        GridMetrics {
            columns,
            column_width: 0,
            horizontal_spacing: hs,
            vertical_spacing: vs,
            horizontal_edge: edge_h,
            vertical_edge: edge_v,
            padding: Padding::default(),
        }
    }

    fn laid_out(metrics: &GridMetrics, count: usize, width: i32) -> Children {
        let mut children = Children::default();
        for _ in 0..count {
            children.push(ChildView::new(
                Box::new(ColorBlock::new(Color::GREEN, 100, 50)),
                None,
            ));
        }
        measure_grid(
            metrics,
            &mut children,
            MeasureSpec::exactly(width),
            MeasureSpec::unspecified(0),
        );
        arrange_grid(metrics, &mut children);
        children
    }

    fn of_axis(regions: &[SpacingRegion], axis: SpacingAxis) -> Vec<Rect> {
        regions
            .iter()
            .filter(|r| r.axis == axis)
            .map(|r| r.rect)
            .collect()
    }

    #[test]
    fn test_three_columns_without_edges() {
        let m = metrics(3, 10, 0, false, false);
        let children = laid_out(&m, 3, 320);
        let regions = spacing_regions(&m, &children);

        assert_eq!(
            of_axis(&regions, SpacingAxis::Horizontal),
            vec![Rect::new(100, 0, 10, 50), Rect::new(210, 0, 10, 50)]
        );
        assert!(of_axis(&regions, SpacingAxis::Vertical).is_empty());
    }

    #[test]
    fn test_three_columns_with_edges() {
        let m = metrics(3, 10, 0, true, false);
        let children = laid_out(&m, 3, 340);
        let regions = spacing_regions(&m, &children);

        assert_eq!(
            of_axis(&regions, SpacingAxis::Horizontal),
            vec![
                Rect::new(0, 0, 10, 50),
                Rect::new(110, 0, 10, 50),
                Rect::new(220, 0, 10, 50),
                Rect::new(330, 0, 10, 50),
            ]
        );
    }

    #[test]
    fn test_last_child_in_partial_row_gets_trailing_gap() {
        let m = metrics(3, 10, 0, false, false);
        let children = laid_out(&m, 4, 320);
        let regions = of_axis(&spacing_regions(&m, &children), SpacingAxis::Horizontal);

        // Two gaps in the full row, then a trailing gap after the lone child.
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[2], Rect::new(100, 50, 10, 50));
    }

    #[test]
    fn test_vertical_bands() {
        let m = metrics(2, 10, 5, false, false);
        let children = laid_out(&m, 3, 220);
        let regions = of_axis(&spacing_regions(&m, &children), SpacingAxis::Vertical);

        // Band above the second row spans to the widest row end.
        assert_eq!(regions, vec![Rect::from_ltrb(0, 50, 220, 55)]);
    }

    #[test]
    fn test_vertical_edge_bands() {
        let m = metrics(2, 10, 5, true, true);
        // 250 - 30 spacing = 220, two columns of 110.
        let children = laid_out(&m, 3, 250);
        let regions = of_axis(&spacing_regions(&m, &children), SpacingAxis::Vertical);

        assert_eq!(
            regions,
            vec![
                Rect::from_ltrb(0, 0, 250, 5),
                Rect::from_ltrb(0, 55, 250, 60),
                Rect::from_ltrb(0, 110, 250, 115),
            ]
        );
    }

    #[test]
    fn test_vertical_bands_start_at_left_padding() {
        let mut m = metrics(2, 10, 5, false, true);
        m.padding = Padding::new(8, 3, 8, 3);
        // 226 - 16 padding - 10 spacing = 200, two columns of 100.
        let children = laid_out(&m, 2, 226);
        let regions = of_axis(&spacing_regions(&m, &children), SpacingAxis::Vertical);

        assert_eq!(
            regions,
            vec![Rect::from_ltrb(8, 3, 218, 8), Rect::from_ltrb(8, 58, 218, 63)]
        );
    }

    #[test]
    fn test_huge_spacing_regions_saturate() {
        let m = metrics(2, i32::MAX, i32::MAX, true, true);
        let children = laid_out(&m, 3, 100);
        let regions = spacing_regions(&m, &children);

        assert!(!regions.is_empty());
        assert!(regions.iter().all(|r| r.rect.width >= 0 && r.rect.height >= 0));
    }

    #[test]
    fn test_zero_spacing_paints_nothing() {
        let m = metrics(2, 0, 0, true, true);
        let children = laid_out(&m, 4, 200);
        assert!(spacing_regions(&m, &children).is_empty());
    }

    #[test]
    fn test_paint_order() {
        let m = metrics(2, 10, 5, false, false);
        let mut children = laid_out(&m, 3, 220);
        let hidden = children.id_at(1).unwrap();
        children.get_mut(hidden).unwrap().visibility = Visibility::Invisible;

        let colors = GridColors {
            background: Some(Color::WHITE),
            horizontal: Color::RED,
            vertical: Color::BLUE,
        };
        let mut list = DisplayList::new();
        paint_grid(&m, &children, &colors, Rect::new(0, 0, 220, 105), &mut list);

        let order: Vec<Color> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                gridlayout_render::DrawCommand::FillRect { paint, .. } => Some(paint.color),
                _ => None,
            })
            .collect();
        assert_eq!(
            order,
            vec![
                Color::WHITE,
                Color::RED,
                Color::RED,
                Color::BLUE,
                Color::GREEN,
                Color::GREEN,
            ]
        );
    }

    #[test]
    fn test_paint_offsets_by_bounds_origin() {
        let m = metrics(1, 0, 0, false, false);
        let children = laid_out(&m, 1, 100);
        let colors = GridColors {
            background: None,
            horizontal: Color::TRANSPARENT,
            vertical: Color::TRANSPARENT,
        };
        let mut list = DisplayList::new();
        paint_grid(&m, &children, &colors, Rect::new(7, 9, 100, 50), &mut list);
        assert_eq!(list.fills_with_color(Color::GREEN), vec![Rect::new(7, 9, 100, 50)]);
    }
}
