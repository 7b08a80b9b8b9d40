//! Views and the grid container.
//!
//! - [`geometry`]: measure specs, layout params, visibility and padding
//! - [`View`]: the trait every child implements
//! - [`TextView`] and [`ColorBlock`]: stock views
//! - [`GridView`]: the N-column grid container

pub mod geometry;
mod grid;
mod invalidation;
mod view;
mod views;

pub use geometry::{Dimension, LayoutParams, MeasureMode, MeasureSpec, Padding, Visibility};
pub use grid::{
    Cell, GridView, ItemClick, ItemClickListener, SpacingAxis, SpacingRegion, ViewId,
};
pub use invalidation::Invalidation;
pub use view::{downcast_view, AsAny, View};
pub use views::{ColorBlock, TextView, DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT};
