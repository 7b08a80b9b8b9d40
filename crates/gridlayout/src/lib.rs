//! gridlayout - a non-scrolling N-column grid container fed by a data adapter.
//!
//! The container ([`GridView`]) lays its children out row by row into a fixed
//! number of equal-width columns and paints the gaps between them. Children
//! come from an [`Adapter`](model::Adapter); the grid rebuilds them whenever
//! the adapter reports a change.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gridlayout::prelude::*;
//!
//! let config = GridConfig::new()
//!     .with_columns(3)
//!     .with_spacing(4, 4)
//!     .with_spacing_colors(Color::LIGHT_GRAY, Color::LIGHT_GRAY);
//! let grid = GridView::with_config(&config)?;
//!
//! let adapter = Arc::new(ListAdapter::with_text_views(vec![1, 2, 3, 4]));
//! grid.set_adapter(adapter)?;
//!
//! grid.perform_layout(MeasureSpec::exactly(308), MeasureSpec::unspecified(0));
//! let mut canvas = DisplayList::new();
//! grid.draw(&mut canvas);
//! assert!(!canvas.is_empty());
//! # Ok::<(), GridError>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod widget;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use widget::GridView;

pub use gridlayout_core::*;

/// Geometry, color and canvas types.
pub mod render {
    pub use gridlayout_render::*;
}
