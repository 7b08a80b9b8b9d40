//! Prelude module for gridlayout.
//!
//! ```
//! use gridlayout::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::{ConnectionGuard, ConnectionId, Property, Signal};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::GridConfig;
pub use crate::error::{GridError, Result};

// ============================================================================
// Data Adapters
// ============================================================================

pub use crate::model::{Adapter, ItemAdapter, ListAdapter};

// ============================================================================
// Views and the Grid Container
// ============================================================================

pub use crate::widget::{
    Cell, ColorBlock, Dimension, GridView, ItemClick, LayoutParams, MeasureMode, MeasureSpec,
    Padding, SpacingAxis, SpacingRegion, TextView, View, ViewId, Visibility,
};

// ============================================================================
// Geometry and Painting
// ============================================================================

pub use crate::render::{Canvas, Color, DisplayList, Paint, Point, Rect, Size};
