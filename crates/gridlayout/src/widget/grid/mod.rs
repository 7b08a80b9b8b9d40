//! Non-scrolling N-column grid container.
//!
//! [`GridView`] arranges its children row by row into a fixed number of
//! columns, with configurable spacing between (and optionally around) the
//! cells. The spacing gaps can be filled with a color per axis.
//!
//! Children usually come from an [`Adapter`]: the grid subscribes to the
//! adapter's change signal and rebuilds every child whenever the data
//! changes. Each rebuilt child remembers its adapter position so clicks can
//! be reported as `(view, index)` pairs.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gridlayout::prelude::*;
//!
//! let adapter = Arc::new(ListAdapter::with_text_views(vec!["a", "b", "c"]));
//!
//! let grid = GridView::new();
//! grid.set_column_count(2).unwrap();
//! grid.set_horizontal_spacing(10).unwrap();
//! grid.set_adapter(adapter.clone()).unwrap();
//!
//! let size = grid.perform_layout(MeasureSpec::exactly(220), MeasureSpec::at_most(1000));
//! assert_eq!(size.width, 220);
//! assert_eq!(grid.child_count(), 3);
//!
//! adapter.append("d");
//! assert_eq!(grid.child_count(), 4);
//! ```
//!
//! # Layout protocol
//!
//! The grid does not run layout on its own. Changes mark it dirty and emit
//! [`GridView::layout_requested`]; the host then calls
//! [`GridView::perform_layout`] (measure followed by layout) and
//! [`GridView::draw`].

mod arrange;
mod children;
mod measure;
mod paint;

pub use arrange::Cell;
pub use children::ViewId;
pub use paint::{SpacingAxis, SpacingRegion};

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use gridlayout_core::logging::{span_names, targets};
use gridlayout_core::{ConnectionGuard, DebugNode, PerfSpan, Property, Signal, TreeFormatter};
use gridlayout_render::{Canvas, Color, Point, Rect, Size};

use super::geometry::{LayoutParams, MeasureSpec, Padding, Visibility};
use super::invalidation::Invalidation;
use super::view::View;
use crate::config::{self, GridConfig};
use crate::error::{GridError, Result};
use crate::model::Adapter;
use children::{ChildView, Children};
use measure::GridMetrics;
use paint::GridColors;

/// A click on an adapter-backed child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemClick {
    /// The clicked child.
    pub view: ViewId,
    /// The child's adapter position at the time it was built.
    pub index: usize,
}

/// Callback invoked for item clicks.
pub type ItemClickListener = Arc<dyn Fn(&ItemClick) + Send + Sync>;

struct AdapterBinding {
    adapter: Arc<dyn Adapter>,
    /// `None` while detached.
    connection: Option<ConnectionGuard<()>>,
}

struct GridShared {
    column_count: Property<usize>,
    column_width: Property<i32>,
    horizontal_spacing: Property<i32>,
    vertical_spacing: Property<i32>,
    horizontal_spacing_color: Property<Color>,
    vertical_spacing_color: Property<Color>,
    horizontal_edge_spacing: Property<bool>,
    vertical_edge_spacing: Property<bool>,
    padding: Property<Padding>,
    background: Property<Option<Color>>,

    children: Mutex<Children>,
    measured_size: Mutex<Size>,
    adapter: Mutex<Option<AdapterBinding>>,
    click_listener: RwLock<Option<ItemClickListener>>,
    invalidation: Mutex<Invalidation>,

    layout_requested: Signal<()>,
    children_rebuilt: Signal<usize>,
}

/// A grid container handle.
///
/// Cloning a `GridView` yields another handle to the same grid.
#[derive(Clone)]
pub struct GridView {
    shared: Arc<GridShared>,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// Create an empty grid with default parameters (one column, no spacing).
    pub fn new() -> Self {
        Self::build(&GridConfig::default())
    }

    /// Create a grid from a configuration.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidConfiguration`] if the configuration does not validate.
    pub fn with_config(config: &GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &GridConfig) -> Self {
        Self {
            shared: Arc::new(GridShared {
                column_count: Property::new(config.column_count),
                column_width: Property::new(config.column_width),
                horizontal_spacing: Property::new(config.horizontal_spacing),
                vertical_spacing: Property::new(config.vertical_spacing),
                horizontal_spacing_color: Property::new(config.horizontal_spacing_color),
                vertical_spacing_color: Property::new(config.vertical_spacing_color),
                horizontal_edge_spacing: Property::new(config.horizontal_edge_spacing),
                vertical_edge_spacing: Property::new(config.vertical_edge_spacing),
                padding: Property::new(config.padding),
                background: Property::new(config.background),
                children: Mutex::new(Children::default()),
                measured_size: Mutex::new(Size::ZERO),
                adapter: Mutex::new(None),
                click_listener: RwLock::new(None),
                invalidation: Mutex::new(Invalidation::new()),
                layout_requested: Signal::new(),
                children_rebuilt: Signal::new(),
            }),
        }
    }

    /// Snapshot of the current layout parameters.
    pub fn config(&self) -> GridConfig {
        let s = &self.shared;
        GridConfig {
            column_count: s.column_count.get(),
            column_width: s.column_width.get(),
            horizontal_spacing: s.horizontal_spacing.get(),
            vertical_spacing: s.vertical_spacing.get(),
            horizontal_spacing_color: s.horizontal_spacing_color.get(),
            vertical_spacing_color: s.vertical_spacing_color.get(),
            horizontal_edge_spacing: s.horizontal_edge_spacing.get(),
            vertical_edge_spacing: s.vertical_edge_spacing.get(),
            background: s.background.get(),
            padding: s.padding.get(),
        }
    }

    /// Apply every parameter of `config`, requesting at most one layout.
    ///
    /// Nothing is changed if the configuration does not validate.
    pub fn apply_config(&self, config: &GridConfig) -> Result<()> {
        config.validate()?;
        self.batch_updates(|grid| {
            grid.set_column_count(config.column_count)?;
            grid.set_column_width(config.column_width)?;
            grid.set_horizontal_spacing(config.horizontal_spacing)?;
            grid.set_vertical_spacing(config.vertical_spacing)?;
            grid.set_horizontal_spacing_color(config.horizontal_spacing_color);
            grid.set_vertical_spacing_color(config.vertical_spacing_color);
            grid.set_horizontal_edge_spacing_enabled(config.horizontal_edge_spacing);
            grid.set_vertical_edge_spacing_enabled(config.vertical_edge_spacing);
            grid.set_padding(config.padding)?;
            grid.set_background(config.background);
            Ok(())
        })
    }

    /// Run `f` with layout requests deferred, then emit at most one.
    pub fn batch_updates<R>(&self, f: impl FnOnce(&GridView) -> R) -> R {
        self.shared.invalidation.lock().suspend();
        let result = f(self);
        let flushed = self.shared.invalidation.lock().resume();
        if flushed {
            self.notify_layout_requested();
        }
        result
    }

    // =========================================================================
    // Layout parameters
    // =========================================================================

    pub fn column_count(&self) -> usize {
        self.shared.column_count.get()
    }

    /// Set the number of columns.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidConfiguration`] when `column_count` is 0.
    pub fn set_column_count(&self, column_count: usize) -> Result<()> {
        config::validate_column_count(column_count)?;
        if self.shared.column_count.set(column_count) {
            self.request_layout_if_necessary();
        }
        Ok(())
    }

    /// Column width used when the width spec is unspecified; 0 means unset.
    pub fn column_width(&self) -> i32 {
        self.shared.column_width.get()
    }

    pub fn set_column_width(&self, column_width: i32) -> Result<()> {
        config::validate_non_negative("column_width", column_width)?;
        if self.shared.column_width.set(column_width) {
            self.request_layout_if_necessary();
        }
        Ok(())
    }

    pub fn horizontal_spacing(&self) -> i32 {
        self.shared.horizontal_spacing.get()
    }

    pub fn set_horizontal_spacing(&self, spacing: i32) -> Result<()> {
        config::validate_non_negative("horizontal_spacing", spacing)?;
        if self.shared.horizontal_spacing.set(spacing) {
            self.request_layout_if_necessary();
        }
        Ok(())
    }

    pub fn vertical_spacing(&self) -> i32 {
        self.shared.vertical_spacing.get()
    }

    pub fn set_vertical_spacing(&self, spacing: i32) -> Result<()> {
        config::validate_non_negative("vertical_spacing", spacing)?;
        if self.shared.vertical_spacing.set(spacing) {
            self.request_layout_if_necessary();
        }
        Ok(())
    }

    pub fn horizontal_spacing_color(&self) -> Color {
        self.shared.horizontal_spacing_color.get()
    }

    pub fn set_horizontal_spacing_color(&self, color: Color) {
        if self.shared.horizontal_spacing_color.set(color) {
            self.request_layout_if_necessary();
        }
    }

    pub fn vertical_spacing_color(&self) -> Color {
        self.shared.vertical_spacing_color.get()
    }

    pub fn set_vertical_spacing_color(&self, color: Color) {
        if self.shared.vertical_spacing_color.set(color) {
            self.request_layout_if_necessary();
        }
    }

    pub fn is_horizontal_edge_spacing_enabled(&self) -> bool {
        self.shared.horizontal_edge_spacing.get()
    }

    /// Also place horizontal spacing before the first and after the last column.
    pub fn set_horizontal_edge_spacing_enabled(&self, enabled: bool) {
        if self.shared.horizontal_edge_spacing.set(enabled) {
            self.request_layout_if_necessary();
        }
    }

    pub fn is_vertical_edge_spacing_enabled(&self) -> bool {
        self.shared.vertical_edge_spacing.get()
    }

    /// Also place vertical spacing above the first and below the last row.
    pub fn set_vertical_edge_spacing_enabled(&self, enabled: bool) {
        if self.shared.vertical_edge_spacing.set(enabled) {
            self.request_layout_if_necessary();
        }
    }

    pub fn padding(&self) -> Padding {
        self.shared.padding.get()
    }

    pub fn set_padding(&self, padding: Padding) -> Result<()> {
        config::validate_padding(padding)?;
        if self.shared.padding.set(padding) {
            self.request_layout_if_necessary();
        }
        Ok(())
    }

    pub fn background(&self) -> Option<Color> {
        self.shared.background.get()
    }

    pub fn set_background(&self, background: Option<Color>) {
        if self.shared.background.set(background) {
            self.request_layout_if_necessary();
        }
    }

    fn metrics(&self) -> GridMetrics {
        let s = &self.shared;
        GridMetrics {
            columns: i32::try_from(s.column_count.get()).unwrap_or(i32::MAX),
            column_width: s.column_width.get(),
            horizontal_spacing: s.horizontal_spacing.get(),
            vertical_spacing: s.vertical_spacing.get(),
            horizontal_edge: s.horizontal_edge_spacing.get(),
            vertical_edge: s.vertical_edge_spacing.get(),
            padding: s.padding.get(),
        }
    }

    // =========================================================================
    // Adapter binding
    // =========================================================================

    /// The bound adapter, if any.
    pub fn adapter(&self) -> Option<Arc<dyn Adapter>> {
        self.shared
            .adapter
            .lock()
            .as_ref()
            .map(|binding| binding.adapter.clone())
    }

    /// Bind an adapter and rebuild the children from it.
    ///
    /// The previous adapter (if any) is unsubscribed first. Children added
    /// with [`add_view`](Self::add_view) are discarded.
    ///
    /// # Errors
    ///
    /// Propagates the adapter's error if a view cannot be built; the binding
    /// stays in place and the previous children are kept.
    pub fn set_adapter(&self, adapter: Arc<dyn Adapter>) -> Result<()> {
        let previous = self.shared.adapter.lock().take();
        drop(previous);

        let connection = self.subscribe(&adapter);
        *self.shared.adapter.lock() = Some(AdapterBinding {
            adapter,
            connection: Some(connection),
        });
        tracing::debug!(target: targets::GRID, "adapter bound");
        self.rebuild()
    }

    /// Unbind the adapter and remove all children.
    pub fn remove_adapter(&self) -> Option<Arc<dyn Adapter>> {
        let previous = self.shared.adapter.lock().take();
        let adapter = previous.map(|binding| binding.adapter);
        if adapter.is_some() {
            tracing::debug!(target: targets::GRID, "adapter removed");
            self.remove_all_views();
        }
        adapter
    }

    /// Stop listening to the adapter without unbinding it.
    ///
    /// Adapter changes made while detached are not reflected until the next
    /// change after [`attach`](Self::attach).
    pub fn detach(&self) {
        let connection = self
            .shared
            .adapter
            .lock()
            .as_mut()
            .and_then(|binding| binding.connection.take());
        drop(connection);
    }

    /// Resume listening to the bound adapter after [`detach`](Self::detach).
    pub fn attach(&self) {
        let mut slot = self.shared.adapter.lock();
        if let Some(binding) = slot.as_mut()
            && binding.connection.is_none()
        {
            binding.connection = Some(self.subscribe(&binding.adapter));
        }
    }

    /// Whether the grid currently listens to an adapter.
    pub fn is_attached(&self) -> bool {
        self.shared
            .adapter
            .lock()
            .as_ref()
            .is_some_and(|binding| binding.connection.is_some())
    }

    fn subscribe(&self, adapter: &Arc<dyn Adapter>) -> ConnectionGuard<()> {
        let weak: Weak<GridShared> = Arc::downgrade(&self.shared);
        adapter.signals().changed.connect_scoped(move |_| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            if let Err(err) = (GridView { shared }).rebuild() {
                tracing::warn!(target: targets::GRID, %err, "rebuild after adapter change failed");
            }
        })
    }

    /// Discard all children and create one per adapter position.
    fn rebuild(&self) -> Result<()> {
        let _perf = PerfSpan::new(span_names::REBUILD);

        let mut fresh = Vec::new();
        if let Some(adapter) = self.adapter() {
            let count = adapter.count();
            fresh.reserve(count);
            for index in 0..count {
                fresh.push(adapter.view_for(index, None)?);
            }
        }

        let count = fresh.len();
        let discarded = {
            let mut children = self.shared.children.lock();
            let discarded = children.take_all();
            for (index, view) in fresh.into_iter().enumerate() {
                children.push(ChildView::new(view, Some(index)));
            }
            discarded
        };
        drop(discarded);

        tracing::debug!(target: targets::GRID, count, "children rebuilt from adapter");
        self.shared.children_rebuilt.emit(count);
        self.request_layout();
        Ok(())
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Add a child that is not backed by an adapter.
    ///
    /// Such children never produce item clicks and are discarded on the next
    /// adapter rebuild.
    pub fn add_view(&self, view: Box<dyn View>) -> ViewId {
        let id = self.shared.children.lock().push(ChildView::new(view, None));
        self.request_layout();
        id
    }

    /// Remove a child, returning its view.
    pub fn remove_view(&self, id: ViewId) -> Result<Box<dyn View>> {
        let child = self
            .shared
            .children
            .lock()
            .remove(id)
            .ok_or(GridError::UnknownChild)?;
        self.request_layout();
        Ok(child.view)
    }

    /// Remove every child.
    pub fn remove_all_views(&self) {
        let discarded = self.shared.children.lock().take_all();
        drop(discarded);
        self.request_layout();
    }

    /// Number of children of any visibility.
    pub fn child_count(&self) -> usize {
        self.shared.children.lock().len()
    }

    /// Child ids in insertion order.
    pub fn child_ids(&self) -> Vec<ViewId> {
        self.shared.children.lock().ids().to_vec()
    }

    /// Id of the child at `position` in insertion order.
    pub fn child_at(&self, position: usize) -> Result<ViewId> {
        let children = self.shared.children.lock();
        children
            .id_at(position)
            .ok_or_else(|| GridError::out_of_range(position, children.len()))
    }

    fn with_child_state<R>(&self, id: ViewId, f: impl FnOnce(&ChildView) -> R) -> Result<R> {
        let children = self.shared.children.lock();
        children.get(id).map(f).ok_or(GridError::UnknownChild)
    }

    /// The child's frame from the last layout pass, in grid coordinates.
    pub fn child_frame(&self, id: ViewId) -> Result<Rect> {
        self.with_child_state(id, |child| child.frame)
    }

    /// Frames of all children that take space, in order.
    pub fn child_frames(&self) -> Vec<Rect> {
        self.shared
            .children
            .lock()
            .iter()
            .filter(|(_, _, child)| child.visibility.takes_space())
            .map(|(_, _, child)| child.frame)
            .collect()
    }

    pub fn child_measured_size(&self, id: ViewId) -> Result<Size> {
        self.with_child_state(id, |child| child.measured)
    }

    pub fn child_visibility(&self, id: ViewId) -> Result<Visibility> {
        self.with_child_state(id, |child| child.visibility)
    }

    /// Change a child's visibility.
    ///
    /// Toggling [`Visibility::Gone`] requests a layout; switching between
    /// visible and invisible only needs a repaint.
    pub fn set_child_visibility(&self, id: ViewId, visibility: Visibility) -> Result<()> {
        let previous = {
            let mut children = self.shared.children.lock();
            let child = children.get_mut(id).ok_or(GridError::UnknownChild)?;
            std::mem::replace(&mut child.visibility, visibility)
        };
        if previous.takes_space() != visibility.takes_space() {
            self.request_layout();
        } else if previous != visibility {
            self.shared.invalidation.lock().request_repaint();
        }
        Ok(())
    }

    /// Layout params attached to the child, if any have been attached yet.
    pub fn child_layout_params(&self, id: ViewId) -> Result<Option<LayoutParams>> {
        self.with_child_state(id, |child| child.layout_params)
    }

    pub fn set_child_layout_params(&self, id: ViewId, params: LayoutParams) -> Result<()> {
        {
            let mut children = self.shared.children.lock();
            let child = children.get_mut(id).ok_or(GridError::UnknownChild)?;
            child.layout_params = Some(params);
        }
        self.request_layout();
        Ok(())
    }

    /// The adapter position the child was built for.
    pub fn child_click_index(&self, id: ViewId) -> Result<Option<usize>> {
        self.with_child_state(id, |child| child.click_index)
    }

    /// Row and column of the child, or `None` when it is gone.
    pub fn child_cell(&self, id: ViewId) -> Result<Option<Cell>> {
        let columns = self.column_count();
        let children = self.shared.children.lock();
        let child = children.get(id).ok_or(GridError::UnknownChild)?;
        if !child.visibility.takes_space() {
            return Ok(None);
        }
        let visible_index = children
            .iter()
            .take_while(|(_, other, _)| *other != id)
            .filter(|(_, _, other)| other.visibility.takes_space())
            .count();
        Ok(Some(Cell::of(visible_index, columns)))
    }

    /// Borrow a child's view.
    ///
    /// The grid is locked while `f` runs; do not call back into the grid.
    pub fn with_child<R>(&self, id: ViewId, f: impl FnOnce(&dyn View) -> R) -> Result<R> {
        self.with_child_state(id, |child| f(child.view.as_ref()))
    }

    /// Mutably borrow a child's view and request a layout afterwards.
    ///
    /// The grid is locked while `f` runs; do not call back into the grid.
    pub fn with_child_mut<R>(&self, id: ViewId, f: impl FnOnce(&mut dyn View) -> R) -> Result<R> {
        let result = {
            let mut children = self.shared.children.lock();
            let child = children.get_mut(id).ok_or(GridError::UnknownChild)?;
            f(child.view.as_mut())
        };
        self.request_layout();
        Ok(result)
    }

    // =========================================================================
    // Invalidation
    // =========================================================================

    /// Emitted whenever a new measure/layout pass is requested.
    pub fn layout_requested(&self) -> &Signal<()> {
        &self.shared.layout_requested
    }

    /// Emitted after every adapter rebuild with the new child count.
    pub fn children_rebuilt(&self) -> &Signal<usize> {
        &self.shared.children_rebuilt
    }

    /// Snapshot of the pending invalidation state.
    pub fn invalidation(&self) -> Invalidation {
        self.shared.invalidation.lock().clone()
    }

    /// Request a layout, but only when there is something to lay out.
    fn request_layout_if_necessary(&self) {
        let has_children = !self.shared.children.lock().is_empty();
        if has_children {
            self.request_layout();
        }
    }

    fn request_layout(&self) {
        let recorded = self.shared.invalidation.lock().request_layout();
        if recorded {
            self.notify_layout_requested();
        }
    }

    fn notify_layout_requested(&self) {
        tracing::debug!(target: targets::GRID, "layout requested");
        self.shared.layout_requested.emit(());
    }

    // =========================================================================
    // Measure, layout, paint
    // =========================================================================

    /// Measure the grid and its children.
    #[tracing::instrument(skip(self), target = "gridlayout::grid", level = "trace")]
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let metrics = self.metrics();
        let size = measure::measure_grid(
            &metrics,
            &mut self.shared.children.lock(),
            width_spec,
            height_spec,
        );
        *self.shared.measured_size.lock() = size;
        size
    }

    /// Size from the last measure pass.
    pub fn measured_size(&self) -> Size {
        *self.shared.measured_size.lock()
    }

    /// Position the children from their measured sizes.
    #[tracing::instrument(skip_all, target = "gridlayout::grid", level = "trace")]
    pub fn layout(&self) {
        let metrics = self.metrics();
        arrange::arrange_grid(&metrics, &mut self.shared.children.lock());
        self.shared.invalidation.lock().layout_done();
    }

    /// Measure then lay out; returns the measured size.
    pub fn perform_layout(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let _perf = PerfSpan::new(span_names::LAYOUT);
        let size = self.measure(width_spec, height_spec);
        self.layout();
        size
    }

    /// Spacing regions for the current layout, in paint order.
    pub fn spacing_regions(&self) -> Vec<SpacingRegion> {
        let metrics = self.metrics();
        paint::spacing_regions(&metrics, &self.shared.children.lock())
    }

    /// Paint the grid at the origin using its measured size.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let bounds = Rect::from_origin_size(Point::ZERO, self.measured_size());
        self.draw_in(canvas, bounds);
    }

    #[tracing::instrument(skip_all, target = "gridlayout::grid", level = "trace")]
    fn draw_in(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        let _perf = PerfSpan::new(span_names::DRAW);
        let metrics = self.metrics();
        let colors = GridColors {
            background: self.background(),
            horizontal: self.horizontal_spacing_color(),
            vertical: self.vertical_spacing_color(),
        };
        {
            let children = self.shared.children.lock();
            paint::paint_grid(&metrics, &children, &colors, bounds, canvas);
        }
        self.shared.invalidation.lock().repaint_done();
    }

    // =========================================================================
    // Clicks
    // =========================================================================

    /// Install the item click listener, replacing any previous one.
    pub fn set_on_item_click_listener<F>(&self, listener: F)
    where
        F: Fn(&ItemClick) + Send + Sync + 'static,
    {
        *self.shared.click_listener.write() = Some(Arc::new(listener));
    }

    pub fn clear_on_item_click_listener(&self) {
        *self.shared.click_listener.write() = None;
    }

    /// Click the child at `position` (insertion order).
    ///
    /// Returns `true` if a listener received an [`ItemClick`].
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when there is no child at `position`.
    pub fn perform_item_click(&self, position: usize) -> Result<bool> {
        let click = {
            let children = self.shared.children.lock();
            let id = children
                .id_at(position)
                .ok_or_else(|| GridError::out_of_range(position, children.len()))?;
            children
                .get(id)
                .and_then(|child| child.click_index)
                .map(|index| ItemClick { view: id, index })
        };
        Ok(click.is_some_and(|click| self.deliver_click(&click)))
    }

    /// Hit-test a point in grid coordinates and click the visible child under it.
    ///
    /// Returns the click if an adapter-backed child was hit, whether or not a
    /// listener is installed.
    pub fn dispatch_click(&self, point: Point) -> Option<ItemClick> {
        let click = {
            let children = self.shared.children.lock();
            children
                .iter()
                .filter(|(_, _, child)| child.visibility.is_drawn() && child.frame.contains(point))
                .last()
                .and_then(|(_, id, child)| child.click_index.map(|index| ItemClick { view: id, index }))
        }?;
        self.deliver_click(&click);
        Some(click)
    }

    fn deliver_click(&self, click: &ItemClick) -> bool {
        let listener = self.shared.click_listener.read().clone();
        match listener {
            Some(listener) => {
                tracing::debug!(target: targets::GRID, index = click.index, "item clicked");
                listener(click);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Debugging
    // =========================================================================

    /// Render the child list as an indented tree.
    pub fn debug_tree(&self) -> String {
        let columns = self.column_count();
        let size = self.measured_size();
        let children = self.shared.children.lock();

        let mut root = DebugNode::new(format!(
            "GridView columns={columns} children={} size={}x{}",
            children.len(),
            size.width,
            size.height
        ));
        for (position, id, child) in children.iter() {
            let frame = child.frame;
            let click = child
                .click_index
                .map_or_else(|| "-".to_string(), |index| index.to_string());
            root = root.with_child(DebugNode::new(format!(
                "[{position}] {} id={id:?} item={click} {:?} frame=({}, {}, {}, {})",
                child.view.describe(),
                child.visibility,
                frame.left(),
                frame.top(),
                frame.right(),
                frame.bottom()
            )));
        }
        TreeFormatter::default().format(&root)
    }
}

impl View for GridView {
    /// Nested grids are measured and laid out in one step.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        GridView::perform_layout(self, width_spec, height_spec)
    }

    fn draw(&self, canvas: &mut dyn Canvas, bounds: Rect) {
        self.draw_in(canvas, bounds);
    }

    fn describe(&self) -> String {
        format!("GridView ({} children)", self.child_count())
    }
}

impl fmt::Debug for GridView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("column_count", &self.column_count())
            .field("children", &self.child_count())
            .field("attached", &self.is_attached())
            .finish()
    }
}

static_assertions::assert_impl_all!(GridView: Send, Sync, Clone);
