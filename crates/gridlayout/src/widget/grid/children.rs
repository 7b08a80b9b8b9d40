//! Child storage for the grid container.

use slotmap::{new_key_type, SlotMap};

use gridlayout_render::{Rect, Size};

use crate::widget::geometry::{LayoutParams, Visibility};
use crate::widget::view::View;

new_key_type! {
    /// Identifier of a child inside a grid.
    ///
    /// Ids are not reused after the child is removed, so a stale id reliably
    /// reports [`GridError::UnknownChild`](crate::GridError::UnknownChild).
    pub struct ViewId;
}

/// A child view plus the state the container tracks for it.
pub(crate) struct ChildView {
    pub(crate) view: Box<dyn View>,
    pub(crate) visibility: Visibility,
    pub(crate) layout_params: Option<LayoutParams>,
    pub(crate) measured: Size,
    pub(crate) frame: Rect,
    /// Adapter position captured when the child was created, if any.
    pub(crate) click_index: Option<usize>,
}

impl ChildView {
    pub(crate) fn new(view: Box<dyn View>, click_index: Option<usize>) -> Self {
        let layout_params = view.layout_params();
        Self {
            view,
            visibility: Visibility::Visible,
            layout_params,
            measured: Size::ZERO,
            frame: Rect::ZERO,
            click_index,
        }
    }
}

/// Ordered children keyed by [`ViewId`].
#[derive(Default)]
pub(crate) struct Children {
    slots: SlotMap<ViewId, ChildView>,
    order: Vec<ViewId>,
}

impl Children {
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn push(&mut self, child: ChildView) -> ViewId {
        let id = self.slots.insert(child);
        self.order.push(id);
        id
    }

    pub(crate) fn remove(&mut self, id: ViewId) -> Option<ChildView> {
        let child = self.slots.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(child)
    }

    /// Remove every child, returning them in order so the caller can drop
    /// them after releasing its lock.
    pub(crate) fn take_all(&mut self) -> Vec<ChildView> {
        let order = std::mem::take(&mut self.order);
        let taken = order.iter().filter_map(|id| self.slots.remove(*id)).collect();
        self.slots.clear();
        taken
    }

    pub(crate) fn get(&self, id: ViewId) -> Option<&ChildView> {
        self.slots.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: ViewId) -> Option<&mut ChildView> {
        self.slots.get_mut(id)
    }

    /// Id of the child at `position` in insertion order.
    pub(crate) fn id_at(&self, position: usize) -> Option<ViewId> {
        self.order.get(position).copied()
    }

    pub(crate) fn ids(&self) -> &[ViewId] {
        &self.order
    }

    /// Children in insertion order with their raw position.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, ViewId, &ChildView)> + '_ {
        self.order
            .iter()
            .enumerate()
            .filter_map(|(position, id)| self.slots.get(*id).map(|child| (position, *id, child)))
    }

    /// Visit children mutably in insertion order.
    pub(crate) fn for_each_mut(&mut self, mut f: impl FnMut(usize, ViewId, &mut ChildView)) {
        let Self { slots, order } = self;
        for (position, id) in order.iter().enumerate() {
            if let Some(child) = slots.get_mut(*id) {
                f(position, *id, child);
            }
        }
    }
}
