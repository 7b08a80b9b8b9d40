//! Core traits for data adapters.
//!
//! An adapter owns an ordered collection of items, produces a view for each
//! position and notifies observers whenever the collection changes. The grid
//! container talks to adapters only through the object-safe [`Adapter`]
//! trait; [`ItemAdapter`] adds typed access to the items themselves.

use gridlayout_core::{ConnectionId, Signal};

use crate::error::{GridError, Result};
use crate::widget::View;

/// Observer for adapter changes.
pub type DataSetObserver = Box<dyn Fn() + Send + Sync>;

/// Signals emitted by adapters.
#[derive(Debug, Default)]
pub struct AdapterSignals {
    /// Emitted exactly once after every structural mutation.
    pub changed: Signal<()>,
}

impl AdapterSignals {
    /// Create a new set of adapter signals.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A data source that produces one view per item.
///
/// Positions are identities: the item at index `i` is whatever currently sits
/// at position `i`, and [`Adapter::item_id`] reports the position itself.
pub trait Adapter: Send + Sync {
    /// Number of items; always the live length of the backing sequence.
    fn count(&self) -> usize;

    /// Build a view for the item at `index`.
    ///
    /// When `recycled` holds a view of a compatible type the adapter may
    /// refresh and return it instead of allocating a new one.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when `index >= count()`.
    fn view_for(&self, index: usize, recycled: Option<Box<dyn View>>) -> Result<Box<dyn View>>;

    /// The signals this adapter emits.
    fn signals(&self) -> &AdapterSignals;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Stable identifier of the item at `index`.
    fn item_id(&self, index: usize) -> Result<u64> {
        let count = self.count();
        if index < count {
            Ok(index as u64)
        } else {
            Err(GridError::out_of_range(index, count))
        }
    }

    /// Register an observer called after every change.
    fn subscribe(&self, observer: DataSetObserver) -> ConnectionId {
        self.signals().changed.connect(move |_| observer())
    }

    /// Remove an observer. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.signals().changed.disconnect(id)
    }
}

/// An adapter with typed item access.
pub trait ItemAdapter: Adapter {
    /// The item type.
    type Item: Clone;

    /// A copy of the item at `index`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when `index >= count()`.
    fn item_at(&self, index: usize) -> Result<Self::Item>;
}
