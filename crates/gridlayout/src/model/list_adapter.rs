//! Generic list-backed adapter.
//!
//! `ListAdapter<T>` keeps its items in a `Vec<T>` and builds views with a
//! factory closure supplied at construction.
//!
//! # Example
//!
//! ```
//! use gridlayout::model::{Adapter, ListAdapter};
//! use gridlayout::widget::TextView;
//!
//! let adapter = ListAdapter::new(vec!["one".to_string()], |item: &String, _recycled| {
//!     Box::new(TextView::new(item.clone()))
//! });
//!
//! adapter.append("two".to_string());
//! assert_eq!(adapter.count(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use gridlayout_core::logging::targets;

use super::adapter::{Adapter, AdapterSignals, ItemAdapter};
use crate::error::{GridError, Result};
use crate::widget::{downcast_view, TextView, View};

/// Builds a view for an item, optionally reusing a recycled view.
pub type ViewFactory<T> = Arc<dyn Fn(&T, Option<Box<dyn View>>) -> Box<dyn View> + Send + Sync>;

/// An adapter over a list of items.
///
/// Every structural mutation emits [`AdapterSignals::changed`] exactly once,
/// after the internal lock has been released, so observers may read the
/// adapter from inside the notification.
pub struct ListAdapter<T> {
    items: RwLock<Vec<T>>,
    factory: ViewFactory<T>,
    signals: AdapterSignals,
}

impl<T: Send + Sync + 'static> ListAdapter<T> {
    /// Create an adapter with initial items and a view factory.
    pub fn new<F>(items: Vec<T>, factory: F) -> Self
    where
        F: Fn(&T, Option<Box<dyn View>>) -> Box<dyn View> + Send + Sync + 'static,
    {
        Self {
            items: RwLock::new(items),
            factory: Arc::new(factory),
            signals: AdapterSignals::new(),
        }
    }

    /// Create an empty adapter.
    pub fn empty<F>(factory: F) -> Self
    where
        F: Fn(&T, Option<Box<dyn View>>) -> Box<dyn View> + Send + Sync + 'static,
    {
        Self::new(Vec::new(), factory)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Read access to the items.
    ///
    /// Do not mutate the adapter while holding the returned guard.
    pub fn items(&self) -> impl std::ops::Deref<Target = Vec<T>> + '_ {
        self.items.read()
    }

    /// Appends an item to the end of the list.
    pub fn append(&self, item: T) {
        self.items.write().push(item);
        self.notify("append");
    }

    /// Inserts an item at `index`, shifting later items back.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when `index > len()`.
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        {
            let mut items = self.items.write();
            if index > items.len() {
                return Err(GridError::out_of_range(index, items.len()));
            }
            items.insert(index, item);
        }
        self.notify("insert");
        Ok(())
    }

    /// Removes and returns the item at `index`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when `index >= len()`.
    pub fn remove(&self, index: usize) -> Result<T> {
        let removed = {
            let mut items = self.items.write();
            if index >= items.len() {
                return Err(GridError::out_of_range(index, items.len()));
            }
            items.remove(index)
        };
        self.notify("remove");
        Ok(removed)
    }

    /// Replaces all items.
    pub fn set_items(&self, items: Vec<T>) {
        *self.items.write() = items;
        self.notify("set_items");
    }

    /// Removes all items.
    pub fn clear(&self) {
        self.items.write().clear();
        self.notify("clear");
    }

    /// Modifies the item at `index` in place.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] when `index >= len()`.
    pub fn modify<F, R>(&self, index: usize, f: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let result = {
            let mut items = self.items.write();
            let count = items.len();
            let item = items
                .get_mut(index)
                .ok_or_else(|| GridError::out_of_range(index, count))?;
            f(item)
        };
        self.notify("modify");
        Ok(result)
    }

    /// Sorts the items with a comparator.
    pub fn sort_by<F>(&self, compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.items.write().sort_by(compare);
        self.notify("sort");
    }

    /// Notify observers that the data changed outside the structural methods.
    pub fn notify_data_set_changed(&self) {
        self.notify("notify_data_set_changed");
    }

    fn notify(&self, operation: &'static str) {
        tracing::debug!(
            target: targets::ADAPTER,
            operation,
            count = self.len(),
            "adapter data changed"
        );
        self.signals.changed.emit(());
    }
}

impl<T: fmt::Display + Send + Sync + 'static> ListAdapter<T> {
    /// Create an adapter that shows each item's `Display` text in a [`TextView`].
    ///
    /// Recycled `TextView`s are rebound in place.
    pub fn with_text_views(items: Vec<T>) -> Self {
        Self::new(items, |item: &T, recycled: Option<Box<dyn View>>| {
            match recycled.and_then(downcast_view::<TextView>) {
                Some(mut view) => {
                    view.set_text(item.to_string());
                    view
                }
                None => Box::new(TextView::new(item.to_string())),
            }
        })
    }
}

impl<T: Send + Sync + 'static> Adapter for ListAdapter<T> {
    fn count(&self) -> usize {
        self.len()
    }

    fn view_for(&self, index: usize, recycled: Option<Box<dyn View>>) -> Result<Box<dyn View>> {
        let items = self.items.read();
        let item = items
            .get(index)
            .ok_or_else(|| GridError::out_of_range(index, items.len()))?;
        Ok((self.factory)(item, recycled))
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

impl<T: Clone + Send + Sync + 'static> ItemAdapter for ListAdapter<T> {
    type Item = T;

    fn item_at(&self, index: usize) -> Result<T> {
        let items = self.items.read();
        items
            .get(index)
            .cloned()
            .ok_or_else(|| GridError::out_of_range(index, items.len()))
    }
}

impl<T> fmt::Debug for ListAdapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAdapter")
            .field("len", &self.items.read().len())
            .field("signals", &self.signals)
            .finish()
    }
}

static_assertions::assert_impl_all!(ListAdapter<String>: Send, Sync);
