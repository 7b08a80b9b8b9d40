//! Data adapters that feed views into containers.
//!
//! - [`Adapter`]: object-safe data source producing one view per position
//! - [`ItemAdapter`]: typed item access on top of [`Adapter`]
//! - [`ListAdapter`]: `Vec`-backed adapter with a view factory closure

mod adapter;
mod list_adapter;

pub use adapter::{Adapter, AdapterSignals, DataSetObserver, ItemAdapter};
pub use list_adapter::{ListAdapter, ViewFactory};
