//! Core systems for gridlayout.
//!
//! This crate provides the foundational pieces shared by the gridlayout
//! widgets:
//!
//! - **Signal/Slot System**: Synchronous observer notifications
//! - **Property System**: Values with change detection
//! - **Logging**: Tracing targets, debug tree formatting, perf spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use gridlayout_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{DebugNode, PerfSpan, TreeFormatter, TreeStyle};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
