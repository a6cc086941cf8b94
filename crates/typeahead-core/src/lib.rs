//! Core systems for Typeahead.
//!
//! This crate provides the foundation the `typeahead` control is built on:
//!
//! - **Signal/Slot System**: Type-safe outbound notifications
//! - **Geometry**: Points, sizes, and rectangles in window coordinates
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! // Create a signal that notifies when the panel visibility changes
//! let panel_visibility_changed = Signal::<bool>::new();
//!
//! let conn_id = panel_visibility_changed.connect(|visible| {
//!     println!("panel visible: {visible}");
//! });
//!
//! panel_visibility_changed.emit(true);
//! panel_visibility_changed.disconnect(conn_id);
//! ```

pub mod geometry;
pub mod logging;
mod signal;

pub use geometry::{Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
