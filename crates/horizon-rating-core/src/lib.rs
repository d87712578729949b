//! Core systems for Horizon Rating.
//!
//! This crate provides the foundational pieces shared by the rendering and
//! widget crates:
//!
//! - **Object identity**: [`ObjectId`] and the [`Object`] trait
//! - **Signal/Slot System**: Type-safe, synchronous change notification
//! - **Logging**: `tracing` target and span names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_rating_core::Signal;
//!
//! let rating_changed = Signal::<f64>::new();
//!
//! let conn_id = rating_changed.connect(|rating| {
//!     println!("Rating changed to: {}", rating);
//! });
//!
//! rating_changed.emit(3.5);
//! rating_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod object;
pub mod signal;

pub use object::{Object, ObjectId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
