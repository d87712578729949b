//! Widget system for Horizon Rating.
//!
//! This module provides the widget plumbing the rating view is built on:
//!
//! - [`Widget`] trait: The base trait for all UI elements
//! - [`WidgetBase`]: Common implementation for widget functionality
//! - [`SizeHint`]: Size negotiation with the host layout
//! - [`WidgetEvent`]: Pointer and lifecycle input
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` for layout
//! 4. Implement `paint()` for rendering
//!
//! # Coordinate Systems
//!
//! Widget geometry is expressed in parent coordinates. Everything else
//! (painting, pointer positions, child icon frames) uses local coordinates
//! with the origin at the widget's top-left corner.

mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EventBase, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, TouchEvent,
    TouchPhase, TouchPoint, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{PaintContext, Widget};
