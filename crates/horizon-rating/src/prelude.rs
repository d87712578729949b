//! Prelude module for Horizon Rating.
//!
//! ```ignore
//! use horizon_rating::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Object System
// ============================================================================

pub use horizon_rating_core::{Object, ObjectId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint,
    TouchEvent, TouchPhase, Widget, WidgetBase, WidgetEvent,
};

// ============================================================================
// Rating Widget
// ============================================================================

pub use crate::config::RatingViewConfig;
pub use crate::error::{RatingError, RatingResult};
pub use crate::widget::widgets::{RatingMode, RatingView, RatingViewDelegate};

// ============================================================================
// Geometry and Rendering
// ============================================================================

pub use horizon_rating_render::{
    Color, DrawCommand, Image, ImageScaleMode, Point, Rect, RecordingRenderer, Renderer, Size,
};
