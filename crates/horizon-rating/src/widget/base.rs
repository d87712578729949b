//! Widget base implementation.
//!
//! This module provides `WidgetBase`, the common implementation details
//! for all widgets: identity, geometry, visibility, enabled state and
//! repaint tracking.

use horizon_rating_core::{ObjectId, Signal};
use horizon_rating_render::{Point, Rect, Size};

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it.
pub struct WidgetBase {
    /// The widget's unique id.
    id: ObjectId,

    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget is enabled (can receive input).
    enabled: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetBase {
    /// Create a new widget base with a fresh id and empty geometry.
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            geometry: Rect::ZERO,
            visible: true,
            enabled: true,
            needs_repaint: true,
            geometry_changed: Signal::new(),
        }
    }

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Returns `true` if the geometry changed.
    pub fn set_geometry(&mut self, rect: Rect) -> bool {
        if self.geometry == rect {
            return false;
        }
        self.geometry = rect;
        self.update();
        self.geometry_changed.emit(rect);
        true
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get the widget's local rectangle (origin at 0,0).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.height()
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.update();
        }
    }

    /// Check if the widget is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    // =========================================================================
    // Repaint Tracking
    // =========================================================================

    /// Schedule a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Check if the widget has a pending repaint.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Clear the pending repaint flag after painting.
    pub fn clear_repaint(&mut self) {
        self.needs_repaint = false;
    }
}
