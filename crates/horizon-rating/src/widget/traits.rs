//! Core widget trait definitions.
//!
//! # Key Types
//!
//! - [`Widget`] - Base trait for all UI elements
//! - [`PaintContext`] - Rendering context passed to [`Widget::paint`]

use horizon_rating_core::Object;
use horizon_rating_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// This wraps a renderer and provides the widget's geometry information
/// for convenient access during the paint operation.
pub struct PaintContext<'a> {
    /// The renderer to draw with.
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
        }
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`], a size hint, and a
/// paint routine. Geometry, visibility and event handling have default
/// implementations that delegate to the base.
///
/// # Example
///
/// ```ignore
/// use horizon_rating::widget::*;
/// use horizon_rating_core::{Object, ObjectId};
/// use horizon_rating_render::Color;
///
/// struct ColorBox {
///     base: WidgetBase,
///     color: Color,
/// }
///
/// impl Object for ColorBox {
///     fn object_id(&self) -> ObjectId {
///         self.base.object_id()
///     }
/// }
///
/// impl Widget for ColorBox {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn size_hint(&self) -> SizeHint {
///         SizeHint::from_dimensions(100.0, 100.0)
///     }
///
///     fn paint(&self, ctx: &mut PaintContext<'_>) {
///         let rect = ctx.rect();
///         ctx.renderer().fill_rect(rect, self.color);
///     }
/// }
/// ```
pub trait Widget: Object + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    ///
    /// Coordinates are widget-local: (0, 0) is the top-left corner of the
    /// widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's position relative to its parent.
    fn pos(&self) -> Point {
        self.widget_base().pos()
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Resize the widget, keeping its position.
    fn resize(&mut self, size: Size) {
        let origin = self.pos();
        self.set_geometry(Rect::from_origin_size(origin, size));
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Visibility and Enabled State
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Painting and Events
    // =========================================================================

    /// Schedule a repaint.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Paint the widget into `renderer` and clear its repaint flag.
    fn render(&mut self, renderer: &mut dyn Renderer) {
        if self.is_visible() {
            let mut ctx = PaintContext::new(renderer, self.rect());
            self.paint(&mut ctx);
        }
        self.widget_base_mut().clear_repaint();
    }

    /// Handle an event.
    ///
    /// Returns `true` if the event was handled.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }
}
