//! Layout size hints.

use horizon_rating_render::Size;

/// Size preferences a widget reports to its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. If `None`, the widget can shrink to zero.
    pub minimum: Option<Size>,
}

impl SizeHint {
    /// Create a new size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the minimum size from dimensions.
    pub fn with_minimum_dimensions(self, width: f32, height: f32) -> Self {
        self.with_minimum(Size::new(width, height))
    }
}
