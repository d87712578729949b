//! Core renderer trait defining the 2D drawing interface.
//!
//! The trait is object safe so widgets can paint through `&mut dyn Renderer`
//! regardless of which backend the host application drives.

use crate::image::{Image, ImageScaleMode};
use crate::types::{Color, Rect, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
    /// Number of clip regions pushed.
    pub clips: u32,
}

/// The 2D rendering trait.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(clear_color, viewport_size);
///
/// renderer.save();
/// renderer.clip_rect(mask);
/// renderer.draw_image(&star, frame, ImageScaleMode::Fit);
/// renderer.restore();
///
/// let stats = renderer.end_frame();
/// ```
///
/// # State Stack
///
/// The renderer maintains a state stack of clip regions that can be saved
/// and restored.
pub trait Renderer {
    /// Begin a new frame, cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame.
    ///
    /// Returns statistics about the frame that was rendered.
    fn end_frame(&mut self) -> FrameStats;

    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state (clip region).
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    // =========================================================================
    // Clipping
    // =========================================================================

    /// Set a rectangular clip region.
    ///
    /// Drawing will be clipped to this rectangle, intersected with any
    /// existing clip.
    fn clip_rect(&mut self, rect: Rect);

    /// Get the current clip bounds, if any.
    fn clip_bounds(&self) -> Option<Rect>;

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw an image into `dest` using the given scale mode.
    fn draw_image(&mut self, image: &Image, dest: Rect, scale_mode: ImageScaleMode);
}
