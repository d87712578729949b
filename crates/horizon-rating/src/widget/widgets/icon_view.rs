//! Icon views and slots.
//!
//! A rating view is a row of [`IconSlot`]s. Each slot pairs an "empty" icon
//! with a "full" icon drawn on top of it; the full icon is hidden, fully
//! shown, or revealed from the left through a rectangular mask.

use horizon_rating_core::ObjectId;
use horizon_rating_render::{Image, ImageScaleMode, Rect, Renderer};

/// How much of a slot's full icon is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconFill {
    /// The full icon is hidden.
    Empty,
    /// The left `fraction` (strictly between 0 and 1) of the full icon is shown.
    Partial(f64),
    /// The full icon is shown without a mask.
    Full,
}

impl IconFill {
    /// Compute the fill of the slot at `index` (representing the value
    /// `index + 1`) for the given rating.
    pub fn for_slot(rating: f64, index: usize) -> Self {
        let lower = index as f64;
        let upper = lower + 1.0;
        if rating >= upper {
            IconFill::Full
        } else if rating > lower {
            IconFill::Partial(rating - lower)
        } else {
            IconFill::Empty
        }
    }
}

/// A single positioned image.
#[derive(Debug, Clone)]
pub struct IconView {
    id: ObjectId,
    image: Option<Image>,
    /// Frame in the rating view's coordinate space.
    frame: Rect,
    hidden: bool,
    /// Reveal mask in the view's local coordinates.
    mask: Option<Rect>,
    scale_mode: ImageScaleMode,
}

impl IconView {
    /// Create a view showing `image`.
    pub fn new(image: Option<Image>, scale_mode: ImageScaleMode) -> Self {
        Self {
            id: ObjectId::next(),
            image,
            frame: Rect::ZERO,
            hidden: false,
            mask: None,
            scale_mode,
        }
    }

    /// This view's unique id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the displayed image.
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Set the displayed image.
    pub fn set_image(&mut self, image: Option<Image>) {
        self.image = image;
    }

    /// Get the frame in the rating view's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Set the frame in the rating view's coordinate space.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Check whether the view is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Set whether the view is hidden.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// The reveal mask, in view-local coordinates.
    pub fn mask(&self) -> Option<Rect> {
        self.mask
    }

    /// Set the reveal mask. `None` shows the whole image.
    pub fn set_mask(&mut self, mask: Option<Rect>) {
        self.mask = mask;
    }

    /// Get how the image is scaled into the frame.
    pub fn scale_mode(&self) -> ImageScaleMode {
        self.scale_mode
    }

    /// Set how the image is scaled into the frame.
    pub fn set_scale_mode(&mut self, scale_mode: ImageScaleMode) {
        self.scale_mode = scale_mode;
    }

    /// Draw the view, honoring visibility and mask.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        let Some(image) = self.image.as_ref().filter(|_| !self.hidden) else {
            return;
        };

        match self.mask {
            Some(mask) => {
                renderer.save();
                renderer.clip_rect(mask.offset(self.frame.left(), self.frame.top()));
                renderer.draw_image(image, self.frame, self.scale_mode);
                renderer.restore();
            }
            None => renderer.draw_image(image, self.frame, self.scale_mode),
        }
    }
}

/// One rating unit: an empty icon overlaid by a full icon.
#[derive(Debug, Clone)]
pub struct IconSlot {
    empty: IconView,
    full: IconView,
}

impl IconSlot {
    /// Allocate a fresh pair of views.
    pub fn new(
        empty_image: Option<Image>,
        full_image: Option<Image>,
        scale_mode: ImageScaleMode,
    ) -> Self {
        Self {
            empty: IconView::new(empty_image, scale_mode),
            full: IconView::new(full_image, scale_mode),
        }
    }

    /// The empty (background) icon.
    pub fn empty(&self) -> &IconView {
        &self.empty
    }

    /// The full (overlay) icon.
    pub fn full(&self) -> &IconView {
        &self.full
    }

    pub(crate) fn empty_mut(&mut self) -> &mut IconView {
        &mut self.empty
    }

    pub(crate) fn full_mut(&mut self) -> &mut IconView {
        &mut self.full
    }

    /// The slot's frame (shared by both views).
    pub fn frame(&self) -> Rect {
        self.empty.frame()
    }

    /// Position both views.
    pub fn set_frame(&mut self, frame: Rect) {
        self.empty.set_frame(frame);
        self.full.set_frame(frame);
    }

    /// Update the full icon's visibility and mask from `fill`.
    pub fn apply_fill(&mut self, fill: IconFill) {
        match fill {
            IconFill::Full => {
                self.full.set_mask(None);
                self.full.set_hidden(false);
            }
            IconFill::Partial(fraction) => {
                let frame = self.full.frame();
                let width = (fraction * frame.width() as f64) as f32;
                self.full
                    .set_mask(Some(Rect::new(0.0, 0.0, width, frame.height())));
                self.full.set_hidden(false);
            }
            IconFill::Empty => {
                self.full.set_mask(None);
                self.full.set_hidden(true);
            }
        }
    }

    /// Draw the empty icon, then the full icon over it.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        self.empty.paint(renderer);
        self.full.paint(renderer);
    }
}
