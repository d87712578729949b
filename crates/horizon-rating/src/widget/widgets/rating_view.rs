//! Rating view widget implementation.
//!
//! This module provides [`RatingView`], a widget that shows a rating as a row
//! of icons (typically stars) and lets the user change it by pressing and
//! dragging across the row.
//!
//! # Example
//!
//! ```ignore
//! use horizon_rating::widget::widgets::{RatingMode, RatingView};
//! use horizon_rating_render::Image;
//!
//! let mut stars = RatingView::new()
//!     .with_empty_image(Image::from_file("star_empty.png")?)
//!     .with_full_image(Image::from_file("star_full.png")?)
//!     .with_rating_mode(RatingMode::Half)
//!     .with_rating(3.5);
//!
//! stars.rating_committed.connect(|&rating| {
//!     println!("rating updated: {}", rating);
//! });
//! ```

use std::sync::{Arc, Weak};

use horizon_rating_core::logging::{span_names, targets};
use horizon_rating_core::{Object, ObjectId, Signal};
use horizon_rating_render::{
    Color, DrawCommand, Image, ImageScaleMode, Point, Rect, RecordingRenderer, Renderer, Size,
};

use super::icon_view::{IconFill, IconSlot};
use crate::error::{RatingError, RatingResult};
use crate::widget::{
    MouseButton, PaintContext, SizeHint, TouchPhase, Widget, WidgetBase, WidgetEvent,
};

/// Default minimum rating.
pub const DEFAULT_MIN_RATING: i32 = 0;

/// Default maximum rating (number of icons).
pub const DEFAULT_MAX_RATING: i32 = 5;

/// Largest accepted maximum rating (number of icons).
pub const MAX_ICON_COUNT: i32 = 100;

/// Default floor for the per-icon layout box.
pub const DEFAULT_MIN_ICON_SIZE: Size = Size::new(5.0, 5.0);

/// Preferred edge length of one icon when no geometry has been assigned.
const PREFERRED_ICON_EXTENT: f32 = 30.0;

/// Receives rating notifications from a [`RatingView`].
///
/// The view holds its delegate weakly, so the host keeps ownership.
pub trait RatingViewDelegate: Send + Sync {
    /// Called once per interaction when the pointer is released, with the
    /// settled rating.
    fn rating_did_update(&self, view: ObjectId, rating: f64);

    /// Called on every pointer press and move while the user drags.
    fn rating_is_updating(&self, _view: ObjectId, _rating: f64) {}
}

/// Granularity of pointer-resolved ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RatingMode {
    /// Ratings snap to whole icons.
    #[default]
    Whole,
    /// Ratings snap to half icons.
    Half,
    /// Ratings follow the pointer continuously.
    Float,
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer went down on the view and has not been released.
    Dragging,
}

/// Compute the size of an image scaled to fit inside `bounds` while keeping
/// its aspect ratio.
pub fn fit_icon_size(image_size: Size, bounds: Size) -> Size {
    if image_size.is_empty() || bounds.height <= 0.0 {
        return bounds;
    }
    let (Some(image_ratio), Some(bounds_ratio)) = (image_size.aspect_ratio(), bounds.aspect_ratio())
    else {
        return bounds;
    };

    if image_ratio < bounds_ratio {
        let scale = bounds.height / image_size.height;
        Size::new(scale * image_size.width, bounds.height)
    } else {
        let scale = bounds.width / image_size.width;
        Size::new(bounds.width, scale * image_size.height)
    }
}

/// A row of icons representing a rating.
///
/// Each rating unit is an [`IconSlot`]: an empty icon with a full icon drawn
/// over it. For a rating `r`, the slot at index `i` shows its full icon when
/// `r >= i + 1`, reveals the left `r - i` of it when `i < r < i + 1`, and
/// hides it otherwise.
///
/// # Rating Range
///
/// Ratings are kept within `[min_rating, max_rating]`. `max_rating` is also
/// the number of icons and must be at least 2.
///
/// # Interaction
///
/// While [`editable`](Self::editable) is set, pressing and dragging over the
/// view updates the rating live. Every press and move notifies
/// `rating_changing` and the delegate's `rating_is_updating`; every release
/// notifies `rating_committed` and the delegate's `rating_did_update`.
///
/// # Signals
///
/// - `rating_changed(f64)`: Emitted when the stored rating changes
/// - `rating_changing(f64)`: Emitted on every press/move while dragging
/// - `rating_committed(f64)`: Emitted when the pointer is released
pub struct RatingView {
    /// Widget base.
    base: WidgetBase,

    /// Icon slots, one per rating unit.
    slots: Vec<IconSlot>,

    /// Image for unfilled icons.
    empty_image: Option<Image>,

    /// Image overlaid on filled icons. Should match the empty image's shape.
    full_image: Option<Image>,

    /// How images are scaled into their icon frames.
    icon_scale_mode: ImageScaleMode,

    min_rating: i32,
    max_rating: i32,

    /// Floor for the per-icon layout box.
    min_icon_size: Size,

    /// Current rating.
    rating: f64,

    /// Whether pointer input changes the rating.
    editable: bool,

    /// Ratings change by 0.5. Takes priority over `float_ratings`.
    half_ratings: bool,

    /// Ratings change continuously.
    float_ratings: bool,

    interaction: InteractionState,

    delegate: Option<Weak<dyn RatingViewDelegate>>,

    /// Signal emitted when the rating changes.
    pub rating_changed: Signal<f64>,

    /// Signal emitted on every press/move while the user drags.
    pub rating_changing: Signal<f64>,

    /// Signal emitted when an interaction ends.
    pub rating_committed: Signal<f64>,
}

impl RatingView {
    /// Create a rating view with five icons and a rating of zero.
    ///
    /// Icons are laid out once an empty image and a geometry are assigned.
    pub fn new() -> Self {
        let mut view = Self {
            base: WidgetBase::new(),
            slots: Vec::new(),
            empty_image: None,
            full_image: None,
            icon_scale_mode: ImageScaleMode::Fit,
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
            min_icon_size: DEFAULT_MIN_ICON_SIZE,
            rating: DEFAULT_MIN_RATING as f64,
            editable: true,
            half_ratings: false,
            float_ratings: false,
            interaction: InteractionState::Idle,
            delegate: None,
            rating_changed: Signal::new(),
            rating_changing: Signal::new(),
            rating_committed: Signal::new(),
        };
        view.rebuild_slots();
        view
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Get the image drawn for unfilled icons.
    pub fn empty_image(&self) -> Option<&Image> {
        self.empty_image.as_ref()
    }

    /// Set the image drawn for unfilled icons (e.g. a star outline).
    ///
    /// The image's aspect ratio drives icon layout, so this relays out the
    /// icons.
    pub fn set_empty_image(&mut self, image: Option<Image>) {
        for slot in &mut self.slots {
            slot.empty_mut().set_image(image.clone());
        }
        self.empty_image = image;
        self.relayout();
        self.refresh();
    }

    /// Set empty image using builder pattern.
    pub fn with_empty_image(mut self, image: Image) -> Self {
        self.set_empty_image(Some(image));
        self
    }

    /// Get the image overlaid on filled icons.
    pub fn full_image(&self) -> Option<&Image> {
        self.full_image.as_ref()
    }

    /// Set the image overlaid on filled icons.
    pub fn set_full_image(&mut self, image: Option<Image>) {
        for slot in &mut self.slots {
            slot.full_mut().set_image(image.clone());
        }
        self.full_image = image;
        self.refresh();
    }

    /// Set full image using builder pattern.
    pub fn with_full_image(mut self, image: Image) -> Self {
        self.set_full_image(Some(image));
        self
    }

    /// Get how images are scaled into their icon frames.
    pub fn icon_scale_mode(&self) -> ImageScaleMode {
        self.icon_scale_mode
    }

    /// Set how images are scaled into their icon frames.
    pub fn set_icon_scale_mode(&mut self, mode: ImageScaleMode) {
        if self.icon_scale_mode != mode {
            self.icon_scale_mode = mode;
            for slot in &mut self.slots {
                slot.empty_mut().set_scale_mode(mode);
                slot.full_mut().set_scale_mode(mode);
            }
            self.base.update();
        }
    }

    /// Set icon scale mode using builder pattern.
    pub fn with_icon_scale_mode(mut self, mode: ImageScaleMode) -> Self {
        self.set_icon_scale_mode(mode);
        self
    }

    // =========================================================================
    // Range
    // =========================================================================

    /// Get the minimum rating.
    pub fn min_rating(&self) -> i32 {
        self.min_rating
    }

    /// Set the minimum rating.
    ///
    /// A current rating below the new minimum is raised to it.
    pub fn set_min_rating(&mut self, min_rating: i32) -> RatingResult<()> {
        if min_rating < 0 {
            return Err(RatingError::NegativeMinimum(min_rating));
        }
        if min_rating >= self.max_rating {
            return Err(RatingError::InvalidRange {
                min: min_rating,
                max: self.max_rating,
            });
        }

        self.min_rating = min_rating;
        if self.rating < min_rating as f64 {
            self.set_rating(min_rating as f64);
        }
        Ok(())
    }

    /// Get the maximum rating, which is also the number of icons.
    pub fn max_rating(&self) -> i32 {
        self.max_rating
    }

    /// Set the maximum rating.
    ///
    /// Assigning the current value does nothing. Any other value discards
    /// every icon slot and allocates `max_rating` new ones. At most
    /// [`MAX_ICON_COUNT`] icons are allowed.
    pub fn set_max_rating(&mut self, max_rating: i32) -> RatingResult<()> {
        if max_rating == self.max_rating {
            return Ok(());
        }
        if max_rating < 2 {
            return Err(RatingError::TooFewIcons(max_rating));
        }
        if max_rating > MAX_ICON_COUNT {
            return Err(RatingError::TooManyIcons {
                max: max_rating,
                limit: MAX_ICON_COUNT,
            });
        }
        if max_rating <= self.min_rating {
            return Err(RatingError::InvalidRange {
                min: self.min_rating,
                max: max_rating,
            });
        }

        self.max_rating = max_rating;
        self.rebuild_slots();
        if self.rating > max_rating as f64 {
            self.set_rating(max_rating as f64);
        }
        self.relayout();
        self.refresh();
        Ok(())
    }

    // =========================================================================
    // Rating
    // =========================================================================

    /// Get the current rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Set the current rating, clamped to `[min_rating, max_rating]`.
    ///
    /// NaN is ignored.
    pub fn set_rating(&mut self, rating: f64) {
        if rating.is_nan() {
            tracing::warn!(target: targets::WIDGET, "ignoring NaN rating");
            return;
        }

        let clamped = rating.clamp(self.min_rating as f64, self.max_rating as f64);
        if clamped != self.rating {
            self.rating = clamped;
            self.refresh();
            self.rating_changed.emit(clamped);
        }
    }

    /// Set rating using builder pattern.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.set_rating(rating);
        self
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Check whether pointer input changes the rating.
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Set whether pointer input changes the rating.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Set editable using builder pattern.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Check whether pointer ratings snap to halves.
    pub fn half_ratings(&self) -> bool {
        self.half_ratings
    }

    /// Snap pointer ratings to halves. Takes priority over float ratings.
    pub fn set_half_ratings(&mut self, half_ratings: bool) {
        self.half_ratings = half_ratings;
    }

    /// Check whether pointer ratings follow the pointer continuously.
    pub fn float_ratings(&self) -> bool {
        self.float_ratings
    }

    /// Let pointer ratings follow the pointer continuously.
    pub fn set_float_ratings(&mut self, float_ratings: bool) {
        self.float_ratings = float_ratings;
    }

    /// The effective granularity of pointer ratings.
    pub fn rating_mode(&self) -> RatingMode {
        if self.half_ratings {
            RatingMode::Half
        } else if self.float_ratings {
            RatingMode::Float
        } else {
            RatingMode::Whole
        }
    }

    /// Set both granularity flags from a mode.
    pub fn set_rating_mode(&mut self, mode: RatingMode) {
        self.half_ratings = mode == RatingMode::Half;
        self.float_ratings = mode == RatingMode::Float;
    }

    /// Set rating mode using builder pattern.
    pub fn with_rating_mode(mut self, mode: RatingMode) -> Self {
        self.set_rating_mode(mode);
        self
    }

    /// Get the floor for the per-icon layout box.
    pub fn min_icon_size(&self) -> Size {
        self.min_icon_size
    }

    /// Set the floor for the per-icon layout box.
    pub fn set_min_icon_size(&mut self, size: Size) -> RatingResult<()> {
        let valid = size.width.is_finite()
            && size.height.is_finite()
            && size.width > 0.0
            && size.height > 0.0;
        if !valid {
            return Err(RatingError::InvalidIconSize {
                width: size.width,
                height: size.height,
            });
        }

        if self.min_icon_size != size {
            self.min_icon_size = size;
            self.relayout();
        }
        Ok(())
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Register the delegate. The view keeps only a weak reference.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: RatingViewDelegate + 'static,
    {
        let delegate: Arc<dyn RatingViewDelegate> = delegate.clone();
        self.delegate = Some(Arc::downgrade(&delegate));
    }

    /// Remove the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if one is registered and still alive.
    pub fn delegate(&self) -> Option<Arc<dyn RatingViewDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    // =========================================================================
    // Slots and Layout
    // =========================================================================

    /// The icon slots, in rating order.
    pub fn slots(&self) -> &[IconSlot] {
        &self.slots
    }

    /// Current pointer interaction state.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
    }

    /// Discard all slots and allocate `max_rating` fresh ones carrying the
    /// current images and scale mode.
    fn rebuild_slots(&mut self) {
        let count = self.max_rating.max(0) as usize;
        self.slots = (0..count)
            .map(|_| {
                IconSlot::new(
                    self.empty_image.clone(),
                    self.full_image.clone(),
                    self.icon_scale_mode,
                )
            })
            .collect();
        tracing::debug!(target: targets::WIDGET, view = %self.base.object_id(), count, "rebuilt icon slots");
    }

    /// Lay out every icon for the current size.
    ///
    /// Icons are sized to fit a box of `width / count` by `height` (floored
    /// by [`min_icon_size`](Self::min_icon_size)) while keeping the empty
    /// image's aspect ratio, then spread so the first icon touches the left
    /// edge and the last icon the right edge.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MissingEmptyImage`] if no empty image is set.
    pub fn layout_icons(&mut self) -> RatingResult<()> {
        let image_size = self
            .empty_image
            .as_ref()
            .map(Image::size)
            .ok_or(RatingError::MissingEmptyImage)?;

        let _span = tracing::debug_span!(target: targets::WIDGET, span_names::LAYOUT).entered();

        let container = self.base.size();
        let count = self.slots.len();
        let desired_width = container.width / count as f32;
        let box_size = Size::new(
            self.min_icon_size.width.max(desired_width),
            self.min_icon_size.height.max(container.height),
        );
        let icon_size = fit_icon_size(image_size, box_size);
        let x_gap = (container.width - icon_size.width * count as f32) / (count - 1) as f32;
        let y = (container.height - box_size.height) / 2.0;

        for (i, slot) in self.slots.iter_mut().enumerate() {
            let x = if i == 0 {
                0.0
            } else {
                i as f32 * (x_gap + icon_size.width)
            };
            slot.set_frame(Rect::new(x, y, icon_size.width, icon_size.height));
        }

        tracing::debug!(
            target: targets::WIDGET,
            width = container.width,
            height = container.height,
            icon_width = icon_size.width,
            icon_height = icon_size.height,
            x_gap,
            "laid out icons"
        );

        self.refresh();
        Ok(())
    }

    /// Lay out icons, deferring when no empty image is available yet.
    fn relayout(&mut self) {
        if let Err(err) = self.layout_icons() {
            tracing::debug!(target: targets::WIDGET, %err, "icon layout deferred");
        }
    }

    /// Recompute every full icon's visibility and mask from the rating.
    fn refresh(&mut self) {
        let rating = self.rating;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.apply_fill(IconFill::for_slot(rating, i));
        }
        self.base.update();
    }

    // =========================================================================
    // Pointer Handling
    // =========================================================================

    /// Convert a pointer position (widget coordinates) to a rating.
    ///
    /// The rightmost icon whose left edge lies left of the pointer decides
    /// the value. Inside that icon, half and float modes use the pointer's
    /// horizontal fraction across it; otherwise, or outside the icon, the
    /// icon counts as fully selected. Left of every icon the raw value is 0.
    /// The result is clamped to `[min_rating, max_rating]`.
    pub fn resolve_rating(&self, pos: Point) -> f64 {
        let mut raw = 0.0;

        for (i, slot) in self.slots.iter().enumerate().rev() {
            let frame = slot.frame();
            if pos.x <= frame.left() {
                continue;
            }

            let local = frame.map_to_local(pos);
            let mode = self.rating_mode();
            raw = if frame.bounds().contains(local) && mode != RatingMode::Whole {
                let fraction = local.x as f64 / frame.width() as f64;
                match mode {
                    RatingMode::Half => i as f64 + quantize_half(fraction),
                    _ => i as f64 + fraction,
                }
            } else {
                i as f64 + 1.0
            };
            break;
        }

        let rating = raw.clamp(self.min_rating as f64, self.max_rating as f64);
        tracing::trace!(target: targets::WIDGET, x = pos.x, y = pos.y, raw, rating, "resolved pointer rating");
        rating
    }

    /// Start an interaction at `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        self.interaction = InteractionState::Dragging;
        if self.editable {
            self.track_pointer(pos);
        }
    }

    /// Continue an interaction. Ignored unless a pointer is down.
    pub fn pointer_move(&mut self, pos: Point) {
        if self.interaction == InteractionState::Dragging && self.editable {
            self.track_pointer(pos);
        }
    }

    /// End an interaction and report the settled rating.
    ///
    /// Returns `false` if no interaction was in progress.
    pub fn pointer_up(&mut self) -> bool {
        if self.interaction != InteractionState::Dragging {
            return false;
        }
        self.interaction = InteractionState::Idle;

        let rating = self.rating;
        if let Some(delegate) = self.delegate() {
            delegate.rating_did_update(self.base.object_id(), rating);
        }
        self.rating_committed.emit(rating);
        true
    }

    /// Abandon an interaction without reporting it.
    pub fn pointer_cancel(&mut self) {
        self.interaction = InteractionState::Idle;
    }

    fn track_pointer(&mut self, pos: Point) {
        let rating = self.resolve_rating(pos);
        self.set_rating(rating);

        let rating = self.rating;
        if let Some(delegate) = self.delegate() {
            delegate.rating_is_updating(self.base.object_id(), rating);
        }
        self.rating_changing.emit(rating);
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the view into a fresh recording and return its commands.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::TRANSPARENT, self.base.size());
        let mut ctx = PaintContext::new(&mut renderer, self.base.rect());
        self.paint(&mut ctx);
        renderer.end_frame();
        renderer.take_commands()
    }
}

/// Snap a fraction of one icon to 0, 0.5 or 1.
fn quantize_half(fraction: f64) -> f64 {
    if fraction > 0.75 {
        1.0
    } else if fraction > 0.25 {
        0.5
    } else {
        0.0
    }
}

impl Default for RatingView {
    fn default() -> Self {
        Self::new()
    }
}

impl Object for RatingView {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for RatingView {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let count = self.max_rating as f32;
        SizeHint::from_dimensions(PREFERRED_ICON_EXTENT * count, PREFERRED_ICON_EXTENT)
            .with_minimum_dimensions(
                self.min_icon_size.width * count,
                self.min_icon_size.height,
            )
    }

    fn set_geometry(&mut self, rect: Rect) {
        let old_size = self.base.size();
        if self.base.set_geometry(rect) && rect.size != old_size {
            self.relayout();
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let _span = tracing::trace_span!(target: targets::WIDGET, span_names::PAINT).entered();
        for slot in &self.slots {
            slot.paint(ctx.renderer());
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        // Disabled views take no input; a drag in progress is abandoned.
        if !self.base.is_enabled() {
            self.pointer_cancel();
            return false;
        }

        let handled = match event {
            WidgetEvent::MousePress(e) if e.button == MouseButton::Left => {
                self.pointer_down(e.local_pos);
                true
            }
            WidgetEvent::MouseMove(e) => {
                let dragging = self.interaction == InteractionState::Dragging;
                self.pointer_move(e.local_pos);
                dragging
            }
            WidgetEvent::MouseRelease(e) if e.button == MouseButton::Left => self.pointer_up(),
            WidgetEvent::Touch(e) => match (e.phase, e.first().map(|p| p.local_pos)) {
                (TouchPhase::Started, Some(pos)) => {
                    self.pointer_down(pos);
                    true
                }
                (TouchPhase::Moved, Some(pos)) => {
                    self.pointer_move(pos);
                    true
                }
                (TouchPhase::Ended, _) => self.pointer_up(),
                (TouchPhase::Cancelled, _) => {
                    self.pointer_cancel();
                    true
                }
                _ => false,
            },
            _ => false,
        };

        if handled {
            event.accept();
        }
        handled
    }
}

// Ensure RatingView is Send + Sync
static_assertions::assert_impl_all!(RatingView: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{MousePressEvent, MouseReleaseEvent};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const EPSILON: f64 = 1e-5;

    /// Five square icons across a 150x30 view: each icon is 30x30, no gaps.
    fn stars() -> RatingView {
        let mut view = RatingView::new()
            .with_empty_image(Image::with_size(10, 10).unwrap())
            .with_full_image(Image::with_size(10, 10).unwrap());
        view.set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
        view
    }

    /// Pointer position `fraction` of the way across the icon at `index`.
    fn across(view: &RatingView, index: usize, fraction: f32) -> Point {
        let frame = view.slots()[index].frame();
        Point::new(
            frame.left() + frame.width() * fraction,
            frame.top() + frame.height() / 2.0,
        )
    }

    #[derive(Default)]
    struct Recorder {
        updating: Mutex<Vec<f64>>,
        updated: Mutex<Vec<f64>>,
    }

    impl RatingViewDelegate for Recorder {
        fn rating_did_update(&self, _view: ObjectId, rating: f64) {
            self.updated.lock().push(rating);
        }

        fn rating_is_updating(&self, _view: ObjectId, rating: f64) {
            self.updating.lock().push(rating);
        }
    }

    struct CommitOnly(AtomicUsize);

    impl RatingViewDelegate for CommitOnly {
        fn rating_did_update(&self, _view: ObjectId, _rating: f64) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_defaults() {
        let view = RatingView::new();
        assert_eq!(view.min_rating(), 0);
        assert_eq!(view.max_rating(), 5);
        assert_eq!(view.rating(), 0.0);
        assert!(view.editable());
        assert!(!view.half_ratings());
        assert!(!view.float_ratings());
        assert_eq!(view.rating_mode(), RatingMode::Whole);
        assert_eq!(view.min_icon_size(), Size::new(5.0, 5.0));
        assert_eq!(view.slots().len(), 5);
        assert_eq!(view.icon_scale_mode(), ImageScaleMode::Fit);
        assert_eq!(view.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn test_fit_icon_size() {
        // Narrow image in a wide box: height-bound.
        assert_eq!(
            fit_icon_size(Size::new(10.0, 20.0), Size::new(40.0, 40.0)),
            Size::new(20.0, 40.0)
        );
        // Wide image in a tall box: width-bound.
        assert_eq!(
            fit_icon_size(Size::new(20.0, 10.0), Size::new(30.0, 60.0)),
            Size::new(30.0, 15.0)
        );
        assert_eq!(
            fit_icon_size(Size::new(10.0, 10.0), Size::new(30.0, 30.0)),
            Size::new(30.0, 30.0)
        );
    }

    #[test]
    fn test_layout_spreads_icons_edge_to_edge() {
        let mut view = RatingView::new().with_empty_image(Image::with_size(10, 10).unwrap());
        view.set_geometry(Rect::new(0.0, 0.0, 200.0, 20.0));

        // Box is 40x20, square icons are 20x20, gap (200 - 100) / 4 = 25.
        let xs: Vec<f32> = view.slots().iter().map(|s| s.frame().left()).collect();
        assert_eq!(xs, vec![0.0, 45.0, 90.0, 135.0, 180.0]);
        for slot in view.slots() {
            assert_eq!(slot.frame().size, Size::new(20.0, 20.0));
            assert_eq!(slot.frame().top(), 0.0);
            assert_eq!(slot.empty().frame(), slot.full().frame());
        }
        assert_eq!(view.slots()[4].frame().right(), 200.0);
    }

    #[test]
    fn test_layout_honors_min_icon_size() {
        let mut view = RatingView::new().with_empty_image(Image::with_size(10, 10).unwrap());
        view.set_min_icon_size(Size::new(40.0, 40.0)).unwrap();
        view.set_geometry(Rect::new(0.0, 0.0, 100.0, 20.0));

        // Box floors to 40x40, so icons are 40x40 and overlap; y centers the box.
        let first = view.slots()[0].frame();
        assert_eq!(first, Rect::new(0.0, -10.0, 40.0, 40.0));
        let gap = (100.0 - 200.0) / 4.0;
        assert_eq!(view.slots()[1].frame().left(), gap + 40.0);
    }

    #[test]
    fn test_layout_without_empty_image_is_an_error() {
        let mut view = RatingView::new();
        view.set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
        assert!(matches!(
            view.layout_icons(),
            Err(RatingError::MissingEmptyImage)
        ));
        assert!(view.slots().iter().all(|s| s.frame() == Rect::ZERO));

        // Assigning the image performs the deferred layout.
        view.set_empty_image(Some(Image::with_size(10, 10).unwrap()));
        assert_eq!(view.slots()[1].frame(), Rect::new(30.0, 0.0, 30.0, 30.0));
    }

    #[test]
    fn test_fill_for_fractional_rating() {
        let view = stars().with_rating(2.5);
        let slots = view.slots();

        for slot in &slots[..2] {
            assert!(!slot.full().is_hidden());
            assert_eq!(slot.full().mask(), None);
        }
        assert!(!slots[2].full().is_hidden());
        assert_eq!(slots[2].full().mask(), Some(Rect::new(0.0, 0.0, 15.0, 30.0)));
        for slot in &slots[3..] {
            assert!(slot.full().is_hidden());
            assert_eq!(slot.full().mask(), None);
        }
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut view = stars().with_rating(3.3);
        let before: Vec<_> = view
            .slots()
            .iter()
            .map(|s| (s.full().is_hidden(), s.full().mask()))
            .collect();
        view.refresh();
        view.refresh();
        let after: Vec<_> = view
            .slots()
            .iter()
            .map(|s| (s.full().is_hidden(), s.full().mask()))
            .collect();
        assert_eq!(before, after);
        assert_eq!(view.draw_commands(), view.draw_commands());
    }

    #[test]
    fn test_set_rating_clamps_and_emits_on_change() {
        let mut view = stars();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let changes_clone = changes.clone();
        view.rating_changed.connect(move |&r| changes_clone.lock().push(r));

        view.set_rating(7.0);
        assert_eq!(view.rating(), 5.0);
        view.set_rating(5.0);
        view.set_rating(-1.0);
        assert_eq!(view.rating(), 0.0);
        view.set_rating(f64::NAN);
        assert_eq!(view.rating(), 0.0);

        assert_eq!(*changes.lock(), vec![5.0, 0.0]);
    }

    #[test]
    fn test_set_max_rating_same_value_is_noop() {
        let mut view = stars();
        let ids: Vec<_> = view.slots().iter().map(|s| s.empty().id()).collect();
        view.set_max_rating(5).unwrap();
        let after: Vec<_> = view.slots().iter().map(|s| s.empty().id()).collect();
        assert_eq!(ids, after);
    }

    #[test]
    fn test_set_max_rating_rebuilds_slots() {
        let mut view = stars().with_rating(4.5);
        let old_ids: Vec<_> = view.slots().iter().map(|s| s.full().id()).collect();

        view.set_max_rating(3).unwrap();
        assert_eq!(view.slots().len(), 3);
        assert!(view
            .slots()
            .iter()
            .all(|s| !old_ids.contains(&s.full().id())));
        assert_eq!(view.rating(), 3.0);
        // New slots carry the current images and are laid out.
        assert!(view.slots().iter().all(|s| s.empty().image().is_some()));
        assert_eq!(view.slots()[2].frame().right(), 150.0);

        view.set_max_rating(10).unwrap();
        assert_eq!(view.slots().len(), 10);
    }

    #[test]
    fn test_invalid_range_is_rejected() {
        let mut view = stars();
        assert!(matches!(view.set_max_rating(1), Err(RatingError::TooFewIcons(1))));
        assert!(matches!(view.set_max_rating(0), Err(RatingError::TooFewIcons(0))));
        assert!(matches!(
            view.set_min_rating(5),
            Err(RatingError::InvalidRange { min: 5, max: 5 })
        ));
        assert!(matches!(
            view.set_min_rating(-1),
            Err(RatingError::NegativeMinimum(-1))
        ));
        view.set_min_rating(3).unwrap();
        assert!(matches!(
            view.set_max_rating(3),
            Err(RatingError::InvalidRange { min: 3, max: 3 })
        ));
        assert_eq!(view.max_rating(), 5);
        assert_eq!(view.slots().len(), 5);
    }

    #[test]
    fn test_icon_count_is_capped() {
        let mut view = stars();
        assert!(matches!(
            view.set_max_rating(i32::MAX),
            Err(RatingError::TooManyIcons { limit: MAX_ICON_COUNT, .. })
        ));
        assert!(matches!(
            view.set_max_rating(MAX_ICON_COUNT + 1),
            Err(RatingError::TooManyIcons { .. })
        ));
        assert_eq!(view.slots().len(), 5);

        view.set_max_rating(MAX_ICON_COUNT).unwrap();
        assert_eq!(view.slots().len(), MAX_ICON_COUNT as usize);
    }

    #[test]
    fn test_raising_min_rating_lifts_rating() {
        let mut view = stars().with_rating(1.0);
        view.set_min_rating(2).unwrap();
        assert_eq!(view.rating(), 2.0);
    }

    #[test]
    fn test_invalid_min_icon_size() {
        let mut view = stars();
        assert!(view.set_min_icon_size(Size::new(0.0, 5.0)).is_err());
        assert!(view.set_min_icon_size(Size::new(5.0, f32::NAN)).is_err());
        assert_eq!(view.min_icon_size(), DEFAULT_MIN_ICON_SIZE);
    }

    #[test]
    fn test_image_swap_keeps_slots() {
        let mut view = stars();
        let ids: Vec<_> = view.slots().iter().map(|s| s.full().id()).collect();
        let gold = Image::with_size(10, 10).unwrap();
        view.set_full_image(Some(gold.clone()));

        let after: Vec<_> = view.slots().iter().map(|s| s.full().id()).collect();
        assert_eq!(ids, after);
        assert!(view.slots().iter().all(|s| s.full().image() == Some(&gold)));
    }

    #[test]
    fn test_resolve_half_rating_thresholds() {
        let mut view = stars();
        view.set_half_ratings(true);
        // Past a quarter of the icon rounds to the half.
        let rating = view.resolve_rating(across(&view, 2, 0.3));
        assert!((rating - 2.5).abs() < EPSILON, "got {rating}");
        let rating = view.resolve_rating(across(&view, 2, 0.2));
        assert!((rating - 2.0).abs() < EPSILON, "got {rating}");
        let rating = view.resolve_rating(across(&view, 2, 0.8));
        assert!((rating - 3.0).abs() < EPSILON, "got {rating}");
    }

    #[test]
    fn test_resolve_float_rating_scenario() {
        let mut view = stars();
        view.set_float_ratings(true);
        let rating = view.resolve_rating(across(&view, 3, 0.42));
        assert!((rating - 3.42).abs() < EPSILON, "got {rating}");
    }

    #[test]
    fn test_resolve_float_follows_pointer_fraction() {
        let mut view = stars();
        view.set_float_ratings(true);

        for (i, slot) in view.slots().iter().enumerate() {
            let frame = slot.frame();
            let mut x = frame.left() + 0.25;
            while x < frame.right() {
                let rating = view.resolve_rating(Point::new(x, frame.top() + 1.0));
                let expected = ((x - frame.left()) / frame.width()) as f64;
                assert!(
                    (rating - i as f64 - expected).abs() < EPSILON,
                    "slot={i} x={x} rating={rating}"
                );
                x += 0.75;
            }
        }
    }

    #[test]
    fn test_resolve_whole_rating_scenario() {
        let view = stars();
        for fraction in [0.05, 0.5, 0.95] {
            assert_eq!(view.resolve_rating(across(&view, 1, fraction)), 2.0);
        }
    }

    #[test]
    fn test_resolve_clamps_to_min_rating() {
        let mut view = stars();
        view.set_min_rating(2).unwrap();
        assert_eq!(view.resolve_rating(Point::new(0.0, 15.0)), 2.0);
        assert_eq!(view.resolve_rating(Point::new(-20.0, 15.0)), 2.0);
    }

    #[test]
    fn test_resolve_half_values_are_quantized() {
        let mut view = stars();
        view.set_half_ratings(true);
        view.set_float_ratings(true);
        assert_eq!(view.rating_mode(), RatingMode::Half);

        let mut x = 0.5;
        while x < 150.0 {
            let rating = view.resolve_rating(Point::new(x, 15.0));
            let fraction = rating - rating.floor();
            assert!(fraction == 0.0 || fraction == 0.5, "x={x} rating={rating}");
            x += 1.7;
        }
        assert_eq!(view.resolve_rating(across(&view, 0, 0.8)), 1.0);
        assert_eq!(view.resolve_rating(across(&view, 0, 0.5)), 0.5);
    }

    #[test]
    fn test_resolve_outside_icon_counts_whole() {
        let mut view = stars();
        view.set_float_ratings(true);
        // Beyond the last icon and below the icon row both select the icon.
        assert_eq!(view.resolve_rating(Point::new(400.0, 15.0)), 5.0);
        assert_eq!(view.resolve_rating(Point::new(70.0, 45.0)), 3.0);
    }

    #[test]
    fn test_rating_mode_round_trip() {
        let mut view = RatingView::new();
        for mode in [RatingMode::Half, RatingMode::Float, RatingMode::Whole] {
            view.set_rating_mode(mode);
            assert_eq!(view.rating_mode(), mode);
        }
    }

    #[test]
    fn test_drag_notifies_delegate_and_signals() {
        let mut view = stars();
        view.set_rating_mode(RatingMode::Half);
        let recorder = Arc::new(Recorder::default());
        view.set_delegate(&recorder);

        let committed = Arc::new(Mutex::new(Vec::new()));
        let committed_clone = committed.clone();
        view.rating_committed
            .connect(move |&r| committed_clone.lock().push(r));

        view.pointer_down(across(&view, 0, 0.9));
        assert_eq!(view.interaction_state(), InteractionState::Dragging);
        view.pointer_move(across(&view, 2, 0.5));
        view.pointer_move(across(&view, 2, 0.5));
        assert!(view.pointer_up());

        assert_eq!(*recorder.updating.lock(), vec![1.0, 2.5, 2.5]);
        assert_eq!(*recorder.updated.lock(), vec![2.5]);
        assert_eq!(*committed.lock(), vec![2.5]);
        assert_eq!(view.interaction_state(), InteractionState::Idle);
        assert!(!view.pointer_up());
    }

    #[test]
    fn test_optional_updating_callback() {
        let mut view = stars();
        let delegate = Arc::new(CommitOnly(AtomicUsize::new(0)));
        view.set_delegate(&delegate);

        view.pointer_down(across(&view, 3, 0.5));
        view.pointer_up();
        assert_eq!(delegate.0.load(Ordering::SeqCst), 1);
        assert_eq!(view.rating(), 4.0);
    }

    #[test]
    fn test_delegate_is_weak() {
        let mut view = stars();
        let recorder = Arc::new(Recorder::default());
        view.set_delegate(&recorder);
        assert!(view.delegate().is_some());
        drop(recorder);
        assert!(view.delegate().is_none());

        let other = Arc::new(Recorder::default());
        view.set_delegate(&other);
        view.clear_delegate();
        assert!(view.delegate().is_none());

        view.pointer_down(Point::new(10.0, 10.0));
        assert!(view.pointer_up());
    }

    #[test]
    fn test_read_only_view_still_commits() {
        let mut view = stars().with_rating(2.0).with_editable(false);
        let recorder = Arc::new(Recorder::default());
        view.set_delegate(&recorder);

        view.pointer_down(across(&view, 4, 0.5));
        view.pointer_move(across(&view, 0, 0.5));
        view.pointer_up();

        assert_eq!(view.rating(), 2.0);
        assert!(recorder.updating.lock().is_empty());
        assert_eq!(*recorder.updated.lock(), vec![2.0]);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut view = stars();
        view.pointer_move(across(&view, 4, 0.5));
        assert_eq!(view.rating(), 0.0);
    }

    #[test]
    fn test_cancel_does_not_commit() {
        let mut view = stars();
        let recorder = Arc::new(Recorder::default());
        view.set_delegate(&recorder);

        view.pointer_down(across(&view, 2, 0.5));
        view.pointer_cancel();
        assert!(!view.pointer_up());
        assert!(recorder.updated.lock().is_empty());
        assert_eq!(view.rating(), 3.0);
    }

    #[test]
    fn test_disabled_view_ignores_input() {
        let mut view = stars();
        view.set_enabled(false);

        let mut press = WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            across(&view, 4, 0.5),
        ));
        assert!(!view.event(&mut press));
        assert!(!press.is_accepted());
        assert_eq!(view.rating(), 0.0);
        assert_eq!(view.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn test_disabling_mid_drag_abandons_it() {
        let mut view = stars();
        let recorder = Arc::new(Recorder::default());
        view.set_delegate(&recorder);

        view.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
            MouseButton::Left,
            across(&view, 1, 0.5),
        )));
        view.set_enabled(false);
        let mut release = WidgetEvent::MouseRelease(MouseReleaseEvent::new(
            MouseButton::Left,
            across(&view, 1, 0.5),
        ));
        assert!(!view.event(&mut release));

        assert_eq!(view.rating(), 2.0);
        assert!(recorder.updated.lock().is_empty());
        assert_eq!(view.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn test_size_hint() {
        let view = RatingView::new();
        let hint = view.size_hint();
        assert_eq!(hint.preferred, Size::new(150.0, 30.0));
        assert_eq!(hint.minimum, Some(Size::new(25.0, 5.0)));
    }

    #[test]
    fn test_changes_request_repaint() {
        let mut view = stars();
        view.widget_base_mut().clear_repaint();
        view.set_rating(1.0);
        assert!(view.widget_base().needs_repaint());
    }
}
