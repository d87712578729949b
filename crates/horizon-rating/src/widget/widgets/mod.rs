//! Standard widgets for Horizon Rating.
//!
//! - [`RatingView`]: A row of icons showing an editable rating
//! - [`IconSlot`]: One rating unit (empty icon plus full overlay)

mod icon_view;
mod rating_view;

pub use icon_view::{IconFill, IconSlot, IconView};
pub use rating_view::{
    fit_icon_size, InteractionState, RatingMode, RatingView, RatingViewDelegate,
    DEFAULT_MAX_RATING, DEFAULT_MIN_ICON_SIZE, DEFAULT_MIN_RATING, MAX_ICON_COUNT,
};
