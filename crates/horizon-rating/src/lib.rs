//! Horizon Rating - a star/icon rating widget.
//!
//! [`RatingView`](widget::widgets::RatingView) shows a rating as a row of
//! icons. Each icon is an "empty" image with a "full" image drawn over it;
//! fractional ratings reveal the left part of the full image. Users change
//! the rating by pressing and dragging, in whole, half or continuous steps.
//!
//! This is the main umbrella crate that re-exports the core and render
//! crates.
//!
//! # Example
//!
//! ```
//! use horizon_rating::prelude::*;
//!
//! let mut view = RatingView::new()
//!     .with_empty_image(Image::with_size(16, 16).unwrap())
//!     .with_full_image(Image::with_size(16, 16).unwrap())
//!     .with_rating_mode(RatingMode::Half);
//! view.set_geometry(Rect::new(0.0, 0.0, 150.0, 30.0));
//!
//! // Press at the middle of the third star.
//! let mut press = WidgetEvent::MousePress(MousePressEvent::new(
//!     MouseButton::Left,
//!     Point::new(75.0, 15.0),
//! ));
//! view.event(&mut press);
//! assert_eq!(view.rating(), 2.5);
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod widget;

pub use horizon_rating_core::*;

/// Graphics rendering module.
pub mod render {
    pub use horizon_rating_render::*;
}

pub use config::RatingViewConfig;
pub use error::{RatingError, RatingResult};
