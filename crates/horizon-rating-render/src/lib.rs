//! Rendering interface for Horizon Rating.
//!
//! This crate provides:
//!
//! - Geometry and color types ([`Point`], [`Size`], [`Rect`], [`Color`])
//! - Image assets ([`Image`]) decoded with the `image` crate
//! - The [`Renderer`] trait, the 2D drawing interface widgets paint through
//! - [`RecordingRenderer`], a renderer that records [`DrawCommand`]s so the
//!   output of a paint pass can be inspected or replayed by a backend
//!
//! # Example
//!
//! ```
//! use horizon_rating_render::{Color, RecordingRenderer, Rect, Renderer, Size};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::WHITE, Size::new(200.0, 40.0));
//! renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 1);
//! ```

mod error;
mod image;
mod recording;
mod renderer;
mod types;

pub use error::{RenderError, RenderResult};
pub use image::{Image, ImageScaleMode};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, Renderer};
pub use types::{Color, Point, Rect, Size};
