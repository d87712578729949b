//! Error types for the rating widget.

use std::path::PathBuf;

use horizon_rating_render::RenderError;
use thiserror::Error;

/// Errors raised when configuring or laying out a rating view.
#[derive(Error, Debug)]
pub enum RatingError {
    /// The maximum rating does not exceed the minimum rating.
    #[error("max rating ({max}) must be greater than min rating ({min})")]
    InvalidRange { min: i32, max: i32 },

    /// Fewer than two icons; icon spacing is undefined.
    #[error("max rating must be at least 2, got {0}")]
    TooFewIcons(i32),

    /// More icons than the view supports.
    #[error("max rating must be at most {limit}, got {max}")]
    TooManyIcons { max: i32, limit: i32 },

    /// The minimum rating is negative.
    #[error("min rating must not be negative, got {0}")]
    NegativeMinimum(i32),

    /// The minimum icon size is not a positive, finite size.
    #[error("invalid minimum icon size: {width}x{height}")]
    InvalidIconSize { width: f32, height: f32 },

    /// Layout was requested before an empty image was assigned.
    #[error("no empty image set; icon layout needs its aspect ratio")]
    MissingEmptyImage,

    /// An image asset could not be loaded.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A configuration file could not be parsed.
    #[error("invalid rating view configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configuration could not be serialized.
    #[error("failed to serialize rating view configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for rating view operations.
pub type RatingResult<T> = Result<T, RatingError>;
