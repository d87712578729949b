//! TOML configuration for rating views.
//!
//! A [`RatingViewConfig`] describes every settable property of a
//! [`RatingView`]. Missing keys take the widget defaults.
//!
//! ```ignore
//! use horizon_rating::config::RatingViewConfig;
//! use horizon_rating::widget::widgets::RatingView;
//!
//! let config = RatingViewConfig::from_toml_str(r#"
//! max_rating = 10
//! rating = 6.5
//! half_ratings = true
//! empty_image = "assets/star_empty.png"
//! full_image = "assets/star_full.png"
//! "#)?;
//!
//! let view = RatingView::from_config(&config)?;
//! ```

use std::path::{Path, PathBuf};

use horizon_rating_core::logging::targets;
use horizon_rating_render::{Image, Size};
use serde::{Deserialize, Serialize};

use crate::error::{RatingError, RatingResult};
use crate::widget::widgets::{
    RatingView, DEFAULT_MAX_RATING, DEFAULT_MIN_ICON_SIZE, DEFAULT_MIN_RATING, MAX_ICON_COUNT,
};

/// Serializable rating view settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingViewConfig {
    pub min_rating: i32,
    pub max_rating: i32,
    pub rating: f64,
    pub editable: bool,
    pub half_ratings: bool,
    pub float_ratings: bool,
    /// Minimum icon box as `[width, height]`.
    pub min_icon_size: [f32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_image: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_image: Option<PathBuf>,
}

impl Default for RatingViewConfig {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
            rating: DEFAULT_MIN_RATING as f64,
            editable: true,
            half_ratings: false,
            float_ratings: false,
            min_icon_size: [DEFAULT_MIN_ICON_SIZE.width, DEFAULT_MIN_ICON_SIZE.height],
            empty_image: None,
            full_image: None,
        }
    }
}

impl RatingViewConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> RatingResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a configuration file.
    ///
    /// Relative image paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> RatingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RatingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.resolve_paths(dir);
        }

        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded rating view configuration");
        Ok(config)
    }

    /// Serialize the configuration to TOML text.
    pub fn to_toml_string(&self) -> RatingResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check the configuration against the widget's invariants.
    pub fn validate(&self) -> RatingResult<()> {
        if self.max_rating < 2 {
            return Err(RatingError::TooFewIcons(self.max_rating));
        }
        if self.max_rating > MAX_ICON_COUNT {
            return Err(RatingError::TooManyIcons {
                max: self.max_rating,
                limit: MAX_ICON_COUNT,
            });
        }
        if self.min_rating < 0 {
            return Err(RatingError::NegativeMinimum(self.min_rating));
        }
        if self.min_rating >= self.max_rating {
            return Err(RatingError::InvalidRange {
                min: self.min_rating,
                max: self.max_rating,
            });
        }

        let [width, height] = self.min_icon_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RatingError::InvalidIconSize { width, height });
        }
        Ok(())
    }

    fn resolve_paths(&mut self, dir: &Path) {
        for image in [&mut self.empty_image, &mut self.full_image]
            .into_iter()
            .flatten()
        {
            if image.is_relative() {
                *image = dir.join(&*image);
            }
        }
    }
}

impl RatingView {
    /// Build a rating view from a validated configuration, loading its
    /// image files.
    pub fn from_config(config: &RatingViewConfig) -> RatingResult<Self> {
        config.validate()?;

        let mut view = RatingView::new();
        view.set_max_rating(config.max_rating)?;
        view.set_min_rating(config.min_rating)?;
        view.set_min_icon_size(Size::new(config.min_icon_size[0], config.min_icon_size[1]))?;
        view.set_editable(config.editable);
        view.set_half_ratings(config.half_ratings);
        view.set_float_ratings(config.float_ratings);

        if let Some(path) = &config.empty_image {
            view.set_empty_image(Some(Image::from_file(path)?));
        }
        if let Some(path) = &config.full_image {
            view.set_full_image(Some(Image::from_file(path)?));
        }

        view.set_rating(config.rating);
        Ok(view)
    }
}
