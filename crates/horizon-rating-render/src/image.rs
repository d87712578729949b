//! Image assets.
//!
//! An [`Image`] is a cheaply clonable handle to decoded RGBA pixel data.
//! Clones share the same pixels and compare equal; two separately loaded
//! images never do, even if their pixels are identical.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::RgbaImage;

use crate::error::{RenderError, RenderResult};
use crate::types::{Rect, Size};

static NEXT_IMAGE_ID: AtomicU64 = AtomicU64::new(1);

/// A decoded image ready for drawing.
#[derive(Clone)]
pub struct Image {
    id: u64,
    width: u32,
    height: u32,
    /// Decoded pixels. `None` for size-only images used by layout-only hosts.
    pixels: Option<Arc<RgbaImage>>,
}

impl Image {
    fn from_rgba_image(pixels: RgbaImage) -> RenderResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            pixels: Some(Arc::new(pixels)),
        })
    }

    /// Load and decode an image file (format detected from the content).
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| RenderError::ImageLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            target: "horizon_rating_render::image",
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "loaded image"
        );
        Self::from_rgba_image(decoded.to_rgba8())
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        Self::from_rgba_image(decoded.to_rgba8())
    }

    /// Wrap raw RGBA8 pixel data.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> RenderResult<Self> {
        let pixels = RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidDimensions { width, height })?;
        Self::from_rgba_image(pixels)
    }

    /// Create an image that only carries dimensions, without pixel data.
    pub fn with_size(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: NEXT_IMAGE_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            pixels: None,
        })
    }

    /// Identity shared by all clones of this image.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// The decoded pixels, if this image carries any.
    pub fn pixels(&self) -> Option<&RgbaImage> {
        self.pixels.as_deref()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Image {}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_pixels", &self.pixels.is_some())
            .finish()
    }
}

/// How an image is scaled into a destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScaleMode {
    /// Stretch the image to fill the destination rectangle.
    /// This may distort the image's aspect ratio.
    Stretch,

    /// Scale the image to fit within the destination rectangle while
    /// maintaining aspect ratio, centered.
    #[default]
    Fit,

    /// Scale the image to cover the destination rectangle while maintaining
    /// aspect ratio, centered. The excess is cropped.
    Fill,
}

impl ImageScaleMode {
    /// Compute where an image of `image_size` lands inside `dest`.
    pub fn place(self, image_size: Size, dest: Rect) -> Rect {
        if image_size.is_empty() || dest.is_empty() {
            return dest;
        }

        let sx = dest.width() / image_size.width;
        let sy = dest.height() / image_size.height;
        let scale = match self {
            ImageScaleMode::Stretch => return dest,
            ImageScaleMode::Fit => sx.min(sy),
            ImageScaleMode::Fill => sx.max(sy),
        };

        let width = image_size.width * scale;
        let height = image_size.height * scale;
        Rect::new(
            dest.left() + (dest.width() - width) / 2.0,
            dest.top() + (dest.height() - height) / 2.0,
            width,
            height,
        )
    }
}
