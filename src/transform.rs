//! Decode, resize and tensorize pipeline.
//!
//! Both sides of a pair go through the same [`TransformConfig`]: decode to a
//! fixed pixel layout, resize to a square, then convert to a channel-first
//! `f32` array scaled to `[0, 1]`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use thermal_pairs::transform::{Resample, TransformConfig};
//!
//! let config = TransformConfig::builder()
//!     .image_size(128)
//!     .filter(Resample::Lanczos3)
//!     .build()?;
//!
//! let rgb = thermal_pairs::transform::load_rgb("rgb/img001.jpg", &config)?;
//! assert_eq!(rgb.shape(), &[3, 128, 128]);
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, ImageReader, Pixel};
use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default square side length.
pub const DEFAULT_IMAGE_SIZE: u32 = 256;

/// Resampling filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resample {
    /// Nearest neighbour.
    Nearest,
    /// Linear interpolation (triangle filter).
    #[default]
    Bilinear,
    /// Cubic interpolation (Catmull-Rom).
    Bicubic,
    /// Gaussian filter.
    Gaussian,
    /// Lanczos with window 3.
    Lanczos3,
}

impl Resample {
    /// All filters, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Nearest,
        Self::Bilinear,
        Self::Bicubic,
        Self::Gaussian,
        Self::Lanczos3,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Gaussian => "gaussian",
            Self::Lanczos3 => "lanczos3",
        }
    }

    fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Bilinear => FilterType::Triangle,
            Self::Bicubic => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for Resample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "linear" | "triangle" => Ok(Self::Bilinear),
            "cubic" | "catmullrom" | "catmull-rom" => Ok(Self::Bicubic),
            "lanczos" => Ok(Self::Lanczos3),
            _ => Self::ALL
                .into_iter()
                .find(|f| f.name() == lower)
                .ok_or_else(|| Error::UnknownFilter(s.to_string())),
        }
    }
}

/// Resize and tensorize settings shared by both sides of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Output side length; samples are `image_size x image_size`.
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Resampling filter.
    #[serde(default)]
    pub filter: Resample,
}

fn default_image_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            filter: Resample::default(),
        }
    }
}

impl TransformConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }

    /// Reject configurations that cannot produce a sample.
    pub fn validate(&self) -> Result<()> {
        if self.image_size == 0 {
            return Err(Error::InvalidImageSize(self.image_size));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`TransformConfig`].
#[derive(Debug, Default)]
pub struct TransformConfigBuilder {
    image_size: Option<u32>,
    filter: Option<Resample>,
}

impl TransformConfigBuilder {
    /// Set the output side length.
    #[must_use]
    pub fn image_size(mut self, size: u32) -> Self {
        self.image_size = Some(size);
        self
    }

    /// Set the resampling filter.
    #[must_use]
    pub fn filter(mut self, filter: Resample) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<TransformConfig> {
        let config = TransformConfig {
            image_size: self.image_size.unwrap_or(DEFAULT_IMAGE_SIZE),
            filter: self.filter.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Decode by content, not extension; a JPEG saved as `.png` still loads.
fn decode(path: &Path) -> Result<DynamicImage> {
    let decode_error = |reason: String| Error::ImageDecode {
        path: path.to_path_buf(),
        reason,
    };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))
}

/// Load an image as a `(3, size, size)` RGB array.
pub fn load_rgb(path: impl AsRef<Path>, config: &TransformConfig) -> Result<Array3<f32>> {
    resize_to_chw(decode(path.as_ref())?.to_rgb8(), config)
}

/// Load an image as a `(1, size, size)` greyscale array.
pub fn load_thermal(path: impl AsRef<Path>, config: &TransformConfig) -> Result<Array3<f32>> {
    resize_to_chw(decode(path.as_ref())?.to_luma8(), config)
}

/// Resize an 8-bit image to the configured square and tensorize it.
pub fn resize_to_chw<P>(image: ImageBuffer<P, Vec<u8>>, config: &TransformConfig) -> Result<Array3<f32>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let size = config.image_size;
    if image.dimensions() == (size, size) {
        return to_chw(image);
    }
    to_chw(imageops::resize(&image, size, size, config.filter.filter_type()))
}

/// Convert an 8-bit image to a standard-layout channel-first array scaled to `[0, 1]`.
pub fn to_chw<P>(image: ImageBuffer<P, Vec<u8>>) -> Result<Array3<f32>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let channels = usize::from(P::CHANNEL_COUNT);
    let hwc = Array3::from_shape_vec((height as usize, width as usize, channels), image.into_raw())?;
    let chw = hwc.permuted_axes([2, 0, 1]);
    Ok(chw.as_standard_layout().mapv(|v| f32::from(v) / 255.0))
}
