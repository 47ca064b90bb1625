//! Still-capture pipeline
//!
//! Renders the current live frame onto a surface and encodes it, returning
//! an in-memory encoded representation plus capture-time metadata. The
//! whole pipeline is synchronous and settles before the caller proceeds;
//! option validation happens before any surface is touched, so a contract
//! violation never draws.

use crate::error::{MediaError, MediaResult};
use crate::frame::VideoFrame;
use crate::surface::{RasterSurfaceProvider, SurfaceProvider};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Default encoding quality applied to lossy captures
pub const DEFAULT_JPEG_QUALITY: f64 = 0.92;

/// Recognized still-image encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Lossless PNG
    Png,
    /// Lossy JPEG
    #[serde(alias = "jpeg")]
    Jpg,
}

impl ImageType {
    /// MIME type of the encoding
    pub fn mime(&self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpg => "image/jpeg",
        }
    }

    /// Whether the encoding discards information and honors a quality
    pub fn is_lossy(&self) -> bool {
        matches!(self, ImageType::Jpg)
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageType::Png => f.write_str("png"),
            ImageType::Jpg => f.write_str("jpg"),
        }
    }
}

impl FromStr for ImageType {
    type Err = MediaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "png" => Ok(ImageType::Png),
            "jpg" | "jpeg" => Ok(ImageType::Jpg),
            other => Err(MediaError::UnsupportedImageType {
                requested: other.to_string(),
            }),
        }
    }
}

/// Derived output dimensions for a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl ImageSize {
    /// Output size for a source frame scaled by `scale`.
    ///
    /// Width is the scaled source width; height derives from the computed
    /// width so the source aspect ratio is preserved.
    pub fn from_scale(source_width: u32, source_height: u32, scale: f64) -> MediaResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MediaError::InvalidScale { scale });
        }
        let width = (source_width as f64 * scale).round();
        let height = (source_height as f64 * (width / source_width as f64)).round();
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }
}

/// Callback invoked synchronously with each finished capture
pub type CaptureCallback = Box<dyn Fn(&CapturedPicture) + Send + Sync>;

/// Normalized capture request. Unspecified fields fall back to defaults.
pub struct CaptureOptions {
    /// Output scale relative to the source frame, default `1.0`
    pub scale: f64,
    /// Target encoding, default PNG
    pub image_type: ImageType,
    /// Encoding quality in `[0, 1]`; meaningful only for lossy formats,
    /// where it defaults to [`DEFAULT_JPEG_QUALITY`]
    pub quality: Option<f64>,
    /// Horizontally mirror the rendered image, default off
    pub mirror: bool,
    /// Invoked with the result before `capture` returns
    pub on_captured: Option<CaptureCallback>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            image_type: ImageType::Png,
            quality: None,
            mirror: false,
            on_captured: None,
        }
    }
}

impl CaptureOptions {
    /// Options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output scale
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set the target encoding
    pub fn with_image_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }

    /// Set the encoding quality
    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Mirror the rendered image horizontally
    pub fn mirrored(mut self) -> Self {
        self.mirror = true;
        self
    }

    /// Set the post-capture callback
    pub fn on_captured<F>(mut self, callback: F) -> Self
    where
        F: Fn(&CapturedPicture) + Send + Sync + 'static,
    {
        self.on_captured = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for CaptureOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureOptions")
            .field("scale", &self.scale)
            .field("image_type", &self.image_type)
            .field("quality", &self.quality)
            .field("mirror", &self.mirror)
            .field("on_captured", &self.on_captured.is_some())
            .finish()
    }
}

/// Result of one capture: encoded payload plus capture-time metadata.
/// Created fresh per capture and owned by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedPicture {
    /// Data URI carrying the encoded image
    pub uri: String,
    /// Base64-encoded image payload
    pub payload: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Device settings active at capture time, if known
    pub device_settings: Option<serde_json::Value>,
    /// When the capture settled
    pub captured_at: DateTime<Utc>,
}

/// Renders live frames into encoded still images
#[derive(Clone)]
pub struct CapturePipeline {
    provider: Arc<dyn SurfaceProvider>,
}

impl CapturePipeline {
    /// Pipeline drawing onto surfaces from the given provider
    pub fn new(provider: Arc<dyn SurfaceProvider>) -> Self {
        Self { provider }
    }

    /// Pipeline drawing onto in-memory raster surfaces
    pub fn raster() -> Self {
        Self::new(Arc::new(RasterSurfaceProvider))
    }

    /// Capture one still image from a live frame.
    ///
    /// Validates options before any drawing, renders the frame at the
    /// derived size (mirrored if requested), encodes, and hands the result
    /// to the optional callback before returning it.
    pub fn capture(
        &self,
        frame: &VideoFrame,
        device_settings: Option<serde_json::Value>,
        options: &CaptureOptions,
    ) -> MediaResult<CapturedPicture> {
        let quality = resolve_quality(options)?;
        let size = ImageSize::from_scale(frame.width(), frame.height(), options.scale)?;

        let mut surface = self.provider.acquire(size)?;
        surface.set_mirrored(options.mirror);
        surface.draw_frame(frame)?;
        let encoded = surface.encode(options.image_type, quality)?;

        debug!(
            width = size.width,
            height = size.height,
            format = %options.image_type,
            bytes = encoded.len(),
            "captured still frame"
        );

        let payload = BASE64.encode(&encoded);
        let picture = CapturedPicture {
            uri: format!("data:{};base64,{}", options.image_type.mime(), payload),
            payload,
            width: size.width,
            height: size.height,
            device_settings,
            captured_at: Utc::now(),
        };

        if let Some(callback) = &options.on_captured {
            callback(&picture);
        }
        Ok(picture)
    }
}

impl Default for CapturePipeline {
    fn default() -> Self {
        Self::raster()
    }
}

fn resolve_quality(options: &CaptureOptions) -> MediaResult<f64> {
    if !options.image_type.is_lossy() {
        return Ok(1.0);
    }
    let quality = options.quality.unwrap_or(DEFAULT_JPEG_QUALITY);
    if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
        return Err(MediaError::QualityOutOfRange { quality });
    }
    Ok(quality)
}
