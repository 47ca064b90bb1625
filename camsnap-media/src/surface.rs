//! Rendering surfaces
//!
//! A capture draws the live frame onto a 2D surface obtained from an
//! injected provider, then encodes the surface contents. The default
//! provider renders into an in-memory RGBA raster, which keeps the whole
//! pipeline exercisable without a windowing system; platforms with real
//! drawing targets supply their own provider.

use crate::capture::{ImageSize, ImageType};
use crate::error::{MediaError, MediaResult};
use crate::frame::VideoFrame;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, RgbaImage};

/// A 2D drawing target for one capture attempt
pub trait RenderSurface {
    /// Surface dimensions
    fn size(&self) -> ImageSize;

    /// Arm or disarm the horizontal-flip transform applied on draw
    fn set_mirrored(&mut self, mirrored: bool);

    /// Draw a live frame scaled to the surface dimensions
    fn draw_frame(&mut self, frame: &VideoFrame) -> MediaResult<()>;

    /// Encode the surface contents. Quality is ignored for lossless
    /// formats; for lossy formats it has already been validated.
    fn encode(&self, image_type: ImageType, quality: f64) -> MediaResult<Vec<u8>>;
}

/// Yields a drawable surface for a target size, or fails if none can be
/// obtained
pub trait SurfaceProvider: Send + Sync {
    /// Acquire a surface of the given size
    fn acquire(&self, size: ImageSize) -> MediaResult<Box<dyn RenderSurface>>;
}

/// Default provider: in-memory RGBA raster surfaces
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterSurfaceProvider;

impl SurfaceProvider for RasterSurfaceProvider {
    fn acquire(&self, size: ImageSize) -> MediaResult<Box<dyn RenderSurface>> {
        if size.width == 0 || size.height == 0 {
            return Err(MediaError::SurfaceUnavailable {
                width: size.width,
                height: size.height,
                reason: "zero-sized surface".to_string(),
            });
        }
        Ok(Box::new(RasterSurface {
            canvas: RgbaImage::new(size.width, size.height),
            mirrored: false,
        }))
    }
}

struct RasterSurface {
    canvas: RgbaImage,
    mirrored: bool,
}

impl RenderSurface for RasterSurface {
    fn size(&self) -> ImageSize {
        ImageSize {
            width: self.canvas.width(),
            height: self.canvas.height(),
        }
    }

    fn set_mirrored(&mut self, mirrored: bool) {
        self.mirrored = mirrored;
    }

    fn draw_frame(&mut self, frame: &VideoFrame) -> MediaResult<()> {
        let source: RgbaImage = ImageBuffer::from_raw(
            frame.width(),
            frame.height(),
            frame.data().to_vec(),
        )
        .ok_or_else(|| MediaError::InvalidFrame {
            reason: "frame data does not match its dimensions".to_string(),
        })?;

        let mut scaled = if source.dimensions() == self.canvas.dimensions() {
            source
        } else {
            imageops::resize(
                &source,
                self.canvas.width(),
                self.canvas.height(),
                FilterType::Triangle,
            )
        };
        if self.mirrored {
            scaled = imageops::flip_horizontal(&scaled);
        }
        self.canvas = scaled;
        Ok(())
    }

    fn encode(&self, image_type: ImageType, quality: f64) -> MediaResult<Vec<u8>> {
        let mut encoded = Vec::new();
        match image_type {
            ImageType::Png => {
                PngEncoder::new(&mut encoded)
                    .write_image(
                        self.canvas.as_raw(),
                        self.canvas.width(),
                        self.canvas.height(),
                        ExtendedColorType::Rgba8,
                    )
                    .map_err(|e| MediaError::EncodingFailed {
                        format: image_type.to_string(),
                        reason: e.to_string(),
                    })?;
            }
            ImageType::Jpg => {
                // The JPEG encoder has no alpha channel to carry
                let rgb = image::DynamicImage::ImageRgba8(self.canvas.clone()).to_rgb8();
                let scaled_quality = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
                JpegEncoder::new_with_quality(&mut encoded, scaled_quality)
                    .encode_image(&rgb)
                    .map_err(|e| MediaError::EncodingFailed {
                        format: image_type.to_string(),
                        reason: e.to_string(),
                    })?;
            }
        }
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_surface_rejected() {
        let provider = RasterSurfaceProvider;
        let result = provider.acquire(ImageSize {
            width: 0,
            height: 360,
        });
        assert!(matches!(result, Err(MediaError::SurfaceUnavailable { .. })));
    }

    #[test]
    fn test_mirror_flips_pixels() {
        let provider = RasterSurfaceProvider;
        let mut surface = provider
            .acquire(ImageSize {
                width: 2,
                height: 1,
            })
            .unwrap();

        // Left pixel red, right pixel blue
        let data = vec![255, 0, 0, 255, 0, 0, 255, 255];
        let frame = VideoFrame::rgba(2, 1, data, 0).unwrap();

        surface.set_mirrored(true);
        surface.draw_frame(&frame).unwrap();

        let png = surface.encode(ImageType::Png, 1.0).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 255, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0, [255, 0, 0, 255]);
    }
}
