//! Live video frame representation

use crate::error::{MediaError, MediaResult};

/// One frame read off the live stream, tightly packed RGBA8
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Frame width in pixels
    width: u32,
    /// Frame height in pixels
    height: u32,
    /// Pixel data, `width * height * 4` bytes
    data: Vec<u8>,
    /// Timestamp in milliseconds
    timestamp: u64,
}

impl VideoFrame {
    /// Frame from raw RGBA8 data
    pub fn rgba(width: u32, height: u32, data: Vec<u8>, timestamp: u64) -> MediaResult<Self> {
        if width == 0 || height == 0 {
            return Err(MediaError::InvalidFrame {
                reason: format!("zero dimension: {}x{}", width, height),
            });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(MediaError::InvalidFrame {
                reason: format!("expected {} bytes, got {}", expected, data.len()),
            });
        }
        Ok(Self {
            width,
            height,
            data,
            timestamp,
        })
    }

    /// Solid-color frame, handy for tests and demos
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> MediaResult<Self> {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&rgba);
        }
        Self::rgba(width, height, data, 0)
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Timestamp in milliseconds
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Width-to-height ratio
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_length_validation() {
        let result = VideoFrame::rgba(2, 2, vec![0u8; 15], 0);
        assert!(matches!(result, Err(MediaError::InvalidFrame { .. })));

        let frame = VideoFrame::rgba(2, 2, vec![0u8; 16], 0).unwrap();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let result = VideoFrame::rgba(0, 4, Vec::new(), 0);
        assert!(matches!(result, Err(MediaError::InvalidFrame { .. })));
    }
}
