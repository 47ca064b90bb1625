//! Configuration types and defaults

use camsnap_core::{CamsnapError, FacingDirection, PlatformFamily};
use camsnap_media::{CaptureOptions, ImageType};
use serde::{Deserialize, Serialize};

/// Global Camsnap configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Facing direction requested when a session does not choose one
    pub default_facing: FacingDirection,
    /// Desired frame width carried on stream requests
    pub frame_width: Option<u32>,
    /// Desired frame height carried on stream requests
    pub frame_height: Option<u32>,
    /// Platform family the host runtime reports itself as
    pub platform: PlatformFamily,
    /// Defaults applied to every capture
    pub capture: CaptureDefaults,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_facing: FacingDirection::User,
            frame_width: None,
            frame_height: None,
            platform: PlatformFamily::Unknown,
            capture: CaptureDefaults::default(),
        }
    }
}

impl GlobalConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), CamsnapError> {
        self.capture.validate()
    }
}

/// Capture defaults applied when a capture call leaves options unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureDefaults {
    /// Output scale relative to the source frame
    pub scale: f64,
    /// Target encoding
    pub image_type: ImageType,
    /// Encoding quality for lossy formats
    pub quality: Option<f64>,
    /// Horizontally mirror rendered images
    pub mirror: bool,
}

impl Default for CaptureDefaults {
    fn default() -> Self {
        Self {
            scale: 1.0,
            image_type: ImageType::Png,
            quality: None,
            mirror: false,
        }
    }
}

impl CaptureDefaults {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), CamsnapError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CamsnapError::Initialization {
                reason: format!("invalid capture scale: {}", self.scale),
            });
        }
        if let Some(quality) = self.quality {
            if !quality.is_finite() || !(0.0..=1.0).contains(&quality) {
                return Err(CamsnapError::Initialization {
                    reason: format!("capture quality {} out of range [0, 1]", quality),
                });
            }
        }
        Ok(())
    }

    /// Capture options seeded from these defaults
    pub fn to_options(&self) -> CaptureOptions {
        let mut options = CaptureOptions::new()
            .with_scale(self.scale)
            .with_image_type(self.image_type);
        if let Some(quality) = self.quality {
            options = options.with_quality(quality);
        }
        if self.mirror {
            options = options.mirrored();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(GlobalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_quality_rejected() {
        let config = GlobalConfig {
            capture: CaptureDefaults {
                quality: Some(1.5),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_to_options() {
        let defaults = CaptureDefaults {
            scale: 0.5,
            image_type: ImageType::Jpg,
            quality: Some(0.8),
            mirror: true,
        };
        let options = defaults.to_options();
        assert_eq!(options.scale, 0.5);
        assert_eq!(options.image_type, ImageType::Jpg);
        assert_eq!(options.quality, Some(0.8));
        assert!(options.mirror);
    }
}
