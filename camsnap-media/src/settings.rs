//! Normalized camera settings and mode translation
//!
//! Applications express intent in platform-independent terms: ranged
//! controls as values in `[0, 1]`, mode controls as named modes. The
//! [`ModeTranslator`] seam maps named modes into a device's native
//! vocabulary; the standard implementation covers the common web-native
//! mode names and is replaceable per platform.

use camsnap_core::{Capability, NativeValue};
use serde::{Deserialize, Serialize};

/// Focus behavior requested by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusMode {
    /// Single-shot autofocus
    Auto,
    /// Continuous autofocus
    Continuous,
    /// Manual focus (paired with a focus distance setting)
    Manual,
}

/// Flash behavior requested by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashMode {
    /// Flash disabled
    Off,
    /// Flash fires on capture
    On,
    /// Device decides per capture
    Auto,
    /// Continuous torch light
    Torch,
}

/// White balance preset requested by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteBalance {
    /// Automatic white balance
    Auto,
    /// Daylight preset
    Sunny,
    /// Overcast preset
    Cloudy,
    /// Shade preset
    Shadow,
    /// Tungsten preset
    Incandescent,
    /// Fluorescent preset
    Fluorescent,
}

/// A mode-valued setting together with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSetting {
    /// Focus mode setting
    Focus(FocusMode),
    /// Flash mode setting
    Flash(FlashMode),
    /// White balance setting
    WhiteBalance(WhiteBalance),
}

impl ModeSetting {
    /// Application-level label, used in diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            ModeSetting::Focus(FocusMode::Auto) => "auto",
            ModeSetting::Focus(FocusMode::Continuous) => "continuous",
            ModeSetting::Focus(FocusMode::Manual) => "manual",
            ModeSetting::Flash(FlashMode::Off) => "off",
            ModeSetting::Flash(FlashMode::On) => "on",
            ModeSetting::Flash(FlashMode::Auto) => "auto",
            ModeSetting::Flash(FlashMode::Torch) => "torch",
            ModeSetting::WhiteBalance(WhiteBalance::Auto) => "auto",
            ModeSetting::WhiteBalance(WhiteBalance::Sunny) => "sunny",
            ModeSetting::WhiteBalance(WhiteBalance::Cloudy) => "cloudy",
            ModeSetting::WhiteBalance(WhiteBalance::Shadow) => "shadow",
            ModeSetting::WhiteBalance(WhiteBalance::Incandescent) => "incandescent",
            ModeSetting::WhiteBalance(WhiteBalance::Fluorescent) => "fluorescent",
        }
    }
}

/// Normalized, platform-independent camera settings.
///
/// Every field is optional; an absent field means "not requested" and never
/// produces a constraint entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Zoom, `0.0` = widest, `1.0` = device maximum
    pub zoom: Option<f64>,
    /// Exposure compensation across the device's EV range
    pub exposure_compensation: Option<f64>,
    /// Color temperature across the device's kelvin range
    pub color_temperature: Option<f64>,
    /// Sensor sensitivity across the device's ISO range
    pub iso: Option<f64>,
    /// Brightness across the device's range
    pub brightness: Option<f64>,
    /// Contrast across the device's range
    pub contrast: Option<f64>,
    /// Saturation across the device's range
    pub saturation: Option<f64>,
    /// Sharpness across the device's range
    pub sharpness: Option<f64>,
    /// Manual focus distance, `0.0` = nearest, `1.0` = farthest
    pub focus_distance: Option<f64>,
    /// Focus mode
    pub focus_mode: Option<FocusMode>,
    /// Flash mode
    pub flash: Option<FlashMode>,
    /// White balance preset
    pub white_balance: Option<WhiteBalance>,
}

impl CameraSettings {
    /// Settings requesting nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalized value for a ranged capability, if the application set one
    pub fn ranged(&self, capability: Capability) -> Option<f64> {
        match capability {
            Capability::Zoom => self.zoom,
            Capability::ExposureCompensation => self.exposure_compensation,
            Capability::ColorTemperature => self.color_temperature,
            Capability::Iso => self.iso,
            Capability::Brightness => self.brightness,
            Capability::Contrast => self.contrast,
            Capability::Saturation => self.saturation,
            Capability::Sharpness => self.sharpness,
            Capability::FocusDistance => self.focus_distance,
            _ => None,
        }
    }

    /// Mode setting for a mode-valued capability, if the application set one
    pub fn mode(&self, capability: Capability) -> Option<ModeSetting> {
        match capability {
            Capability::FocusMode => self.focus_mode.map(ModeSetting::Focus),
            Capability::Torch => self.flash.map(ModeSetting::Flash),
            Capability::WhiteBalanceMode => self.white_balance.map(ModeSetting::WhiteBalance),
            _ => None,
        }
    }

    /// Whether no setting was requested at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Maps an application-level mode name into a device's native vocabulary.
///
/// Injected and replaceable per platform. Returning `None` marks the mode
/// as unsupported; negotiation drops the entry and emits a diagnostic.
pub trait ModeTranslator: Send + Sync {
    /// Native value for the mode, or `None` when untranslatable
    fn translate(&self, capability: Capability, mode: &ModeSetting) -> Option<NativeValue>;
}

/// Translator for the common web-native capability vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardModeTranslator;

impl ModeTranslator for StandardModeTranslator {
    fn translate(&self, capability: Capability, mode: &ModeSetting) -> Option<NativeValue> {
        match (capability, mode) {
            // Torch is a flag: continuous light on or off. Per-capture auto
            // flash has no native counterpart here.
            (Capability::Torch, ModeSetting::Flash(FlashMode::On))
            | (Capability::Torch, ModeSetting::Flash(FlashMode::Torch)) => {
                Some(NativeValue::Flag(true))
            }
            (Capability::Torch, ModeSetting::Flash(FlashMode::Off)) => {
                Some(NativeValue::Flag(false))
            }
            (Capability::Torch, ModeSetting::Flash(FlashMode::Auto)) => None,

            (Capability::FocusMode, ModeSetting::Focus(FocusMode::Auto)) => {
                Some(NativeValue::mode("single-shot"))
            }
            (Capability::FocusMode, ModeSetting::Focus(FocusMode::Continuous)) => {
                Some(NativeValue::mode("continuous"))
            }
            (Capability::FocusMode, ModeSetting::Focus(FocusMode::Manual)) => {
                Some(NativeValue::mode("manual"))
            }

            (Capability::WhiteBalanceMode, ModeSetting::WhiteBalance(WhiteBalance::Auto)) => {
                Some(NativeValue::mode("continuous"))
            }
            (Capability::WhiteBalanceMode, ModeSetting::WhiteBalance(_)) => {
                Some(NativeValue::mode("manual"))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranged_lookup() {
        let settings = CameraSettings {
            zoom: Some(0.5),
            ..Default::default()
        };
        assert_eq!(settings.ranged(Capability::Zoom), Some(0.5));
        assert_eq!(settings.ranged(Capability::Iso), None);
        assert_eq!(settings.ranged(Capability::Torch), None);
    }

    #[test]
    fn test_standard_translator_torch() {
        let translator = StandardModeTranslator;
        assert_eq!(
            translator.translate(Capability::Torch, &ModeSetting::Flash(FlashMode::On)),
            Some(NativeValue::Flag(true))
        );
        assert_eq!(
            translator.translate(Capability::Torch, &ModeSetting::Flash(FlashMode::Off)),
            Some(NativeValue::Flag(false))
        );
        assert_eq!(
            translator.translate(Capability::Torch, &ModeSetting::Flash(FlashMode::Auto)),
            None
        );
    }

    #[test]
    fn test_standard_translator_white_balance() {
        let translator = StandardModeTranslator;
        assert_eq!(
            translator.translate(
                Capability::WhiteBalanceMode,
                &ModeSetting::WhiteBalance(WhiteBalance::Auto)
            ),
            Some(NativeValue::mode("continuous"))
        );
        assert_eq!(
            translator.translate(
                Capability::WhiteBalanceMode,
                &ModeSetting::WhiteBalance(WhiteBalance::Sunny)
            ),
            Some(NativeValue::mode("manual"))
        );
    }

    #[test]
    fn test_settings_serde_defaults() {
        let settings: CameraSettings = serde_json::from_str("{\"zoom\": 0.25}").unwrap();
        assert_eq!(settings.zoom, Some(0.25));
        assert_eq!(settings.flash, None);
        assert!(!settings.is_empty());
    }
}
