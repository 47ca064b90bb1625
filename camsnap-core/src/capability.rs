//! Device capability descriptors and native constraint values
//!
//! A capture device reports, per tunable parameter, either a numeric range or
//! an enumerated set of values it supports. Negotiation turns an
//! application's normalized settings into a set of native values validated
//! against those descriptors; the validated set is what gets applied to a
//! track as one atomic advanced-constraints update.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One tunable capture parameter, keyed the way devices name it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Optical/digital zoom factor
    Zoom,
    /// Exposure compensation (EV shift)
    ExposureCompensation,
    /// White balance color temperature in kelvin
    ColorTemperature,
    /// Sensor sensitivity
    Iso,
    /// Image brightness
    Brightness,
    /// Image contrast
    Contrast,
    /// Color saturation
    Saturation,
    /// Edge sharpness
    Sharpness,
    /// Manual focus distance
    FocusDistance,
    /// Focus mode (continuous, manual, ...)
    FocusMode,
    /// Fill light / torch flag
    Torch,
    /// White balance mode
    WhiteBalanceMode,
}

impl Capability {
    /// Capabilities negotiated as normalized `[0, 1]` values over a device range
    pub const RANGED: [Capability; 9] = [
        Capability::Zoom,
        Capability::ExposureCompensation,
        Capability::ColorTemperature,
        Capability::Iso,
        Capability::Brightness,
        Capability::Contrast,
        Capability::Saturation,
        Capability::Sharpness,
        Capability::FocusDistance,
    ];

    /// Capabilities negotiated as named modes through the translation service
    pub const MODE: [Capability; 3] = [
        Capability::FocusMode,
        Capability::Torch,
        Capability::WhiteBalanceMode,
    ];

    /// Native constraint key, as it appears on the wire
    pub fn key(&self) -> &'static str {
        match self {
            Capability::Zoom => "zoom",
            Capability::ExposureCompensation => "exposureCompensation",
            Capability::ColorTemperature => "colorTemperature",
            Capability::Iso => "iso",
            Capability::Brightness => "brightness",
            Capability::Contrast => "contrast",
            Capability::Saturation => "saturation",
            Capability::Sharpness => "sharpness",
            Capability::FocusDistance => "focusDistance",
            Capability::FocusMode => "focusMode",
            Capability::Torch => "torch",
            Capability::WhiteBalanceMode => "whiteBalanceMode",
        }
    }

    /// Whether this capability negotiates over a numeric range
    pub fn is_ranged(&self) -> bool {
        Self::RANGED.contains(self)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A native constraint value in the device's own vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeValue {
    /// Numeric value (zoom factor, kelvin, ISO, ...)
    Number(f64),
    /// Boolean flag (torch)
    Flag(bool),
    /// Named mode ("continuous", "manual", ...)
    Mode(String),
}

impl NativeValue {
    /// Convenience constructor for a named mode
    pub fn mode(name: &str) -> Self {
        NativeValue::Mode(name.to_string())
    }

    /// Numeric payload, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NativeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Boolean payload, if this is a flag
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            NativeValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Mode name, if this is a named mode
    pub fn as_mode(&self) -> Option<&str> {
        match self {
            NativeValue::Mode(m) => Some(m),
            _ => None,
        }
    }
}

impl std::fmt::Display for NativeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NativeValue::Number(n) => write!(f, "{}", n),
            NativeValue::Flag(b) => write!(f, "{}", b),
            NativeValue::Mode(m) => f.write_str(m),
        }
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Number(value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Flag(value)
    }
}

/// Device-reported support for one capability: a numeric range or an
/// enumerated value set. Read-only; owned by the device, not by Camsnap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityDescriptor {
    /// Continuous numeric range
    Range {
        /// Minimum supported native value
        min: f64,
        /// Maximum supported native value
        max: f64,
    },
    /// Discrete enumerated values
    Options(Vec<NativeValue>),
}

impl CapabilityDescriptor {
    /// Whether the descriptor admits the given native value.
    ///
    /// A range admits any number inside `[min, max]`; an enumerated
    /// descriptor admits only listed members.
    pub fn supports(&self, value: &NativeValue) -> bool {
        match self {
            CapabilityDescriptor::Range { min, max } => match value.as_number() {
                Some(n) => n >= *min && n <= *max,
                None => false,
            },
            CapabilityDescriptor::Options(options) => options.contains(value),
        }
    }

    /// The numeric bounds, if this is a range descriptor
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            CapabilityDescriptor::Range { min, max } => Some((*min, *max)),
            CapabilityDescriptor::Options(_) => None,
        }
    }
}

/// Everything one track reports itself capable of
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackCapabilities {
    entries: BTreeMap<Capability, CapabilityDescriptor>,
}

impl TrackCapabilities {
    /// Empty capability set (a device that reports nothing tunable)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record support for a capability
    pub fn insert(&mut self, capability: Capability, descriptor: CapabilityDescriptor) {
        self.entries.insert(capability, descriptor);
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, capability: Capability, descriptor: CapabilityDescriptor) -> Self {
        self.insert(capability, descriptor);
        self
    }

    /// Builder-style range descriptor shorthand
    pub fn with_range(self, capability: Capability, min: f64, max: f64) -> Self {
        self.with(capability, CapabilityDescriptor::Range { min, max })
    }

    /// Builder-style enumerated descriptor shorthand
    pub fn with_options(self, capability: Capability, options: Vec<NativeValue>) -> Self {
        self.with(capability, CapabilityDescriptor::Options(options))
    }

    /// Descriptor for a capability, `None` when the device does not report it
    pub fn get(&self, capability: Capability) -> Option<&CapabilityDescriptor> {
        self.entries.get(&capability)
    }

    /// Whether the device reports the capability at all
    pub fn reports(&self, capability: Capability) -> bool {
        self.entries.contains_key(&capability)
    }

    /// Number of reported capabilities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the device reports nothing tunable
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A validated set of native constraint values, ready to be applied to a
/// track as one atomic advanced-constraints update.
///
/// Entries are omitted, never set to a sentinel, when negotiation determines
/// a setting is unsupported, so a device is never asked for an invalid
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeConstraintSet {
    entries: BTreeMap<Capability, NativeValue>,
}

impl NativeConstraintSet {
    /// Empty constraint set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validated entry
    pub fn insert(&mut self, capability: Capability, value: NativeValue) {
        self.entries.insert(capability, value);
    }

    /// Value for a capability, if negotiation emitted one
    pub fn get(&self, capability: Capability) -> Option<&NativeValue> {
        self.entries.get(&capability)
    }

    /// Whether negotiation emitted an entry for the capability
    pub fn contains(&self, capability: Capability) -> bool {
        self.entries.contains_key(&capability)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty (nothing to apply)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in stable key order
    pub fn iter(&self) -> impl Iterator<Item = (&Capability, &NativeValue)> {
        self.entries.iter()
    }

    /// Render the wire-facing `advanced` constraints object:
    /// `{"advanced": [{"zoom": 3.0, "torch": true}]}`
    pub fn to_advanced_json(&self) -> serde_json::Value {
        let mut entry = serde_json::Map::new();
        for (capability, value) in &self.entries {
            entry.insert(
                capability.key().to_string(),
                serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
            );
        }
        serde_json::json!({ "advanced": [entry] })
    }
}
