//! Desired-stream request types
//!
//! A [`StreamRequest`] is built once per acquisition attempt and handed to
//! the stream acquisition service. The video side is an explicit tagged
//! union: either a bare enabled flag (the minimal baseline request) or a
//! structured constraint object. Dimensions only ever attach to the
//! structured variant.

use crate::facing::FacingDirection;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// How strictly a facing preference must be honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exactness {
    /// The device must match the preference
    Exact,
    /// The device should match the preference if it can
    Ideal,
}

/// A facing preference with its required match strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacingConstraint {
    /// Preferred facing direction
    pub direction: FacingDirection,
    /// Exact vs. ideal matching
    pub exactness: Exactness,
}

impl FacingConstraint {
    /// An exact-match facing constraint
    pub fn exact(direction: FacingDirection) -> Self {
        Self {
            direction,
            exactness: Exactness::Exact,
        }
    }

    /// An ideal-match facing constraint
    pub fn ideal(direction: FacingDirection) -> Self {
        Self {
            direction,
            exactness: Exactness::Ideal,
        }
    }
}

impl Serialize for FacingConstraint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self.exactness {
            Exactness::Exact => map.serialize_entry("exact", self.direction.as_str())?,
            Exactness::Ideal => map.serialize_entry("ideal", self.direction.as_str())?,
        }
        map.end()
    }
}

/// The video side of a stream request: a bare flag or a structured
/// constraint object, discriminated explicitly
#[derive(Debug, Clone, PartialEq)]
pub enum VideoRequest {
    /// Bare enabled flag; no constraints attached
    Enabled(bool),
    /// Structured constraint object
    Constraints {
        /// Facing preference, if one was recognized
        facing: Option<FacingConstraint>,
        /// Desired frame width
        width: Option<u32>,
        /// Desired frame height
        height: Option<u32>,
    },
}

impl VideoRequest {
    /// Empty structured constraint object
    pub fn constraints() -> Self {
        VideoRequest::Constraints {
            facing: None,
            width: None,
            height: None,
        }
    }

    /// Whether this is the structured variant
    pub fn is_structured(&self) -> bool {
        matches!(self, VideoRequest::Constraints { .. })
    }
}

impl Serialize for VideoRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            VideoRequest::Enabled(enabled) => serializer.serialize_bool(*enabled),
            VideoRequest::Constraints {
                facing,
                width,
                height,
            } => {
                let len = facing.is_some() as usize
                    + width.is_some() as usize
                    + height.is_some() as usize;
                let mut map = serializer.serialize_map(Some(len))?;
                if let Some(facing) = facing {
                    map.serialize_entry("facingMode", facing)?;
                }
                if let Some(width) = width {
                    map.serialize_entry("width", width)?;
                }
                if let Some(height) = height {
                    map.serialize_entry("height", height)?;
                }
                map.end()
            }
        }
    }
}

/// A complete desired-stream request. Immutable after construction; audio
/// is never requested by this system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamRequest {
    /// Video request side
    pub video: VideoRequest,
    /// Audio is always declined
    pub audio: bool,
}

impl StreamRequest {
    /// The minimal baseline request: video enabled, no constraints, no audio
    pub fn baseline() -> Self {
        Self {
            video: VideoRequest::Enabled(true),
            audio: false,
        }
    }

    /// A request carrying the given structured video constraints
    pub fn with_video(video: VideoRequest) -> Self {
        Self {
            video,
            audio: false,
        }
    }

    /// Facing preference carried by the request, if any
    pub fn facing(&self) -> Option<FacingDirection> {
        match &self.video {
            VideoRequest::Enabled(_) => None,
            VideoRequest::Constraints { facing, .. } => facing.map(|f| f.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_serialization() {
        let request = StreamRequest::baseline();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "video": true, "audio": false }));
    }

    #[test]
    fn test_structured_serialization() {
        let request = StreamRequest::with_video(VideoRequest::Constraints {
            facing: Some(FacingConstraint::exact(FacingDirection::User)),
            width: Some(1280),
            height: Some(720),
        });
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "video": {
                    "facingMode": { "exact": "user" },
                    "width": 1280,
                    "height": 720,
                },
                "audio": false,
            })
        );
    }

    #[test]
    fn test_ideal_facing_serialization() {
        let constraint = FacingConstraint::ideal(FacingDirection::Environment);
        let json = serde_json::to_value(constraint).unwrap();
        assert_eq!(json, serde_json::json!({ "ideal": "environment" }));
    }
}
