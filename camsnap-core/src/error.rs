//! Error types for Camsnap device and stream operations

use thiserror::Error;

/// Main error type for Camsnap stream and constraint operations
#[derive(Error, Debug)]
pub enum CamsnapError {
    /// Initialization error
    #[error("Initialization failed: {reason}")]
    Initialization {
        /// Reason for initialization failure
        reason: String,
    },

    /// Missing configuration error
    #[error("Missing required configuration: {field}")]
    MissingConfiguration {
        /// Missing configuration field
        field: String,
    },

    /// Stream acquisition failed
    #[error("Stream acquisition failed: {reason}")]
    Acquisition {
        /// Reason for acquisition failure
        reason: String,
    },

    /// Applying constraints to a track was rejected by the device
    #[error("Constraint apply rejected on track {track_id}: {reason}")]
    ConstraintApply {
        /// Track the apply was issued against
        track_id: String,
        /// Reason reported by the device
        reason: String,
    },

    /// Operation issued against a stopped track
    #[error("Track {track_id} is stopped")]
    TrackStopped {
        /// Track identifier
        track_id: String,
    },

    /// Invalid state error
    #[error("Invalid state: expected {expected}, got {actual}")]
    InvalidState {
        /// Expected state
        expected: String,
        /// Actual state
        actual: String,
    },

    /// Still-capture pipeline error surfaced through the session API
    #[error("Media processing error: {reason}")]
    MediaProcessing {
        /// Reason for media error
        reason: String,
    },
}

impl CamsnapError {
    /// Check if the error came from the device transport rather than a
    /// contract violation. Transport errors are the caller's to retry.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CamsnapError::Acquisition { .. } | CamsnapError::ConstraintApply { .. }
        )
    }
}
