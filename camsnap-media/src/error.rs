//! Media pipeline error types
//!
//! Every variant here is a fatal fault for the capture attempt that raised
//! it: either a contract violation by the caller (bad format, bad quality)
//! or an unusable environment (no drawable surface). Capability mismatches
//! during negotiation are not errors and never appear here; they surface as
//! diagnostics through the injected sink.

use thiserror::Error;

/// Main error type for still-capture operations
#[derive(Error, Debug)]
pub enum MediaError {
    /// Requested image type is not a recognized format
    #[error("Unsupported image type: {requested}")]
    UnsupportedImageType {
        /// Format name as requested
        requested: String,
    },

    /// Quality outside the valid range for a lossy format
    #[error("Quality {quality} out of range, expected [0, 1]")]
    QualityOutOfRange {
        /// Quality as requested
        quality: f64,
    },

    /// Scale factor unusable for deriving output dimensions
    #[error("Invalid capture scale: {scale}")]
    InvalidScale {
        /// Scale as requested
        scale: f64,
    },

    /// No drawable rendering surface could be obtained
    #[error("Rendering surface unavailable for {width}x{height}: {reason}")]
    SurfaceUnavailable {
        /// Requested surface width
        width: u32,
        /// Requested surface height
        height: u32,
        /// Reason reported by the provider
        reason: String,
    },

    /// Frame data does not describe a drawable image
    #[error("Invalid frame data: {reason}")]
    InvalidFrame {
        /// Validation failure detail
        reason: String,
    },

    /// Encoding the rendered surface failed
    #[error("Encoding failed: {format} - {reason}")]
    EncodingFailed {
        /// Target format name
        format: String,
        /// Failure reason
        reason: String,
    },

    /// Capture attempted against a closed or trackless stream
    #[error("Capture source unavailable: {reason}")]
    SourceUnavailable {
        /// Why no source frame/settings could be read
        reason: String,
    },
}

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

impl MediaError {
    /// Whether the error indicates a caller contract violation rather than
    /// an environment fault
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            MediaError::UnsupportedImageType { .. }
                | MediaError::QualityOutOfRange { .. }
                | MediaError::InvalidScale { .. }
                | MediaError::InvalidFrame { .. }
        )
    }
}
