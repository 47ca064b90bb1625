//! Stream and track contracts
//!
//! The live capture device sits behind these traits. A platform supplies a
//! stream of tracks; each track reports its capability descriptors and
//! accepts one atomic advanced-constraints update at a time. Acquisition of
//! the stream itself is a black-box asynchronous service: Camsnap builds the
//! request, the service resolves it, and failures propagate untouched.

use crate::capability::{NativeConstraintSet, TrackCapabilities};
use crate::error::CamsnapError;
use crate::facing::FacingDirection;
use crate::request::StreamRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Kind of media a track carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    /// Audio track
    Audio,
    /// Video track
    Video,
}

/// A live capture track: capability descriptors, current device settings,
/// and an asynchronous apply-constraints operation
#[async_trait]
pub trait CaptureTrack: Send + Sync {
    /// Track identifier, unique within its stream
    fn id(&self) -> &str;

    /// Identifier of the physical device backing this track
    fn device_id(&self) -> &str;

    /// Kind of media the track carries
    fn kind(&self) -> TrackKind;

    /// Facing direction the backing device reports, if it reports one
    fn facing(&self) -> Option<FacingDirection>;

    /// Capability descriptors the device reports for this track
    fn capabilities(&self) -> TrackCapabilities;

    /// Snapshot of the device's currently applied settings
    fn current_settings(&self) -> serde_json::Value;

    /// Apply a validated constraint set as one atomic update.
    ///
    /// Suspends until the device settles the update. A rejection here is a
    /// transport failure (device busy, track ended), not a capability
    /// mismatch; mismatches were already dropped during negotiation.
    async fn apply_constraints(
        &self,
        constraints: &NativeConstraintSet,
    ) -> Result<(), CamsnapError>;

    /// Stop the track. Stopping an already-stopped track has no effect.
    fn stop(&self);

    /// Whether the track has been stopped
    fn is_stopped(&self) -> bool;
}

/// A live capture stream: collections of audio and video tracks
pub trait CaptureStream: Send + Sync {
    /// Stream identifier
    fn id(&self) -> &str;

    /// Audio tracks carried by the stream
    fn audio_tracks(&self) -> Vec<Arc<dyn CaptureTrack>>;

    /// Video tracks carried by the stream
    fn video_tracks(&self) -> Vec<Arc<dyn CaptureTrack>>;

    /// Stop the stream object itself, for implementations that model a
    /// directly stoppable stream. Per-track stops have already run by the
    /// time teardown calls this; the default is a no-op.
    fn stop(&self) {}
}

/// Asynchronous stream acquisition service.
///
/// Owned by the platform; Camsnap treats it as a black box and never
/// retries its failures.
#[async_trait]
pub trait StreamAcquisition: Send + Sync {
    /// Resolve a desired-stream request into a live stream
    async fn acquire(&self, request: &StreamRequest)
        -> Result<Box<dyn CaptureStream>, CamsnapError>;
}
