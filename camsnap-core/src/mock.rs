//! Mock capture devices for tests and unsupported platforms
//!
//! Mirrors the real contracts closely enough to drive negotiation, capture
//! metadata, and lifecycle paths without hardware: tracks record every
//! constraint set applied to them, acquisition records every request it
//! resolves, and both can be told to fail.

use crate::capability::{NativeConstraintSet, TrackCapabilities};
use crate::error::CamsnapError;
use crate::facing::FacingDirection;
use crate::request::StreamRequest;
use crate::track::{CaptureStream, CaptureTrack, StreamAcquisition, TrackKind};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// A mock capture track with configurable capabilities
pub struct MockTrack {
    id: String,
    device_id: String,
    kind: TrackKind,
    facing: Option<FacingDirection>,
    capabilities: TrackCapabilities,
    settings: Mutex<serde_json::Map<String, serde_json::Value>>,
    applied: Mutex<Vec<NativeConstraintSet>>,
    fail_apply: Option<String>,
    stopped: AtomicBool,
}

impl MockTrack {
    /// New mock video track backed by the given device
    pub fn video(device_id: &str) -> Self {
        Self::new(device_id, TrackKind::Video)
    }

    /// New mock audio track backed by the given device
    pub fn audio(device_id: &str) -> Self {
        Self::new(device_id, TrackKind::Audio)
    }

    fn new(device_id: &str, kind: TrackKind) -> Self {
        let mut settings = serde_json::Map::new();
        settings.insert(
            "deviceId".to_string(),
            serde_json::Value::String(device_id.to_string()),
        );
        Self {
            id: Uuid::new_v4().to_string(),
            device_id: device_id.to_string(),
            kind,
            facing: None,
            capabilities: TrackCapabilities::new(),
            settings: Mutex::new(settings),
            applied: Mutex::new(Vec::new()),
            fail_apply: None,
            stopped: AtomicBool::new(false),
        }
    }

    /// Set the facing direction the track reports
    pub fn with_facing(mut self, facing: FacingDirection) -> Self {
        self.facing = Some(facing);
        self
    }

    /// Set the capability descriptors the track reports
    pub fn with_capabilities(mut self, capabilities: TrackCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Merge extra keys into the reported current settings
    pub fn with_setting(self, key: &str, value: serde_json::Value) -> Self {
        self.settings.lock().insert(key.to_string(), value);
        self
    }

    /// Make every apply-constraints call fail with the given reason
    pub fn failing_apply(mut self, reason: &str) -> Self {
        self.fail_apply = Some(reason.to_string());
        self
    }

    /// Every constraint set applied to this track, in order
    pub fn applied(&self) -> Vec<NativeConstraintSet> {
        self.applied.lock().clone()
    }
}

#[async_trait]
impl CaptureTrack for MockTrack {
    fn id(&self) -> &str {
        &self.id
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn kind(&self) -> TrackKind {
        self.kind
    }

    fn facing(&self) -> Option<FacingDirection> {
        self.facing
    }

    fn capabilities(&self) -> TrackCapabilities {
        self.capabilities.clone()
    }

    fn current_settings(&self) -> serde_json::Value {
        serde_json::Value::Object(self.settings.lock().clone())
    }

    async fn apply_constraints(
        &self,
        constraints: &NativeConstraintSet,
    ) -> Result<(), CamsnapError> {
        if self.is_stopped() {
            return Err(CamsnapError::TrackStopped {
                track_id: self.id.clone(),
            });
        }
        if let Some(reason) = &self.fail_apply {
            return Err(CamsnapError::ConstraintApply {
                track_id: self.id.clone(),
                reason: reason.clone(),
            });
        }

        debug!(track = %self.id, entries = constraints.len(), "mock apply");
        let mut settings = self.settings.lock();
        for (capability, value) in constraints.iter() {
            settings.insert(
                capability.key().to_string(),
                serde_json::to_value(value).unwrap_or(serde_json::Value::Null),
            );
        }
        drop(settings);
        self.applied.lock().push(constraints.clone());
        Ok(())
    }

    fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// A mock capture stream over mock tracks
pub struct MockStream {
    id: String,
    audio: Vec<Arc<MockTrack>>,
    video: Vec<Arc<MockTrack>>,
    stream_stopped: AtomicBool,
}

impl MockStream {
    /// Stream with the given audio and video tracks
    pub fn with_tracks(audio: Vec<Arc<MockTrack>>, video: Vec<Arc<MockTrack>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            audio,
            video,
            stream_stopped: AtomicBool::new(false),
        }
    }

    /// Stream carrying a single video track for the given device
    pub fn single(device_id: &str) -> Self {
        Self::with_tracks(Vec::new(), vec![Arc::new(MockTrack::video(device_id))])
    }

    /// The underlying mock video tracks, for assertions
    pub fn mock_video_tracks(&self) -> &[Arc<MockTrack>] {
        &self.video
    }

    /// Whether stream-level stop has been invoked
    pub fn is_stream_stopped(&self) -> bool {
        self.stream_stopped.load(Ordering::SeqCst)
    }
}

impl CaptureStream for MockStream {
    fn id(&self) -> &str {
        &self.id
    }

    fn audio_tracks(&self) -> Vec<Arc<dyn CaptureTrack>> {
        self.audio
            .iter()
            .map(|t| t.clone() as Arc<dyn CaptureTrack>)
            .collect()
    }

    fn video_tracks(&self) -> Vec<Arc<dyn CaptureTrack>> {
        self.video
            .iter()
            .map(|t| t.clone() as Arc<dyn CaptureTrack>)
            .collect()
    }

    fn stop(&self) {
        self.stream_stopped.store(true, Ordering::SeqCst);
    }
}

/// A mock acquisition service.
///
/// Hands out queued streams in order; once the queue is empty it fabricates
/// a single-video-track stream whose device id is derived from the request's
/// facing preference, so facing switches resolve to distinct devices.
pub struct MockAcquisition {
    queued: Mutex<VecDeque<MockStream>>,
    requests: Mutex<Vec<StreamRequest>>,
    fail: Option<String>,
}

impl MockAcquisition {
    /// Acquisition service that fabricates streams on demand
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: None,
        }
    }

    /// Acquisition service that fails every request
    pub fn failing(reason: &str) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: Some(reason.to_string()),
        }
    }

    /// Queue an explicit stream to hand out next
    pub fn queue(&self, stream: MockStream) {
        self.queued.lock().push_back(stream);
    }

    /// Every request this service has resolved, in order
    pub fn requests(&self) -> Vec<StreamRequest> {
        self.requests.lock().clone()
    }

    fn fabricate(request: &StreamRequest) -> MockStream {
        let device_id = match request.facing() {
            Some(facing) => format!("mock-camera-{}", facing),
            None => "mock-camera".to_string(),
        };
        let mut track = MockTrack::video(&device_id);
        if let Some(facing) = request.facing() {
            track = track.with_facing(facing);
        }
        MockStream::with_tracks(Vec::new(), vec![Arc::new(track)])
    }
}

impl Default for MockAcquisition {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StreamAcquisition for MockAcquisition {
    async fn acquire(
        &self,
        request: &StreamRequest,
    ) -> Result<Box<dyn CaptureStream>, CamsnapError> {
        self.requests.lock().push(request.clone());
        if let Some(reason) = &self.fail {
            return Err(CamsnapError::Acquisition {
                reason: reason.clone(),
            });
        }

        let stream = match self.queued.lock().pop_front() {
            Some(stream) => stream,
            None => Self::fabricate(request),
        };
        Ok(Box::new(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{Capability, NativeValue};

    #[tokio::test]
    async fn test_mock_track_records_applies() {
        let track = MockTrack::video("cam-0");
        let mut set = NativeConstraintSet::new();
        set.insert(Capability::Zoom, NativeValue::Number(2.0));

        track.apply_constraints(&set).await.unwrap();

        let applied = track.applied();
        assert_eq!(applied.len(), 1);
        assert_eq!(
            applied[0].get(Capability::Zoom),
            Some(&NativeValue::Number(2.0))
        );
        assert_eq!(track.current_settings()["zoom"], 2.0);
    }

    #[tokio::test]
    async fn test_stopped_track_rejects_apply() {
        let track = MockTrack::video("cam-0");
        track.stop();
        track.stop();
        assert!(track.is_stopped());

        let result = track.apply_constraints(&NativeConstraintSet::new()).await;
        assert!(matches!(result, Err(CamsnapError::TrackStopped { .. })));
    }

    #[tokio::test]
    async fn test_acquisition_fabricates_per_facing() {
        use crate::request::{FacingConstraint, VideoRequest};

        let acquisition = MockAcquisition::new();
        let request = StreamRequest::with_video(VideoRequest::Constraints {
            facing: Some(FacingConstraint::ideal(FacingDirection::Environment)),
            width: None,
            height: None,
        });

        let stream = acquisition.acquire(&request).await.unwrap();
        let video = stream.video_tracks();
        assert_eq!(video.len(), 1);
        assert_eq!(video[0].device_id(), "mock-camera-environment");
        assert_eq!(acquisition.requests().len(), 1);
    }
}
