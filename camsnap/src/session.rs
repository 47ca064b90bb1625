//! Camera session management and API

use crate::{Camsnap, CamsnapError};
use camsnap_core::{CaptureStream, FacingDirection, RuntimeCapabilities};
use camsnap_media::{
    build_stream_request, same_device, teardown, CameraSettings, CaptureOptions, CapturePipeline,
    CapturedPicture, Negotiator, VideoFrame,
};
use tracing::{debug, info};

/// Fluent builder for session configuration and stream acquisition
pub struct SessionBuilder {
    camsnap: Camsnap,
    facing: Option<FacingDirection>,
    width: Option<u32>,
    height: Option<u32>,
    settings: CameraSettings,
    runtime: Option<RuntimeCapabilities>,
}

impl SessionBuilder {
    pub(crate) fn new(camsnap: &Camsnap) -> Self {
        Self {
            camsnap: camsnap.clone(),
            facing: None,
            width: None,
            height: None,
            settings: CameraSettings::new(),
            runtime: None,
        }
    }

    /// Set the preferred facing direction
    pub fn facing(mut self, facing: FacingDirection) -> Self {
        self.facing = Some(facing);
        self
    }

    /// Set the desired frame dimensions
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set the normalized settings negotiated once the stream is live
    pub fn settings(mut self, settings: CameraSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Override what the runtime reports about its constraint support
    pub fn runtime(mut self, runtime: RuntimeCapabilities) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Acquire the stream and run the first negotiation pass
    pub async fn open(self) -> Result<CameraSession, CamsnapError> {
        let config = self.camsnap.config();
        let facing = self.facing.unwrap_or(config.default_facing);
        let width = self.width.or(config.frame_width);
        let height = self.height.or(config.frame_height);
        let runtime = self
            .runtime
            .unwrap_or_else(|| RuntimeCapabilities::full(config.platform));

        let request = build_stream_request(Some(facing), width, height, &runtime);
        info!("📷 Opening {} camera session", facing);
        let stream = self.camsnap.acquisition().acquire(&request).await?;

        let negotiator = self.camsnap.negotiator();
        negotiator
            .negotiate(Some(facing), stream.as_ref(), &self.settings)
            .await?;

        Ok(CameraSession {
            pipeline: self.camsnap.pipeline(),
            camsnap: self.camsnap,
            negotiator,
            runtime,
            facing,
            width,
            height,
            settings: self.settings,
            stream: Some(stream),
        })
    }
}

impl std::fmt::Debug for SessionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBuilder")
            .field("facing", &self.facing)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// A live camera session: one acquired stream, its negotiated settings,
/// and the still-capture pipeline
pub struct CameraSession {
    camsnap: Camsnap,
    negotiator: Negotiator,
    pipeline: CapturePipeline,
    runtime: RuntimeCapabilities,
    facing: FacingDirection,
    width: Option<u32>,
    height: Option<u32>,
    settings: CameraSettings,
    stream: Option<Box<dyn CaptureStream>>,
}

impl CameraSession {
    /// Facing direction the session currently prefers
    pub fn facing(&self) -> FacingDirection {
        self.facing
    }

    /// Normalized settings last negotiated
    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Whether the session holds a live stream
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// The live stream, while the session is open
    pub fn stream(&self) -> Option<&dyn CaptureStream> {
        self.stream.as_deref()
    }

    /// Re-negotiate the stream's tracks against new normalized settings.
    ///
    /// Completes once every video track's apply has settled; a rejection
    /// from one track fails the call without rolling back siblings.
    pub async fn apply_settings(&mut self, settings: CameraSettings) -> Result<(), CamsnapError> {
        let stream = self.stream.as_deref().ok_or(CamsnapError::InvalidState {
            expected: "open stream".to_string(),
            actual: "closed".to_string(),
        })?;
        self.settings = settings;
        self.negotiator
            .negotiate(Some(self.facing), stream, &self.settings)
            .await
    }

    /// Capture a still image from the given live frame.
    ///
    /// Synchronous; the first video track's current device settings ride
    /// along as capture-time metadata.
    pub fn capture(
        &self,
        frame: &VideoFrame,
        options: &CaptureOptions,
    ) -> Result<CapturedPicture, CamsnapError> {
        let stream = self.stream.as_deref().ok_or(CamsnapError::InvalidState {
            expected: "open stream".to_string(),
            actual: "closed".to_string(),
        })?;
        let device_settings = stream
            .video_tracks()
            .first()
            .map(|track| track.current_settings());

        self.pipeline
            .capture(frame, device_settings, options)
            .map_err(|e| CamsnapError::MediaProcessing {
                reason: e.to_string(),
            })
    }

    /// Switch the preferred facing direction.
    ///
    /// Acquires a replacement stream for the new direction. When the
    /// replacement resolves to the same physical device the current stream
    /// is kept and the duplicate torn down; otherwise the old stream is
    /// torn down, the replacement adopted, and settings re-negotiated.
    /// Returns whether the stream was replaced.
    pub async fn switch_facing(
        &mut self,
        direction: FacingDirection,
    ) -> Result<bool, CamsnapError> {
        let request = build_stream_request(Some(direction), self.width, self.height, &self.runtime);
        let replacement = self.camsnap.acquisition().acquire(&request).await?;

        if same_device(self.stream.as_deref(), Some(replacement.as_ref())) {
            debug!("facing switch resolved to the same device, keeping stream");
            teardown(Some(replacement.as_ref()));
            self.facing = direction;
            return Ok(false);
        }

        info!("📷 Switching camera to {}", direction);
        teardown(self.stream.as_deref());
        self.stream = Some(replacement);
        self.facing = direction;
        if let Some(stream) = self.stream.as_deref() {
            self.negotiator
                .negotiate(Some(direction), stream, &self.settings)
                .await?;
        }
        Ok(true)
    }

    /// Tear down the stream. Idempotent; the session is closed afterwards.
    pub fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            info!("📷 Closing camera session");
            teardown(Some(stream.as_ref()));
        }
    }
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("facing", &self.facing)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.close();
    }
}
