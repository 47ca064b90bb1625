//! # Camsnap - Normalized Camera Control and Still Capture
//!
//! Camsnap negotiates a live capture device's operating parameters against
//! an application's normalized, platform-independent settings, and renders
//! single still frames from the live stream into encoded images.
//!
//! ## Key Features
//!
//! - **Normalized settings**: express zoom, exposure, focus, and flash in
//!   `[0, 1]` values and named modes, independent of any device's ranges
//! - **Best-effort negotiation**: settings a device cannot honor are dropped
//!   with a diagnostic instead of failing the pass
//! - **Platform-tolerant acquisition**: desired-stream requests degrade to a
//!   baseline whenever the runtime cannot report its constraint support
//! - **Synchronous still capture**: scale, mirror, and encode a live frame
//!   to PNG or JPEG entirely in memory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use camsnap::{Camsnap, CameraSettings, CaptureOptions, MockAcquisition, VideoFrame};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let camsnap = Camsnap::init(Arc::new(MockAcquisition::new()))?;
//!
//!     // Open a session: builds the stream request, acquires the stream,
//!     // and runs one negotiation pass
//!     let mut session = camsnap
//!         .session()
//!         .settings(CameraSettings {
//!             zoom: Some(0.5),
//!             ..Default::default()
//!         })
//!         .open()
//!         .await?;
//!
//!     // Capture a still image from the current live frame
//!     let frame = VideoFrame::filled(1280, 720, [40, 80, 160, 255])?;
//!     let picture = session.capture(&frame, &CaptureOptions::default())?;
//!     println!("captured {}x{}", picture.width, picture.height);
//!
//!     session.close();
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export core types for easy access
pub use camsnap_core::{
    Capability, CapabilityDescriptor, CamsnapError, CaptureStream, CaptureTrack, ConstraintName,
    DiagnosticSink, Exactness, FacingConstraint, FacingDirection, MockAcquisition, MockStream,
    MockTrack, NativeConstraintSet, NativeValue, NegotiationNotice, NoopDiagnostics,
    PlatformFamily, RuntimeCapabilities, StreamAcquisition, StreamRequest, TrackCapabilities,
    TrackKind, VideoRequest,
};

pub use camsnap_media::{
    build_stream_request, same_device, teardown, CameraSettings, CaptureCallback, CaptureOptions,
    CapturePipeline, CapturedPicture, FlashMode, FocusMode, ImageSize, ImageType, MediaError,
    MediaResult, ModeSetting, ModeTranslator, Negotiator, RasterSurfaceProvider, RenderSurface,
    StandardModeTranslator, SurfaceProvider, VideoFrame, WhiteBalance, DEFAULT_JPEG_QUALITY,
};

#[cfg(feature = "diagnostics")]
pub use camsnap_diagnostics::{init_logging, MemoryDiagnostics, TracingDiagnostics};

// Public API modules
pub mod config;
pub mod session;

// Re-export main API types
pub use config::{CaptureDefaults, GlobalConfig};
pub use session::{CameraSession, SessionBuilder};

use std::sync::Arc;

/// Main entry point for Camsnap.
///
/// Holds the injected collaborators (acquisition service, mode translator,
/// diagnostic sink, surface provider) and hands out session builders.
/// Cheap to clone; clones share the collaborators.
#[derive(Clone)]
pub struct Camsnap {
    config: GlobalConfig,
    acquisition: Arc<dyn StreamAcquisition>,
    translator: Arc<dyn ModeTranslator>,
    diagnostics: Arc<dyn DiagnosticSink>,
    surfaces: Arc<dyn SurfaceProvider>,
}

impl Camsnap {
    /// Initialize with default configuration and the given acquisition
    /// service
    pub fn init(acquisition: Arc<dyn StreamAcquisition>) -> Result<Self, CamsnapError> {
        Self::init_with(acquisition, GlobalConfig::default())
    }

    /// Initialize with custom global configuration
    pub fn init_with(
        acquisition: Arc<dyn StreamAcquisition>,
        config: GlobalConfig,
    ) -> Result<Self, CamsnapError> {
        config.validate()?;
        Ok(Self {
            config,
            acquisition,
            translator: Arc::new(StandardModeTranslator),
            diagnostics: Arc::new(NoopDiagnostics),
            surfaces: Arc::new(RasterSurfaceProvider),
        })
    }

    /// Replace the mode translation service
    pub fn with_translator(mut self, translator: Arc<dyn ModeTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the diagnostic sink
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replace the rendering surface provider
    pub fn with_surface_provider(mut self, surfaces: Arc<dyn SurfaceProvider>) -> Self {
        self.surfaces = surfaces;
        self
    }

    /// Global configuration in effect
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Create a session builder
    pub fn session(&self) -> SessionBuilder {
        SessionBuilder::new(self)
    }

    pub(crate) fn acquisition(&self) -> Arc<dyn StreamAcquisition> {
        self.acquisition.clone()
    }

    pub(crate) fn negotiator(&self) -> Negotiator {
        Negotiator::new(self.translator.clone(), self.diagnostics.clone())
    }

    pub(crate) fn pipeline(&self) -> CapturePipeline {
        CapturePipeline::new(self.surfaces.clone())
    }
}

impl std::fmt::Debug for Camsnap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Camsnap")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
