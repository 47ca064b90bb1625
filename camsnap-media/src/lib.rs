//! # Camsnap Media
//!
//! Constraint negotiation and the still-capture pipeline for Camsnap.
//! This crate turns an application's normalized camera settings into
//! validated native constraint sets, builds desired-stream requests that
//! degrade gracefully across platforms, renders a live frame into an
//! encoded still image, and handles stream identity and teardown.

#![warn(clippy::all)]

pub mod capture;
pub mod error;
pub mod frame;
pub mod lifecycle;
pub mod negotiate;
pub mod range;
pub mod request;
pub mod settings;
pub mod surface;

// Re-export main types
pub use capture::{
    CaptureCallback, CaptureOptions, CapturePipeline, CapturedPicture, ImageSize, ImageType,
    DEFAULT_JPEG_QUALITY,
};
pub use error::{MediaError, MediaResult};
pub use frame::VideoFrame;
pub use lifecycle::{same_device, teardown};
pub use negotiate::Negotiator;
pub use request::build_stream_request;
pub use settings::{
    CameraSettings, FlashMode, FocusMode, ModeSetting, ModeTranslator, StandardModeTranslator,
    WhiteBalance,
};
pub use surface::{RasterSurfaceProvider, RenderSurface, SurfaceProvider};
