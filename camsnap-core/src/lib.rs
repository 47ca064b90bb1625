//! # Camsnap Core
//!
//! Capability model and device contracts for the Camsnap capture system.
//! This crate defines the vocabulary shared by every other Camsnap crate:
//! capability descriptors as devices report them, native constraint values
//! as devices consume them, the stream/track trait seams behind which a
//! platform supplies its capture implementation, and the request types used
//! to acquire a stream in the first place.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod diagnostics;
pub mod error;
pub mod facing;
pub mod mock;
pub mod request;
pub mod runtime;
pub mod track;

// Re-export main types
pub use capability::{
    Capability, CapabilityDescriptor, NativeConstraintSet, NativeValue, TrackCapabilities,
};
pub use diagnostics::{DiagnosticSink, NegotiationNotice, NoopDiagnostics};
pub use error::CamsnapError;
pub use facing::FacingDirection;
pub use mock::{MockAcquisition, MockStream, MockTrack};
pub use request::{Exactness, FacingConstraint, StreamRequest, VideoRequest};
pub use runtime::{ConstraintName, PlatformFamily, RuntimeCapabilities};
pub use track::{CaptureStream, CaptureTrack, StreamAcquisition, TrackKind};
