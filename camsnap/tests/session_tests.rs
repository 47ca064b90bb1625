//! Integration tests for the session API
//!
//! Drives the full open -> negotiate -> capture -> switch -> close flow
//! against mock acquisition.

use camsnap::{
    Camsnap, CameraSettings, CamsnapError, Capability, CaptureOptions, FacingDirection, FlashMode,
    ImageType, MemoryDiagnostics, MockAcquisition, MockStream, MockTrack, NativeValue,
    TrackCapabilities, VideoFrame, VideoRequest,
};
use std::sync::Arc;

fn frame() -> VideoFrame {
    VideoFrame::filled(64, 36, [80, 90, 100, 255]).unwrap()
}

// ============================================================================
// SESSION LIFECYCLE TESTS
// ============================================================================

#[tokio::test]
async fn test_open_acquires_with_structured_request() {
    let acquisition = Arc::new(MockAcquisition::new());
    let camsnap = Camsnap::init(acquisition.clone()).unwrap();

    let session = camsnap.session().open().await.unwrap();

    assert!(session.is_open());
    assert_eq!(session.facing(), FacingDirection::User);

    let requests = acquisition.requests();
    assert_eq!(requests.len(), 1);
    assert!(matches!(&requests[0].video, VideoRequest::Constraints { .. }));
    assert!(!requests[0].audio);
}

#[tokio::test]
async fn test_failed_acquisition_propagates() {
    let camsnap = Camsnap::init(Arc::new(MockAcquisition::failing("permission denied"))).unwrap();

    let result = camsnap.session().open().await;
    assert!(matches!(result, Err(CamsnapError::Acquisition { .. })));
}

#[tokio::test]
async fn test_close_is_idempotent_and_stops_tracks() {
    let acquisition = Arc::new(MockAcquisition::new());
    let camsnap = Camsnap::init(acquisition).unwrap();
    let mut session = camsnap.session().open().await.unwrap();

    let track = session.stream().unwrap().video_tracks()[0].clone();
    session.close();
    session.close();

    assert!(!session.is_open());
    assert!(track.is_stopped());
}

// ============================================================================
// NEGOTIATION TESTS
// ============================================================================

#[tokio::test]
async fn test_open_negotiates_requested_settings() {
    let acquisition = Arc::new(MockAcquisition::new());
    let stream = MockStream::with_tracks(
        Vec::new(),
        vec![Arc::new(
            MockTrack::video("cam-0")
                .with_capabilities(TrackCapabilities::new().with_range(Capability::Zoom, 1.0, 5.0)),
        )],
    );
    acquisition.queue(stream);
    let camsnap = Camsnap::init(acquisition).unwrap();

    let session = camsnap
        .session()
        .settings(CameraSettings {
            zoom: Some(0.5),
            ..Default::default()
        })
        .open()
        .await
        .unwrap();

    let track = &session.stream().unwrap().video_tracks()[0];
    assert_eq!(track.current_settings()["zoom"], 3.0);
}

#[tokio::test]
async fn test_apply_settings_renegotiates_live_stream() {
    let acquisition = Arc::new(MockAcquisition::new());
    let stream = MockStream::with_tracks(
        Vec::new(),
        vec![Arc::new(MockTrack::video("cam-0").with_capabilities(
            TrackCapabilities::new().with_range(Capability::Brightness, 0.0, 100.0),
        ))],
    );
    acquisition.queue(stream);
    let camsnap = Camsnap::init(acquisition).unwrap();
    let mut session = camsnap.session().open().await.unwrap();

    session
        .apply_settings(CameraSettings {
            brightness: Some(1.0),
            ..Default::default()
        })
        .await
        .unwrap();

    let track = &session.stream().unwrap().video_tracks()[0];
    assert_eq!(track.current_settings()["brightness"], 100.0);
}

#[tokio::test]
async fn test_apply_settings_on_closed_session_fails() {
    let camsnap = Camsnap::init(Arc::new(MockAcquisition::new())).unwrap();
    let mut session = camsnap.session().open().await.unwrap();
    session.close();

    let result = session.apply_settings(CameraSettings::new()).await;
    assert!(matches!(result, Err(CamsnapError::InvalidState { .. })));
}

#[tokio::test]
async fn test_unsupported_mode_reaches_diagnostic_sink() {
    let acquisition = Arc::new(MockAcquisition::new());
    let stream = MockStream::with_tracks(
        Vec::new(),
        vec![Arc::new(MockTrack::video("cam-0").with_capabilities(
            TrackCapabilities::new()
                .with_options(Capability::Torch, vec![NativeValue::Flag(false)]),
        ))],
    );
    acquisition.queue(stream);

    let diagnostics = MemoryDiagnostics::new();
    let camsnap = Camsnap::init(acquisition)
        .unwrap()
        .with_diagnostics(Arc::new(diagnostics.clone()));

    camsnap
        .session()
        .settings(CameraSettings {
            flash: Some(FlashMode::On),
            ..Default::default()
        })
        .open()
        .await
        .unwrap();

    let notices = diagnostics.take();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].capability, Capability::Torch);
}

// ============================================================================
// CAPTURE TESTS
// ============================================================================

#[tokio::test]
async fn test_capture_carries_device_settings_metadata() {
    let acquisition = Arc::new(MockAcquisition::new());
    let stream = MockStream::with_tracks(
        Vec::new(),
        vec![Arc::new(
            MockTrack::video("cam-0")
                .with_capabilities(TrackCapabilities::new().with_range(Capability::Zoom, 1.0, 3.0)),
        )],
    );
    acquisition.queue(stream);
    let camsnap = Camsnap::init(acquisition).unwrap();

    let session = camsnap
        .session()
        .settings(CameraSettings {
            zoom: Some(1.0),
            ..Default::default()
        })
        .open()
        .await
        .unwrap();

    let picture = session.capture(&frame(), &CaptureOptions::default()).unwrap();

    assert_eq!(picture.width, 64);
    assert_eq!(picture.height, 36);
    let metadata = picture.device_settings.unwrap();
    assert_eq!(metadata["deviceId"], "cam-0");
    assert_eq!(metadata["zoom"], 3.0);
}

#[tokio::test]
async fn test_capture_surfaces_validation_faults() {
    let camsnap = Camsnap::init(Arc::new(MockAcquisition::new())).unwrap();
    let session = camsnap.session().open().await.unwrap();
    let options = CaptureOptions::new()
        .with_image_type(ImageType::Jpg)
        .with_quality(1.5);

    let result = session.capture(&frame(), &options);
    assert!(matches!(result, Err(CamsnapError::MediaProcessing { .. })));
}

#[tokio::test]
async fn test_capture_on_closed_session_fails() {
    let camsnap = Camsnap::init(Arc::new(MockAcquisition::new())).unwrap();
    let mut session = camsnap.session().open().await.unwrap();
    session.close();

    let result = session.capture(&frame(), &CaptureOptions::default());
    assert!(matches!(result, Err(CamsnapError::InvalidState { .. })));
}

// ============================================================================
// FACING SWITCH TESTS
// ============================================================================

#[tokio::test]
async fn test_switch_to_distinct_device_replaces_stream() {
    let acquisition = Arc::new(MockAcquisition::new());
    let camsnap = Camsnap::init(acquisition).unwrap();
    let mut session = camsnap.session().open().await.unwrap();

    let old_track = session.stream().unwrap().video_tracks()[0].clone();
    assert_eq!(old_track.device_id(), "mock-camera-user");

    let replaced = session
        .switch_facing(FacingDirection::Environment)
        .await
        .unwrap();

    assert!(replaced);
    assert!(old_track.is_stopped());
    assert_eq!(session.facing(), FacingDirection::Environment);
    let new_track = &session.stream().unwrap().video_tracks()[0];
    assert_eq!(new_track.device_id(), "mock-camera-environment");
    assert!(!new_track.is_stopped());
}

#[tokio::test]
async fn test_switch_resolving_to_same_device_keeps_stream() {
    let acquisition = Arc::new(MockAcquisition::new());
    // Both acquisitions resolve to the same physical device
    acquisition.queue(MockStream::single("only-cam"));
    acquisition.queue(MockStream::single("only-cam"));
    let camsnap = Camsnap::init(acquisition).unwrap();
    let mut session = camsnap.session().open().await.unwrap();

    let original_track = session.stream().unwrap().video_tracks()[0].clone();

    let replaced = session
        .switch_facing(FacingDirection::Environment)
        .await
        .unwrap();

    assert!(!replaced);
    assert!(!original_track.is_stopped());
    assert_eq!(session.facing(), FacingDirection::Environment);
    assert_eq!(
        session.stream().unwrap().video_tracks()[0].id(),
        original_track.id()
    );
}
