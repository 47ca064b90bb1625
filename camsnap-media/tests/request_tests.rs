//! Unit tests for desired-stream request building

use camsnap_core::{
    ConstraintName, Exactness, FacingDirection, PlatformFamily, RuntimeCapabilities,
    StreamRequest, VideoRequest,
};
use camsnap_media::build_stream_request;

fn facing_of(request: &StreamRequest) -> Option<(FacingDirection, Exactness)> {
    match &request.video {
        VideoRequest::Constraints { facing, .. } => {
            facing.map(|f| (f.direction, f.exactness))
        }
        VideoRequest::Enabled(_) => None,
    }
}

// ============================================================================
// BASELINE FALLBACK TESTS
// ============================================================================

#[test]
fn test_fully_specified_caller_gets_baseline() {
    let runtime = RuntimeCapabilities::full(PlatformFamily::Blink);
    let request = build_stream_request(
        Some(FacingDirection::User),
        Some(1280),
        Some(720),
        &runtime,
    );
    assert_eq!(request, StreamRequest::baseline());
}

#[test]
fn test_unreporting_runtime_gets_baseline() {
    let runtime = RuntimeCapabilities::unreported(PlatformFamily::Blink);
    let request = build_stream_request(Some(FacingDirection::User), None, None, &runtime);
    assert_eq!(request, StreamRequest::baseline());
}

#[test]
fn test_runtime_supporting_none_of_the_constraints_gets_baseline() {
    let runtime =
        RuntimeCapabilities::reporting(PlatformFamily::Blink, [ConstraintName::FrameRate]);
    let request = build_stream_request(Some(FacingDirection::User), None, None, &runtime);
    assert_eq!(request, StreamRequest::baseline());
}

#[test]
fn test_baseline_requests_never_carry_audio() {
    assert!(!StreamRequest::baseline().audio);
    let runtime = RuntimeCapabilities::full(PlatformFamily::Gecko);
    let request = build_stream_request(Some(FacingDirection::User), None, None, &runtime);
    assert!(!request.audio);
}

// ============================================================================
// FACING CONSTRAINT TESTS
// ============================================================================

#[test]
fn test_webkit_requires_exact_user_facing() {
    let runtime = RuntimeCapabilities::full(PlatformFamily::WebKit);
    let request = build_stream_request(Some(FacingDirection::User), None, None, &runtime);
    assert_eq!(
        facing_of(&request),
        Some((FacingDirection::User, Exactness::Exact))
    );
}

#[test]
fn test_webkit_environment_facing_stays_ideal() {
    let runtime = RuntimeCapabilities::full(PlatformFamily::WebKit);
    let request =
        build_stream_request(Some(FacingDirection::Environment), None, None, &runtime);
    assert_eq!(
        facing_of(&request),
        Some((FacingDirection::Environment, Exactness::Ideal))
    );
}

#[test]
fn test_other_platforms_always_request_ideal() {
    for platform in [
        PlatformFamily::Blink,
        PlatformFamily::Gecko,
        PlatformFamily::Unknown,
    ] {
        let runtime = RuntimeCapabilities::full(platform);
        let request = build_stream_request(Some(FacingDirection::User), None, None, &runtime);
        assert_eq!(
            facing_of(&request),
            Some((FacingDirection::User, Exactness::Ideal)),
            "platform {:?}",
            platform
        );
    }
}

#[test]
fn test_facing_omitted_when_runtime_lacks_facing_support() {
    let runtime = RuntimeCapabilities::reporting(
        PlatformFamily::Blink,
        [ConstraintName::Width, ConstraintName::Height],
    );
    let request =
        build_stream_request(Some(FacingDirection::User), Some(640), None, &runtime);

    assert_eq!(facing_of(&request), None);
    match request.video {
        VideoRequest::Constraints { width, .. } => assert_eq!(width, Some(640)),
        VideoRequest::Enabled(_) => panic!("expected structured video request"),
    }
}

// ============================================================================
// DIMENSION TESTS
// ============================================================================

#[test]
fn test_dimensions_attach_only_when_supported() {
    let runtime =
        RuntimeCapabilities::reporting(PlatformFamily::Blink, [ConstraintName::FacingMode]);
    let request = build_stream_request(
        Some(FacingDirection::Environment),
        Some(1920),
        Some(1080),
        &runtime,
    );

    match request.video {
        VideoRequest::Constraints { width, height, .. } => {
            assert_eq!(width, None);
            assert_eq!(height, None);
        }
        VideoRequest::Enabled(_) => panic!("expected structured video request"),
    }
}

#[test]
fn test_full_runtime_carries_requested_dimensions() {
    let runtime = RuntimeCapabilities::full(PlatformFamily::Gecko);
    let request = build_stream_request(None, Some(1280), Some(720), &runtime);

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "video": { "width": 1280, "height": 720 },
            "audio": false,
        })
    );
}
