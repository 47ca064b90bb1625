//! Desired-stream request building
//!
//! Produces the request handed to the acquisition service. Always yields a
//! well-formed request: whenever the runtime cannot report its constraint
//! support, or supports none of the constraints this system sets, the
//! result degrades to the minimal baseline request instead of erroring.

use camsnap_core::{
    ConstraintName, FacingConstraint, FacingDirection, RuntimeCapabilities, StreamRequest,
    VideoRequest,
};
use tracing::debug;

/// Build the desired-stream request for an acquisition attempt.
///
/// A caller that specifies facing, width, and height together has taken
/// responsibility for dimension and facing negotiation downstream, so the
/// baseline request is returned unchanged. Otherwise the request carries
/// whatever of the preference the runtime reports it can honor, with
/// user-facing preferences requested as an exact match on platform
/// families that require it.
pub fn build_stream_request(
    facing: Option<FacingDirection>,
    width: Option<u32>,
    height: Option<u32>,
    runtime: &RuntimeCapabilities,
) -> StreamRequest {
    if facing.is_some() && width.is_some() && height.is_some() {
        return StreamRequest::baseline();
    }

    if !runtime.can_report() {
        debug!("runtime cannot report supported constraints, using baseline request");
        return StreamRequest::baseline();
    }

    let supports_facing = runtime.supports(ConstraintName::FacingMode);
    let supports_width = runtime.supports(ConstraintName::Width);
    let supports_height = runtime.supports(ConstraintName::Height);
    if !supports_facing && !supports_width && !supports_height {
        return StreamRequest::baseline();
    }

    let mut video = VideoRequest::constraints();
    if let VideoRequest::Constraints {
        facing: facing_slot,
        width: width_slot,
        height: height_slot,
    } = &mut video
    {
        if supports_facing {
            if let Some(direction) = facing {
                *facing_slot = Some(facing_constraint(direction, runtime));
            }
        }
        // Dimensions only ever attach to the structured variant
        if supports_width {
            *width_slot = width;
        }
        if supports_height {
            *height_slot = height;
        }
    }

    StreamRequest::with_video(video)
}

fn facing_constraint(
    direction: FacingDirection,
    runtime: &RuntimeCapabilities,
) -> FacingConstraint {
    let exact_user = runtime.platform().requires_exact_user_facing()
        && direction == FacingDirection::User;
    if exact_user {
        FacingConstraint::exact(direction)
    } else {
        FacingConstraint::ideal(direction)
    }
}
