//! Stream identity comparison and teardown

use camsnap_core::{CaptureStream, CaptureTrack};
use std::sync::Arc;
use tracing::debug;

/// Whether two streams are backed by the same physical device.
///
/// False when either stream is absent. Otherwise compares the device
/// identifier of each stream's first track; equal identifiers mean a facing
/// switch resolved to the same device and re-acquisition was redundant.
pub fn same_device(a: Option<&dyn CaptureStream>, b: Option<&dyn CaptureStream>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => match (first_track(a), first_track(b)) {
            (Some(a), Some(b)) => a.device_id() == b.device_id(),
            _ => false,
        },
        _ => false,
    }
}

fn first_track(stream: &dyn CaptureStream) -> Option<Arc<dyn CaptureTrack>> {
    stream
        .video_tracks()
        .into_iter()
        .next()
        .or_else(|| stream.audio_tracks().into_iter().next())
}

/// Stop every track of a stream, then the stream itself.
///
/// Audio tracks stop first, then video tracks, then the stream object for
/// implementations that model one as directly stoppable. A no-op on an
/// absent stream; stopping an already-stopped track has no effect, so
/// repeated teardown is safe.
pub fn teardown(stream: Option<&dyn CaptureStream>) {
    let Some(stream) = stream else {
        return;
    };

    for track in stream.audio_tracks() {
        track.stop();
    }
    for track in stream.video_tracks() {
        track.stop();
    }
    stream.stop();
    debug!(stream = %stream.id(), "stream torn down");
}
