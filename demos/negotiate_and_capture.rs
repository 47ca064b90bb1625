//! Negotiate normalized settings against a mock camera and capture a still.
//!
//! Run with: cargo run --example negotiate_and_capture

use camsnap::{
    Camsnap, CameraSettings, Capability, CaptureOptions, FlashMode, ImageType, MemoryDiagnostics,
    MockAcquisition, MockStream, MockTrack, NativeValue, TrackCapabilities, VideoFrame,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    camsnap::init_logging();

    // A mock device with a zoom range and a torch that only turns off
    let acquisition = Arc::new(MockAcquisition::new());
    acquisition.queue(MockStream::with_tracks(
        Vec::new(),
        vec![Arc::new(
            MockTrack::video("demo-cam").with_capabilities(
                TrackCapabilities::new()
                    .with_range(Capability::Zoom, 1.0, 5.0)
                    .with_options(Capability::Torch, vec![NativeValue::Flag(false)]),
            ),
        )],
    ));

    let diagnostics = MemoryDiagnostics::new();
    let camsnap = Camsnap::init(acquisition)?.with_diagnostics(Arc::new(diagnostics.clone()));

    // Zoom halfway in, ask for flash the device cannot deliver
    let session = camsnap
        .session()
        .settings(CameraSettings {
            zoom: Some(0.5),
            flash: Some(FlashMode::On),
            ..Default::default()
        })
        .open()
        .await?;

    for notice in diagnostics.take() {
        println!("negotiation notice: {}", notice);
    }

    let frame = VideoFrame::filled(1280, 720, [30, 60, 120, 255])?;
    let picture = session.capture(
        &frame,
        &CaptureOptions::new()
            .with_scale(0.5)
            .with_image_type(ImageType::Jpg),
    )?;

    println!(
        "captured {}x{} jpeg, {} base64 bytes",
        picture.width,
        picture.height,
        picture.payload.len()
    );
    println!("device settings: {:?}", picture.device_settings);

    Ok(())
}
