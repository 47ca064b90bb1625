//! Constraint negotiation
//!
//! Converts an application's normalized settings into native constraint
//! sets validated against a device's reported capabilities, then applies
//! one atomic advanced-constraints update per video track. Capabilities the
//! device does not report, and settings the application did not request,
//! never produce an entry. Mode settings the device cannot honor are
//! dropped with a diagnostic instead of failing the pass.

use crate::range::{clamp, convert_normalized};
use crate::settings::{CameraSettings, ModeTranslator};
use camsnap_core::{
    Capability, CapabilityDescriptor, CamsnapError, CaptureStream, CaptureTrack, DiagnosticSink,
    FacingDirection, NativeConstraintSet, NativeValue, NegotiationNotice, TrackCapabilities,
};
use futures::future;
use std::sync::Arc;
use tracing::debug;

/// Negotiates native constraints from normalized settings
#[derive(Clone)]
pub struct Negotiator {
    translator: Arc<dyn ModeTranslator>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Negotiator {
    /// Negotiator using the given translation service and diagnostic sink
    pub fn new(translator: Arc<dyn ModeTranslator>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            translator,
            diagnostics,
        }
    }

    /// Build the validated constraint set for one track's capabilities.
    ///
    /// Pure with respect to the device: nothing is applied here. `facing`
    /// only contextualizes diagnostics.
    pub fn constraints_for(
        &self,
        capabilities: &TrackCapabilities,
        settings: &CameraSettings,
        facing: Option<FacingDirection>,
    ) -> NativeConstraintSet {
        let mut set = NativeConstraintSet::new();

        for capability in Capability::RANGED {
            let Some(descriptor) = capabilities.get(capability) else {
                continue;
            };
            let Some((min, max)) = descriptor.bounds() else {
                continue;
            };
            let Some(converted) = convert_normalized(settings.ranged(capability), min, max) else {
                continue;
            };
            // Re-clamp against the same bounds to absorb rounding drift
            set.insert(capability, NativeValue::Number(clamp(converted, min, max)));
        }

        for capability in Capability::MODE {
            let Some(descriptor) = capabilities.get(capability) else {
                continue;
            };
            let Some(mode) = settings.mode(capability) else {
                continue;
            };

            match self.translator.translate(capability, &mode) {
                Some(translated) => {
                    let enumerated_without_match = matches!(
                        descriptor,
                        CapabilityDescriptor::Options(_)
                    ) && !descriptor.supports(&translated);

                    if enumerated_without_match {
                        self.diagnostics.constraint_dropped(&NegotiationNotice {
                            capability,
                            requested: mode.label().to_string(),
                            translated: Some(translated),
                            facing,
                        });
                    } else {
                        set.insert(capability, translated);
                    }
                }
                None => {
                    self.diagnostics.constraint_dropped(&NegotiationNotice {
                        capability,
                        requested: mode.label().to_string(),
                        translated: None,
                        facing,
                    });
                }
            }
        }

        set
    }

    /// Negotiate and apply constraints to a single track
    pub async fn apply_to_track(
        &self,
        track: &dyn CaptureTrack,
        settings: &CameraSettings,
        facing: Option<FacingDirection>,
    ) -> Result<NativeConstraintSet, CamsnapError> {
        let facing = track.facing().or(facing);
        let set = self.constraints_for(&track.capabilities(), settings, facing);
        debug!(
            track = %track.id(),
            entries = set.len(),
            "applying negotiated constraints"
        );
        track.apply_constraints(&set).await?;
        Ok(set)
    }

    /// Negotiate every video track of a stream concurrently.
    ///
    /// Completes only once every track's apply has settled. One track's
    /// rejection fails the whole call; constraints already applied to
    /// sibling tracks are not rolled back.
    pub async fn negotiate(
        &self,
        facing: Option<FacingDirection>,
        stream: &dyn CaptureStream,
        settings: &CameraSettings,
    ) -> Result<(), CamsnapError> {
        let tracks = stream.video_tracks();
        let applies = tracks
            .iter()
            .map(|track| self.apply_to_track(track.as_ref(), settings, facing));

        let results = future::join_all(applies).await;
        results.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }
}
