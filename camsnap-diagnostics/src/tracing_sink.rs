//! Human-readable diagnostic sink backed by `tracing`

use camsnap_core::{DiagnosticSink, NegotiationNotice};
use tracing::warn;

/// Emits each dropped-constraint notice as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn constraint_dropped(&self, notice: &NegotiationNotice) {
        warn!(
            capability = %notice.capability,
            requested = %notice.requested,
            "{}",
            notice
        );
    }
}
