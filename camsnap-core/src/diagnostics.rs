//! Non-fatal negotiation diagnostics
//!
//! Capability mismatches never fail a negotiation pass; the affected entry
//! is dropped and a notice describing the drop is handed to an injected
//! sink. The default sink discards notices.

use crate::capability::{Capability, NativeValue};
use crate::facing::FacingDirection;
use serde::Serialize;

/// One dropped-constraint notice emitted during negotiation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegotiationNotice {
    /// Capability whose entry was dropped
    pub capability: Capability,
    /// Application-level setting as requested
    pub requested: String,
    /// Native value the setting translated to, if translation succeeded
    pub translated: Option<NativeValue>,
    /// Facing direction active while negotiating
    pub facing: Option<FacingDirection>,
}

impl std::fmt::Display for NegotiationNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported {} setting {:?}",
            self.capability, self.requested
        )?;
        if let Some(translated) = &self.translated {
            write!(f, " (native {})", translated)?;
        }
        if let Some(facing) = self.facing {
            write!(f, " on {} camera", facing)?;
        }
        Ok(())
    }
}

/// Receiver for non-fatal negotiation notices
pub trait DiagnosticSink: Send + Sync {
    /// Called once per dropped constraint entry
    fn constraint_dropped(&self, notice: &NegotiationNotice);
}

/// Default sink: discards every notice
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl DiagnosticSink for NoopDiagnostics {
    fn constraint_dropped(&self, _notice: &NegotiationNotice) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        let notice = NegotiationNotice {
            capability: Capability::Torch,
            requested: "on".to_string(),
            translated: Some(NativeValue::Flag(true)),
            facing: Some(FacingDirection::Environment),
        };
        assert_eq!(
            notice.to_string(),
            "unsupported torch setting \"on\" (native true) on environment camera"
        );
    }
}
