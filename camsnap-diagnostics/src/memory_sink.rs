//! Collecting diagnostic sink

use camsnap_core::{DiagnosticSink, NegotiationNotice};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects notices in memory so callers can inspect or surface them.
///
/// Clones share the same buffer, so one handle can be injected into a
/// negotiator while another drains the notices afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    notices: Arc<Mutex<Vec<NegotiationNotice>>>,
}

impl MemoryDiagnostics {
    /// Empty collecting sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected notices
    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    /// Whether nothing was dropped
    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }

    /// Drain and return every collected notice
    pub fn take(&self) -> Vec<NegotiationNotice> {
        std::mem::take(&mut *self.notices.lock())
    }

    /// Snapshot of collected notices without draining
    pub fn snapshot(&self) -> Vec<NegotiationNotice> {
        self.notices.lock().clone()
    }
}

impl DiagnosticSink for MemoryDiagnostics {
    fn constraint_dropped(&self, notice: &NegotiationNotice) {
        self.notices.lock().push(notice.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camsnap_core::Capability;

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemoryDiagnostics::new();
        let handle = sink.clone();

        sink.constraint_dropped(&NegotiationNotice {
            capability: Capability::Torch,
            requested: "on".to_string(),
            translated: None,
            facing: None,
        });

        assert_eq!(handle.len(), 1);
        assert_eq!(handle.take().len(), 1);
        assert!(sink.is_empty());
    }
}
