//! # Camsnap Diagnostics
//!
//! Diagnostic sinks for non-fatal negotiation notices, plus the logging
//! bootstrap. Production builds run with the core's no-op sink; development
//! builds plug in [`TracingDiagnostics`] for human-readable warnings, and
//! tests collect notices with [`MemoryDiagnostics`].

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod logging;
pub mod memory_sink;
pub mod tracing_sink;

// Re-export main types
pub use logging::init_logging;
pub use memory_sink::MemoryDiagnostics;
pub use tracing_sink::TracingDiagnostics;
