//! Host runtime descriptors used when building stream requests
//!
//! Platform behavior differences are dispatched over an explicit family enum
//! reported by the host environment, never inferred from a user-agent string.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Browser/engine family the host runtime reports itself as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    /// Safari and other WebKit-derived runtimes
    WebKit,
    /// Firefox family
    Gecko,
    /// Chromium family
    Blink,
    /// Anything that does not report a known family
    Unknown,
}

impl PlatformFamily {
    /// Whether this family honors a user-facing camera preference only when
    /// requested as an exact match rather than an ideal one.
    pub fn requires_exact_user_facing(&self) -> bool {
        matches!(self, PlatformFamily::WebKit)
    }
}

impl Default for PlatformFamily {
    fn default() -> Self {
        PlatformFamily::Unknown
    }
}

/// Constraint names a runtime may report support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintName {
    /// Facing-direction constraint
    FacingMode,
    /// Frame width constraint
    Width,
    /// Frame height constraint
    Height,
    /// Frame rate constraint
    FrameRate,
    /// Aspect ratio constraint
    AspectRatio,
}

/// What the host runtime reports about its own constraint support
#[derive(Debug, Clone, Default)]
pub struct RuntimeCapabilities {
    /// Constraint names the runtime can report support for; `None` when the
    /// runtime cannot report supported constraints at all
    supported: Option<HashSet<ConstraintName>>,
    /// Platform family the runtime reports itself as
    platform: PlatformFamily,
}

impl RuntimeCapabilities {
    /// A runtime that cannot report its supported constraints
    pub fn unreported(platform: PlatformFamily) -> Self {
        Self {
            supported: None,
            platform,
        }
    }

    /// A runtime reporting the given supported constraint names
    pub fn reporting<I>(platform: PlatformFamily, names: I) -> Self
    where
        I: IntoIterator<Item = ConstraintName>,
    {
        Self {
            supported: Some(names.into_iter().collect()),
            platform,
        }
    }

    /// A runtime reporting the full constraint vocabulary
    pub fn full(platform: PlatformFamily) -> Self {
        Self::reporting(
            platform,
            [
                ConstraintName::FacingMode,
                ConstraintName::Width,
                ConstraintName::Height,
                ConstraintName::FrameRate,
                ConstraintName::AspectRatio,
            ],
        )
    }

    /// Whether the runtime can report supported constraints at all
    pub fn can_report(&self) -> bool {
        self.supported.is_some()
    }

    /// Whether the runtime reports support for a constraint name.
    /// Always false when the runtime cannot report.
    pub fn supports(&self, name: ConstraintName) -> bool {
        self.supported
            .as_ref()
            .map(|names| names.contains(&name))
            .unwrap_or(false)
    }

    /// Platform family of the runtime
    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }
}
