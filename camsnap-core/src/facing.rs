//! Facing direction of a capture device

use serde::{Deserialize, Serialize};

/// Which physical direction a capture device points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingDirection {
    /// Camera pointing at the user (front camera)
    User,
    /// Camera pointing away from the user (rear camera)
    Environment,
}

impl FacingDirection {
    /// Native string representation used in stream requests
    pub fn as_str(&self) -> &'static str {
        match self {
            FacingDirection::User => "user",
            FacingDirection::Environment => "environment",
        }
    }

    /// Parse a native facing string, `None` for unrecognized values
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" | "front" => Some(FacingDirection::User),
            "environment" | "back" => Some(FacingDirection::Environment),
            _ => None,
        }
    }

    /// The direction reached by toggling between front and rear
    pub fn toggled(&self) -> Self {
        match self {
            FacingDirection::User => FacingDirection::Environment,
            FacingDirection::Environment => FacingDirection::User,
        }
    }
}

impl std::fmt::Display for FacingDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(FacingDirection::parse("user"), Some(FacingDirection::User));
        assert_eq!(
            FacingDirection::parse("back"),
            Some(FacingDirection::Environment)
        );
        assert_eq!(FacingDirection::parse("sideways"), None);
    }

    #[test]
    fn test_toggle_round_trip() {
        let facing = FacingDirection::User;
        assert_eq!(facing.toggled().toggled(), facing);
    }
}
