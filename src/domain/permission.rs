//! Remembered per-origin permission decisions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Capability tag under which media-capture decisions are stored
pub const MEDIA_CAPABILITY: &str = "rainbow";

/// An explicit answer that can be remembered for an origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    /// Whether this decision grants access
    pub const fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl From<bool> for Decision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "deny" => Ok(Self::Deny),
            other => Err(format!("Unknown decision \"{}\". Expected allow or deny", other)),
        }
    }
}

/// Result of looking up an origin in the permission store.
///
/// `Unknown` means nothing is stored; it is never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionStatus {
    Allow,
    Deny,
    #[default]
    Unknown,
}

impl PermissionStatus {
    /// The stored decision, if any
    pub const fn decision(&self) -> Option<Decision> {
        match self {
            Self::Allow => Some(Decision::Allow),
            Self::Deny => Some(Decision::Deny),
            Self::Unknown => None,
        }
    }
}

impl From<Decision> for PermissionStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Allow => Self::Allow,
            Decision::Deny => Self::Deny,
        }
    }
}

impl From<Option<Decision>> for PermissionStatus {
    fn from(decision: Option<Decision>) -> Self {
        decision.map(Self::from).unwrap_or_default()
    }
}
