// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an anchor in the host document.
///
/// Accepts selector form (`"#app"`) and bare form (`"app"`); both name the
/// anchor with id `app`. Always displays in selector form.
///
/// # Example
/// ```
/// use mountwood::engine::MountTarget;
///
/// let target = MountTarget::parse("#app-navbar");
/// assert_eq!(target.id(), "app-navbar");
/// assert_eq!(target.to_string(), "#app-navbar");
/// assert_eq!(target, MountTarget::parse("app-navbar"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MountTarget(String);

impl MountTarget {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let id = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
        Self(id.to_string())
    }

    /// Anchor id without the leading `#`.
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<String> for MountTarget {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for MountTarget {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<MountTarget> for String {
    fn from(target: MountTarget) -> Self {
        target.to_string()
    }
}
