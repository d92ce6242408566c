//! Broken-link policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::SiteFrameError;

/// Action the builder takes when content references a missing target.
///
/// Internal links and markdown links carry separate policies on the record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Continue silently.
    Ignore,
}

impl BrokenLinkPolicy {
    /// Lower-case name as written in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            BrokenLinkPolicy::Throw => "throw",
            BrokenLinkPolicy::Warn => "warn",
            BrokenLinkPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for BrokenLinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrokenLinkPolicy {
    type Err = SiteFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "throw" => Ok(BrokenLinkPolicy::Throw),
            "warn" => Ok(BrokenLinkPolicy::Warn),
            "ignore" => Ok(BrokenLinkPolicy::Ignore),
            other => Err(SiteFrameError::config_error(
                "brokenLinkPolicy",
                format!(
                    "unknown policy `{}`, expected throw, warn or ignore",
                    other
                ),
            )),
        }
    }
}
