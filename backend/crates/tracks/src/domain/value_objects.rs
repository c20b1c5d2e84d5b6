//! Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a tracked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    /// Included in price refreshes
    #[default]
    Active,
    /// Kept, but skipped by price refreshes
    Paused,
    /// Bought by auto-purchase; no longer refreshed
    Purchased,
}

impl TrackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackStatus::Active => "active",
            TrackStatus::Paused => "paused",
            TrackStatus::Purchased => "purchased",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TrackStatus::Active)
    }
}

impl fmt::Display for TrackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown track status \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TrackStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TrackStatus::Active),
            "paused" => Ok(TrackStatus::Paused),
            "purchased" => Ok(TrackStatus::Purchased),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
