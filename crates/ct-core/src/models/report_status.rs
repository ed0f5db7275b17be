use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Backend-owned lifecycle tag on a persisted report.
///
/// The client never transitions a status; it only reads and color-codes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    New,
    Verified,
    InProgress,
    Resolved,
}

impl ReportStatus {
    pub const ALL: [Self; 4] = [Self::New, Self::Verified, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Verified => "verified",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New Report",
            Self::Verified => "Verified",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// Map marker color for this status.
    pub fn color(&self) -> &'static str {
        match self {
            Self::New => "#9CA3AF",
            Self::Verified => "#3B82F6",
            Self::InProgress => "#F59E0B",
            Self::Resolved => "#10B981",
        }
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "new" => Ok(Self::New),
            "verified" => Ok(Self::Verified),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
