use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of environmental incident being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IncidentCategory {
    /// Waste & illegal dumping (the form's default)
    #[default]
    Waste,
    Water,
    Air,
    Deforestation,
    Other,
}

impl IncidentCategory {
    /// Wire string sent in the multipart upload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waste => "waste",
            Self::Water => "water",
            Self::Air => "air",
            Self::Deforestation => "deforestation",
            Self::Other => "other",
        }
    }

    /// Human-readable label for rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waste => "Waste & Illegal Dumping",
            Self::Water => "Water Pollution",
            Self::Air => "Air Pollution",
            Self::Deforestation => "Deforestation",
            Self::Other => "Other Environmental Issue",
        }
    }
}

impl FromStr for IncidentCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "waste" => Ok(Self::Waste),
            "water" => Ok(Self::Water),
            "air" => Ok(Self::Air),
            "deforestation" => Ok(Self::Deforestation),
            "other" => Ok(Self::Other),
            _ => Err(CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
