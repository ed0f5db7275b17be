use serde::{Deserialize, Serialize};

/// Which producer set the report form's current location.
///
/// Three producers write to the same value; whichever fires last wins.
/// The source tag makes the race explicit without arbitrating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// One-shot device geolocation fix.
    Device,
    /// First hit of a free-text geocoder search.
    Search,
    /// Coordinates picked directly on the map.
    MapClick,
}

impl LocationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Search => "search",
            Self::MapClick => "map_click",
        }
    }
}

impl std::fmt::Display for LocationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
