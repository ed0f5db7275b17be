use crate::{LocationSource, Position};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The report form's shared location value, tagged with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub position: Position,
    pub source: LocationSource,
    pub picked_at: DateTime<Utc>,
}

impl SelectedLocation {
    pub fn now(position: Position, source: LocationSource) -> Self {
        Self {
            position,
            source,
            picked_at: Utc::now(),
        }
    }
}
