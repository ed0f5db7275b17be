use crate::{IncidentCategory, ReportStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted report as returned by the backend. Read-only on this side;
/// creation and status transitions belong entirely to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: IncidentCategory,
    pub status: ReportStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub photo_url: Option<String>,
}
