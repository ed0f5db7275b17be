use crate::{ApiClient, ApiClientResult};

use ct_core::{IncidentReport, Position, ReportStatus, StatusFilter};
use log::info;

/// Dashboard render mode: card grid or map markers over the same
/// filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Map,
}

/// A map marker for one filtered report, color-coded by status.
#[derive(Debug, Clone, Copy)]
pub struct MapMarker<'a> {
    pub position: Position,
    pub color: &'static str,
    pub report: &'a IncidentReport,
}

/// Fetch-once listing state for the user's own reports.
///
/// One fetch per mount, no cache or refresh; filtering is a client-side
/// predicate over the fetched list; the detail view never re-fetches.
#[derive(Debug, Default)]
pub struct ReportBoard {
    reports: Vec<IncidentReport>,
    pub filter: StatusFilter,
    pub view: ViewMode,
    selected: Option<String>,
}

impl ReportBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the user's reports. Replaces whatever was loaded before.
    pub async fn load(&mut self, api: &ApiClient, user_id: &str) -> ApiClientResult<()> {
        self.reports = api.list_reports(user_id).await?;
        self.selected = None;
        info!("loaded {} report(s) for user {}", self.reports.len(), user_id);
        Ok(())
    }

    pub fn reports(&self) -> &[IncidentReport] {
        &self.reports
    }

    /// Reports matching the current filter, original order preserved.
    pub fn filtered(&self) -> Vec<&IncidentReport> {
        self.reports
            .iter()
            .filter(|r| self.filter.matches(r.status))
            .collect()
    }

    /// Per-status counts for the filter chips.
    pub fn status_counts(&self) -> [(ReportStatus, usize); 4] {
        ReportStatus::ALL.map(|status| {
            let count = self.reports.iter().filter(|r| r.status == status).count();
            (status, count)
        })
    }

    /// Markers for the map view, one per filtered report.
    pub fn markers(&self) -> Vec<MapMarker<'_>> {
        self.filtered()
            .into_iter()
            .map(|report| MapMarker {
                position: Position::new(report.latitude, report.longitude),
                color: report.status.color(),
                report,
            })
            .collect()
    }

    /// Switch to the read-only detail view. Unknown ids are a no-op.
    pub fn select(&mut self, id: &str) -> Option<&IncidentReport> {
        if !self.reports.iter().any(|r| r.id == id) {
            return None;
        }
        self.selected = Some(id.to_string());
        self.selected_report()
    }

    /// Back to the list without re-fetching.
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn selected_report(&self) -> Option<&IncidentReport> {
        let id = self.selected.as_deref()?;
        self.reports.iter().find(|r| r.id == id)
    }

    #[cfg(test)]
    pub(crate) fn set_reports_for_test(&mut self, reports: Vec<IncidentReport>) {
        self.reports = reports;
    }
}
