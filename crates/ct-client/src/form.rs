use crate::{ApiClient, ApiClientResult, LocationPicker};

use ct_core::{ReportDraft, Session};
use log::info;

/// Report composition state: the draft fields plus the shared location
/// picker, with a submit-in-flight flag tracked by the form itself (the
/// session manager exposes no loading state).
#[derive(Debug, Default)]
pub struct ReportForm {
    pub draft: ReportDraft,
    pub picker: LocationPicker,
    submitting: bool,
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the current draft.
    ///
    /// Refused without a selected location (no network call is made). The
    /// bearer token is attached when a session exists; `createdBy` only
    /// when the user is not anonymous. On success every field and the
    /// selection reset to empty; on failure the form is left as-is for the
    /// caller to surface the error. All-or-nothing, no retry.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: Option<&Session>,
    ) -> ApiClientResult<()> {
        self.draft.location = self.picker.selected().copied();
        self.draft.validate()?;

        let token = session.map(|s| s.token.as_str());
        let created_by = session
            .filter(|s| !s.user.is_anonymous)
            .map(|s| s.user.id.as_str());

        self.submitting = true;
        let result = api.submit_report(&self.draft, token, created_by).await;
        self.submitting = false;

        if result.is_ok() {
            info!("incident reported successfully");
            self.draft.reset();
            self.picker.clear();
        }

        result
    }
}
