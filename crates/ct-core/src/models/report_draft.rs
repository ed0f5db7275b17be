//! In-progress, unsaved incident report being composed in the form.

use crate::{CoreError, IncidentCategory, PhotoAttachment, Result as CoreErrorResult, SelectedLocation};

use std::panic::Location;

use error_location::ErrorLocation;

/// Draft report built incrementally by field edits.
///
/// Submission is refused client-side while `location` is unset; every
/// other field may be empty as far as this client is concerned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub category: IncidentCategory,
    pub photo: Option<PhotoAttachment>,
    pub location: Option<SelectedLocation>,
}

impl ReportDraft {
    /// Hard submission precondition: a location must be selected.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.location.is_none() {
            return Err(CoreError::MissingLocation {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// Return every field to its empty default (after a successful submit).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
