pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::incident_category::IncidentCategory;
pub use models::incident_report::IncidentReport;
pub use models::location_source::LocationSource;
pub use models::new_account::NewAccount;
pub use models::photo_attachment::PhotoAttachment;
pub use models::position::Position;
pub use models::report_draft::ReportDraft;
pub use models::report_status::ReportStatus;
pub use models::selected_location::SelectedLocation;
pub use models::session::Session;
pub use models::status_filter::StatusFilter;
pub use models::user::User;
