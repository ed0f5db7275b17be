pub mod incident_category;
pub mod incident_report;
pub mod location_source;
pub mod new_account;
pub mod photo_attachment;
pub mod position;
pub mod report_draft;
pub mod report_status;
pub mod selected_location;
pub mod session;
pub mod status_filter;
pub mod user;
