mod incident_category;
mod incident_report;
mod report_draft;
mod report_status;
mod status_filter;
mod user;
