use crate::ReportStatus;

use std::str::FromStr;

#[test]
fn test_report_status_as_str() {
    assert_eq!(ReportStatus::New.as_str(), "new");
    assert_eq!(ReportStatus::Verified.as_str(), "verified");
    assert_eq!(ReportStatus::InProgress.as_str(), "in_progress");
    assert_eq!(ReportStatus::Resolved.as_str(), "resolved");
}

#[test]
fn test_report_status_from_str() {
    assert_eq!(
        ReportStatus::from_str("in_progress").unwrap(),
        ReportStatus::InProgress
    );
    assert!(ReportStatus::from_str("done").is_err());
}

#[test]
fn test_report_status_default() {
    assert_eq!(ReportStatus::default(), ReportStatus::New);
}

#[test]
fn test_report_status_colors_are_distinct() {
    let mut colors: Vec<&str> = ReportStatus::ALL.iter().map(|s| s.color()).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), ReportStatus::ALL.len());
}

#[test]
fn test_report_status_serde_snake_case() {
    let json = serde_json::to_string(&ReportStatus::InProgress).unwrap();
    assert_eq!(json, "\"in_progress\"");
    let status: ReportStatus = serde_json::from_str("\"resolved\"").unwrap();
    assert_eq!(status, ReportStatus::Resolved);
}
