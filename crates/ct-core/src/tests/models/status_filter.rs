use crate::{ReportStatus, StatusFilter};

use std::str::FromStr;

#[test]
fn test_status_filter_all_matches_everything() {
    for status in ReportStatus::ALL {
        assert!(StatusFilter::All.matches(status));
    }
}

#[test]
fn test_status_filter_only_matches_exact_status() {
    let filter = StatusFilter::Only(ReportStatus::Verified);
    assert!(filter.matches(ReportStatus::Verified));
    assert!(!filter.matches(ReportStatus::New));
    assert!(!filter.matches(ReportStatus::InProgress));
    assert!(!filter.matches(ReportStatus::Resolved));
}

#[test]
fn test_status_filter_from_str() {
    assert_eq!(StatusFilter::from_str("all").unwrap(), StatusFilter::All);
    assert_eq!(
        StatusFilter::from_str("in_progress").unwrap(),
        StatusFilter::Only(ReportStatus::InProgress)
    );
    assert!(StatusFilter::from_str("open").is_err());
}

#[test]
fn test_status_filter_default_is_all() {
    assert_eq!(StatusFilter::default(), StatusFilter::All);
}
