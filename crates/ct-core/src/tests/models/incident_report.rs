use crate::{IncidentCategory, IncidentReport, ReportStatus};

#[test]
fn test_incident_report_deserializes_camel_case_wire_format() {
    let json = r#"{
        "id": "66f1a2b3c4d5e6f7a8b9c0d1",
        "title": "Illegal dumping in park",
        "description": "Household waste piling up",
        "category": "waste",
        "status": "in_progress",
        "latitude": 30.1,
        "longitude": 69.2,
        "createdAt": "2024-01-01T00:00:00Z",
        "photoUrl": "https://cdn.example.com/photos/1.jpg"
    }"#;

    let report: IncidentReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.id, "66f1a2b3c4d5e6f7a8b9c0d1");
    assert_eq!(report.category, IncidentCategory::Waste);
    assert_eq!(report.status, ReportStatus::InProgress);
    assert_eq!(report.latitude, 30.1);
    assert_eq!(
        report.photo_url.as_deref(),
        Some("https://cdn.example.com/photos/1.jpg")
    );
}

#[test]
fn test_incident_report_photo_url_is_optional() {
    let json = r#"{
        "id": "1",
        "title": "t",
        "description": "d",
        "category": "other",
        "status": "new",
        "latitude": 0.0,
        "longitude": 0.0,
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;

    let report: IncidentReport = serde_json::from_str(json).unwrap();
    assert!(report.photo_url.is_none());
}
