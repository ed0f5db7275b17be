use crate::IncidentCategory;

use std::str::FromStr;

#[test]
fn test_incident_category_as_str() {
    assert_eq!(IncidentCategory::Waste.as_str(), "waste");
    assert_eq!(IncidentCategory::Water.as_str(), "water");
    assert_eq!(IncidentCategory::Air.as_str(), "air");
    assert_eq!(IncidentCategory::Deforestation.as_str(), "deforestation");
    assert_eq!(IncidentCategory::Other.as_str(), "other");
}

#[test]
fn test_incident_category_from_str() {
    assert_eq!(
        IncidentCategory::from_str("waste").unwrap(),
        IncidentCategory::Waste
    );
    assert_eq!(
        IncidentCategory::from_str("deforestation").unwrap(),
        IncidentCategory::Deforestation
    );
    assert!(IncidentCategory::from_str("noise").is_err());
}

#[test]
fn test_incident_category_default_is_waste() {
    assert_eq!(IncidentCategory::default(), IncidentCategory::Waste);
}

#[test]
fn test_incident_category_labels() {
    assert_eq!(IncidentCategory::Waste.label(), "Waste & Illegal Dumping");
    assert_eq!(IncidentCategory::Other.label(), "Other Environmental Issue");
}
