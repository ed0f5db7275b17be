use crate::{
    CoreError, IncidentCategory, LocationSource, PhotoAttachment, Position, ReportDraft,
    SelectedLocation,
};

#[test]
fn test_draft_without_location_fails_validation() {
    let draft = ReportDraft {
        title: String::from("Illegal dumping"),
        description: String::from("Construction waste by the river"),
        ..ReportDraft::default()
    };

    assert!(matches!(
        draft.validate(),
        Err(CoreError::MissingLocation { .. })
    ));
}

#[test]
fn test_draft_with_location_passes_validation() {
    let draft = ReportDraft {
        location: Some(SelectedLocation::now(
            Position::new(30.1, 69.2),
            LocationSource::MapClick,
        )),
        ..ReportDraft::default()
    };

    assert!(draft.validate().is_ok());
}

#[test]
fn test_location_is_the_only_required_field() {
    // Every other field may be empty; only location gates submission.
    let draft = ReportDraft {
        title: String::new(),
        description: String::new(),
        location: Some(SelectedLocation::now(
            Position::new(0.0, 0.0),
            LocationSource::Device,
        )),
        ..ReportDraft::default()
    };
    assert!(draft.validate().is_ok());
}

#[test]
fn test_reset_clears_every_field() {
    let mut draft = ReportDraft {
        title: String::from("Smoke plume"),
        description: String::from("Burning tyres"),
        category: IncidentCategory::Air,
        photo: Some(PhotoAttachment::new("plume.jpg", vec![0xFF, 0xD8])),
        location: Some(SelectedLocation::now(
            Position::new(31.5, 74.3),
            LocationSource::Search,
        )),
    };

    draft.reset();

    assert_eq!(draft, ReportDraft::default());
    assert!(draft.location.is_none());
    assert!(draft.photo.is_none());
    assert_eq!(draft.category, IncidentCategory::Waste);
}
