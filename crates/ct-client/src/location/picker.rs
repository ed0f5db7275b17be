use ct_core::{LocationSource, Position, SelectedLocation};

/// Initial map center before any producer has fired.
pub const DEFAULT_MAP_CENTER: Position = Position {
    lat: 30.3753,
    lng: 69.3451,
};

/// The report form's single shared location value.
///
/// Three producers (device fix, place search, map click) all write here;
/// whichever fires last wins, and the map view recenters to match. The
/// source tag on the selection records provenance without arbitrating.
#[derive(Debug, Clone)]
pub struct LocationPicker {
    selected: Option<SelectedLocation>,
    center: Position,
}

impl Default for LocationPicker {
    fn default() -> Self {
        Self {
            selected: None,
            center: DEFAULT_MAP_CENTER,
        }
    }
}

impl LocationPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map click: clicked coordinates overwrite the selection directly.
    pub fn pick_on_map(&mut self, position: Position) {
        self.select(position, LocationSource::MapClick);
    }

    /// First hit of a free-text geocoder search.
    pub fn apply_search_result(&mut self, position: Position) {
        self.select(position, LocationSource::Search);
    }

    /// One-shot device geolocation fix.
    pub fn apply_device_fix(&mut self, position: Position) {
        self.select(position, LocationSource::Device);
    }

    /// Drop the selection (after a successful submit). The map stays where
    /// the user left it.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&SelectedLocation> {
        self.selected.as_ref()
    }

    pub fn center(&self) -> Position {
        self.center
    }

    fn select(&mut self, position: Position, source: LocationSource) {
        self.selected = Some(SelectedLocation::now(position, source));
        self.center = position;
    }
}
