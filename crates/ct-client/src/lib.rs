//! ct-client library
//!
//! HTTP client for the CivicTrack backend plus the client-side state
//! models: location resolution, the report form, and the dashboard board.

pub(crate) mod board;
pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod geocoder;
pub(crate) mod location;


pub use board::{MapMarker, ReportBoard, ViewMode};
pub use client::{ApiClient, ApiClientResult, ClientError};
pub use form::ReportForm;
pub use geocoder::GeocoderClient;
pub use location::device::{
    CommandPositionSource, FixCache, GeolocationError, PositionSource, acquire_fix,
};
pub use location::picker::{DEFAULT_MAP_CENTER, LocationPicker};
