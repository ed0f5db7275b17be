use crate::{ApiClientResult, ClientError};

use ct_core::Position;
use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

/// Free-text place search against a Nominatim-compatible geocoder.
pub struct GeocoderClient {
    pub base_url: String,
    user_agent: String,
    client: ReqwestClient,
}

/// The search API returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

impl GeocoderClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Resolve a place name to coordinates.
    ///
    /// Takes the first result only (no disambiguation); an empty result
    /// set is `ClientError::NoMatch`.
    pub async fn search(&self, query: &str) -> ApiClientResult<Position> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("q", query)])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let hits: Vec<SearchHit> = response.error_for_status()?.json().await?;
        debug!("geocoder returned {} hit(s) for {:?}", hits.len(), query);

        let first = hits
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::no_match(query))?;

        let lat = first
            .lat
            .parse::<f64>()
            .map_err(|e| ClientError::geocoder(format!("bad latitude {:?}: {}", first.lat, e)))?;
        let lng = first
            .lon
            .parse::<f64>()
            .map_err(|e| ClientError::geocoder(format!("bad longitude {:?}: {}", first.lon, e)))?;

        Ok(Position::new(lat, lng))
    }
}
