use std::time::Duration;

use liveloc_core::gateways::geocode::{GeocodingError, ReverseGeocodingGateway};
use liveloc_entities::geo::Coordinate;
use reqwest::header::ACCEPT;
use url::Url;

use crate::{append_path, json::NominatimReverse};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Zoom level of suburbs and neighbourhoods
const ZOOM_LEVEL: &str = "16";

/// Reverse geocoding based on the OpenStreetMap Nominatim API.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: reqwest::Client,
    base_url: Url,
}

impl Nominatim {
    /// The usage policy of the public instance requires
    /// an identifying user agent.
    pub fn new(base_url: Url, user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, base_url })
    }

    fn reverse_url(&self, pos: &Coordinate) -> Url {
        let mut url = append_path(&self.base_url, "reverse");
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &pos.lat.to_string())
            .append_pair("lon", &pos.lng.to_string())
            .append_pair("zoom", ZOOM_LEVEL)
            .append_pair("addressdetails", "1");
        url
    }
}

impl ReverseGeocodingGateway for Nominatim {
    async fn resolve_place_name(
        &self,
        pos: &Coordinate,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        let url = self.reverse_url(pos);
        log::debug!("Reverse geocoding {pos}: {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| GeocodingError::Transport(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::Status(status.as_u16()));
        }
        let reverse: NominatimReverse = response
            .json()
            .await
            .map_err(|err| GeocodingError::Decode(err.to_string()))?;
        Ok(reverse.place_label())
    }
}
