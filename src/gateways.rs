use anyhow::Result;
use liveloc_core::{
    entities::Coordinate,
    gateways::position::{PositionOptions, PositionSource, RawPositionError},
};
use liveloc_gateways::{
    backend::BackendApi,
    nominatim::Nominatim,
    position::{FixedPosition, Gpsd},
};

use crate::config::{Config, ReverseGeocodingGateway};

pub fn backend_api(cfg: &Config) -> BackendApi {
    if cfg.backend.access_token.is_none() {
        log::warn!("No access token configured: reports will be sent unauthenticated");
    }
    BackendApi::new(
        cfg.backend.api_base_url.clone(),
        cfg.backend.access_token.clone(),
    )
}

pub fn geocoding_gateway(cfg: &Config) -> Result<Option<Nominatim>> {
    if !cfg.reverse_geocoding.enabled {
        log::debug!("Reverse geocoding is disabled");
        return Ok(None);
    }
    let Some(gateway) = &cfg.reverse_geocoding.gateway else {
        log::warn!("No reverse geocoding gateway configured");
        return Ok(None);
    };
    match gateway {
        ReverseGeocodingGateway::Nominatim {
            base_url,
            user_agent,
        } => {
            log::debug!("Use Nominatim gateway at {base_url}");
            let gw = Nominatim::new(base_url.clone(), user_agent)?;
            Ok(Some(gw))
        }
    }
}

/// The position sources that are available on the command line.
#[derive(Debug)]
pub enum PositionGw {
    Fixed(FixedPosition),
    Gpsd(Gpsd),
}

impl PositionGw {
    pub fn fixed(pos: Coordinate) -> Self {
        Self::Fixed(FixedPosition::new(pos))
    }

    pub fn gpsd(addr: impl Into<String>) -> Self {
        Self::Gpsd(Gpsd::new(addr))
    }
}

impl PositionSource for PositionGw {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        match self {
            Self::Fixed(gw) => gw.current_position(options).await,
            Self::Gpsd(gw) => gw.current_position(options).await,
        }
    }
}
