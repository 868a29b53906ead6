use std::{future::Future, time::Duration};

use thiserror::Error;

use crate::entities::Coordinate;

pub const DEFAULT_REVERSE_GEOCODING_TIMEOUT: Duration = Duration::from_millis(8_000);

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Unexpected response status {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

pub trait ReverseGeocodingGateway {
    /// Resolve a human-readable label for the given position.
    ///
    /// `Ok(None)` means the lookup succeeded without finding a label.
    fn resolve_place_name(
        &self,
        pos: &Coordinate,
        timeout: Duration,
    ) -> impl Future<Output = Result<Option<String>, GeocodingError>> + Send;
}

/// A missing gateway never resolves anything.
impl<G> ReverseGeocodingGateway for Option<G>
where
    G: ReverseGeocodingGateway + Sync,
{
    async fn resolve_place_name(
        &self,
        pos: &Coordinate,
        timeout: Duration,
    ) -> Result<Option<String>, GeocodingError> {
        match self {
            Some(gw) => gw.resolve_place_name(pos, timeout).await,
            None => Ok(None),
        }
    }
}
