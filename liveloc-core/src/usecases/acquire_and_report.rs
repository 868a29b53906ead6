use std::time::Duration;

use super::{dispatch_report, prelude::*};
use crate::gateways::{
    geocode::{ReverseGeocodingGateway, DEFAULT_REVERSE_GEOCODING_TIMEOUT},
    position::{PositionOptions, PositionSource},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOptions {
    pub position: PositionOptions,
    pub reverse_geocoding: bool,
    /// Independent of the acquisition timeout.
    pub reverse_geocoding_timeout: Duration,
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            position: PositionOptions::default(),
            reverse_geocoding: true,
            reverse_geocoding_timeout: DEFAULT_REVERSE_GEOCODING_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// There was nobody to report for.
    Skipped,
    Succeeded(LiveLocation),
    Failed(CycleError),
}

/// Acquire the current position, try to label it and report it
/// to the endpoint of the actor's role.
///
/// All failures are returned as [`CycleOutcome::Failed`].
pub async fn acquire_and_report<P, G, R>(
    actor: Option<&Actor>,
    position_source: &P,
    geocoding: &G,
    reporter: &R,
    options: &CycleOptions,
) -> CycleOutcome
where
    P: PositionSource,
    G: ReverseGeocodingGateway,
    R: LocationReportGateway,
{
    let Some(actor) = actor else {
        return CycleOutcome::Skipped;
    };
    log::debug!("Acquiring position for {}", actor.user_type);
    let coords = match position_source.current_position(&options.position).await {
        Ok(coords) => coords,
        Err(err) => {
            log::debug!("Position acquisition failed: {err}");
            return CycleOutcome::Failed(AcquisitionError::from(err).into());
        }
    };
    log::debug!("Acquired position {coords}");
    let place_name = if options.reverse_geocoding {
        resolve_place_name(geocoding, &coords, options.reverse_geocoding_timeout).await
    } else {
        None
    };
    let location = LiveLocation { coords, place_name };
    let payload = ReportPayload::from(&location);
    match dispatch_report(reporter, actor.role(), &payload).await {
        Some(Ok(())) => {
            log::info!("Reported live location of {}", actor.user_type);
        }
        Some(Err(err)) => {
            log::warn!("Could not report live location: {err}");
            return CycleOutcome::Failed(CycleError::Report(err));
        }
        None => {
            log::warn!(
                "No location endpoint for accounts of type '{}'",
                actor.user_type
            );
        }
    }
    CycleOutcome::Succeeded(location)
}

/// Failures are not fatal: the position is known anyways.
async fn resolve_place_name<G>(gateway: &G, pos: &Coordinate, timeout: Duration) -> Option<String>
where
    G: ReverseGeocodingGateway,
{
    match tokio::time::timeout(timeout, gateway.resolve_place_name(pos, timeout)).await {
        Ok(Ok(place_name)) => {
            let place_name = place_name.filter(|name| !name.trim().is_empty());
            log::debug!("Resolved {pos} to {place_name:?}");
            place_name
        }
        Ok(Err(err)) => {
            log::warn!("Reverse geocoding of {pos} failed: {err}");
            None
        }
        Err(_) => {
            log::warn!("Reverse geocoding of {pos} timed out after {timeout:?}");
            None
        }
    }
}
