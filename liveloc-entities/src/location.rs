use crate::geo::*;

/// The result of a successful acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveLocation {
    pub coords: Coordinate,
    /// Human-readable label, e.g. the suburb
    pub place_name: Option<String>,
}

/// What gets sent to the backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    pub current_latitude  : Degrees,
    pub current_longitude : Degrees,
    pub location_label    : Option<String>,
}

impl From<&LiveLocation> for ReportPayload {
    fn from(from: &LiveLocation) -> Self {
        let LiveLocation { coords, place_name } = from;
        Self {
            current_latitude: coords.lat,
            current_longitude: coords.lng,
            location_label: place_name.clone(),
        }
    }
}
