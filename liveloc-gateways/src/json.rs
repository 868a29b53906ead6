//! Wire formats of the external services.

use liveloc_entities::{geo::Coordinate, location::ReportPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationUpdate {
    pub current_latitude: f64,
    pub current_longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_label: Option<String>,
}

impl From<&ReportPayload> for LocationUpdate {
    fn from(from: &ReportPayload) -> Self {
        let ReportPayload {
            current_latitude,
            current_longitude,
            location_label,
        } = from;
        Self {
            current_latitude: *current_latitude,
            current_longitude: *current_longitude,
            location_label: location_label.clone(),
        }
    }
}

/// Response of the Nominatim `/reverse` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct NominatimReverse {
    #[serde(default)]
    pub address: Option<NominatimAddress>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NominatimAddress {
    pub suburb: Option<String>,
    pub neighbourhood: Option<String>,
    pub village: Option<String>,
    pub town: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
}

impl NominatimReverse {
    /// The most specific non-empty name of the area.
    pub fn place_label(self) -> Option<String> {
        let Self {
            address,
            display_name,
        } = self;
        let NominatimAddress {
            suburb,
            neighbourhood,
            village,
            town,
            city,
            county,
        } = address.unwrap_or_default();
        [
            suburb,
            neighbourhood,
            village,
            town,
            city,
            county,
            display_name,
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
    }
}

/// A report sent by gpsd, discriminated by its `class`.
#[derive(Debug, Deserialize)]
#[serde(tag = "class")]
pub enum GpsdReport {
    #[serde(rename = "TPV")]
    Tpv(GpsdTpv),
    #[serde(other)]
    Other,
}

/// Time-position-velocity report
#[derive(Debug, Default, Deserialize)]
pub struct GpsdTpv {
    /// 0/1: no fix, 2: 2D fix, 3: 3D fix
    #[serde(default)]
    pub mode: u8,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Estimated horizontal position error in meters
    pub eph: Option<f64>,
    pub epx: Option<f64>,
    pub epy: Option<f64>,
}

impl GpsdTpv {
    pub fn has_fix(&self) -> bool {
        self.mode >= 2
    }

    pub fn to_coordinate(&self) -> Option<Coordinate> {
        if !self.has_fix() {
            return None;
        }
        let pos = Coordinate::try_from_lat_lng_deg(self.lat?, self.lon?)?;
        let accuracy = self.eph.or_else(|| match (self.epx, self.epy) {
            (Some(x), Some(y)) => Some(x.max(y)),
            (x, y) => x.or(y),
        });
        Some(match accuracy {
            Some(accuracy) => pos.with_accuracy(accuracy),
            None => pos,
        })
    }
}
