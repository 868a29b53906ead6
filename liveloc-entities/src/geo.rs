use std::fmt;

pub type Degrees = f64;
pub type Meters = f64;

/// A geographical position as reported by a position source.
///
/// Latitude and longitude are stored exactly as they were reported,
/// without any fixed-point conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: Degrees,
    pub lng: Degrees,
    /// Estimated horizontal accuracy
    pub accuracy: Option<Meters>,
}

impl Coordinate {
    pub const LAT_DEG_MIN: Degrees = -90.0;
    pub const LAT_DEG_MAX: Degrees = 90.0;
    pub const LNG_DEG_MIN: Degrees = -180.0;
    pub const LNG_DEG_MAX: Degrees = 180.0;

    pub fn try_from_lat_lng_deg<LAT, LNG>(lat: LAT, lng: LNG) -> Option<Self>
    where
        LAT: Into<Degrees>,
        LNG: Into<Degrees>,
    {
        let pos = Self {
            lat: lat.into(),
            lng: lng.into(),
            accuracy: None,
        };
        pos.is_valid().then_some(pos)
    }

    pub fn with_accuracy(self, accuracy: Meters) -> Self {
        let accuracy = (accuracy.is_finite() && accuracy >= 0.0).then_some(accuracy);
        Self { accuracy, ..self }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&self.lat)
            && (Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)?;
        if let Some(accuracy) = self.accuracy {
            write!(f, " (±{accuracy}m)")?;
        }
        Ok(())
    }
}
