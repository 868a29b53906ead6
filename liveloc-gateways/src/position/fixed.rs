use liveloc_core::gateways::position::{PositionOptions, PositionSource, RawPositionError};
use liveloc_entities::geo::Coordinate;

/// A manually entered position that never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPosition(Coordinate);

impl FixedPosition {
    pub const fn new(pos: Coordinate) -> Self {
        Self(pos)
    }
}

impl PositionSource for FixedPosition {
    async fn current_position(&self, _: &PositionOptions) -> Result<Coordinate, RawPositionError> {
        Ok(self.0)
    }
}
