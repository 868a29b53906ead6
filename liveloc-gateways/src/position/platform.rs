use liveloc_core::gateways::position::{PositionOptions, PositionSource, RawPositionError};
use liveloc_entities::geo::Coordinate;

/// Chooses among the position sources a platform provides.
///
/// A native wrapper is preferred because it also works if the
/// web view is not considered a secure context. The web source
/// requires a secure context.
#[derive(Debug)]
pub struct PlatformPositionSource<W, N> {
    pub web: Option<W>,
    pub native: Option<N>,
    pub secure_context: bool,
}

impl<W, N> PositionSource for PlatformPositionSource<W, N>
where
    W: PositionSource + Sync,
    N: PositionSource + Sync,
{
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        if let Some(native) = &self.native {
            return native.current_position(options).await;
        }
        if !self.secure_context {
            return Err(RawPositionError::InsecureContext);
        }
        match &self.web {
            Some(web) => web.current_position(options).await,
            None => Err(RawPositionError::NotSupported),
        }
    }
}
