use std::{future::Future, time::Duration};

use liveloc_core::gateways::position::{
    PositionOptions, PositionSource, RawPositionError, PERMISSION_DENIED,
};
use liveloc_entities::geo::Coordinate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

/// Native wrappers only report messages, no codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NativePositionError {
    pub message: String,
}

impl From<NativePositionError> for RawPositionError {
    fn from(from: NativePositionError) -> Self {
        Self::uncoded(from.message)
    }
}

/// An async geolocation API of a native app shell.
pub trait NativeGeolocation {
    fn check_permissions(
        &self,
    ) -> impl Future<Output = Result<PermissionState, NativePositionError>> + Send;
    fn request_permissions(
        &self,
    ) -> impl Future<Output = Result<PermissionState, NativePositionError>> + Send;
    fn current_position(
        &self,
        high_accuracy: bool,
        timeout: Duration,
    ) -> impl Future<Output = Result<Coordinate, NativePositionError>> + Send;
}

#[derive(Debug)]
pub struct NativePositionSource<N> {
    native: N,
}

impl<N> NativePositionSource<N> {
    pub const fn new(native: N) -> Self {
        Self { native }
    }
}

fn permission_denied() -> RawPositionError {
    RawPositionError::coded(PERMISSION_DENIED, "Permission denied")
}

impl<N> PositionSource for NativePositionSource<N>
where
    N: NativeGeolocation + Sync,
{
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Coordinate, RawPositionError> {
        match self.native.check_permissions().await? {
            PermissionState::Granted => {}
            PermissionState::Denied => return Err(permission_denied()),
            PermissionState::Prompt => {
                log::debug!("Requesting location permission");
                if self.native.request_permissions().await? == PermissionState::Denied {
                    return Err(permission_denied());
                }
            }
        }
        let pos = self
            .native
            .current_position(options.high_accuracy, options.timeout)
            .await?;
        Ok(pos)
    }
}
