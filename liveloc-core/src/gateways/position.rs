use std::{future::Future, time::Duration};

use thiserror::Error;

use crate::entities::Coordinate;

/// The caller does not have the permission to access the position.
pub const PERMISSION_DENIED: u16 = 1;
/// The position could not be determined, e.g. no GPS signal.
pub const POSITION_UNAVAILABLE: u16 = 2;
/// The position was not determined within the configured time.
pub const TIMEOUT: u16 = 3;

pub const DEFAULT_ACQUISITION_TIMEOUT: Duration = Duration::from_millis(15_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum age of a cached fix that is still acceptable.
    /// `Duration::ZERO` demands a fresh fix.
    pub max_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_ACQUISITION_TIMEOUT,
            max_age: Duration::ZERO,
        }
    }
}

/// A failure as reported by a position source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawPositionError {
    #[error("Insecure context")]
    InsecureContext,
    #[error("Geolocation not supported")]
    NotSupported,
    #[error("{message} (code {code})")]
    Coded { code: u16, message: String },
    #[error("{message}")]
    Uncoded { message: String },
}

impl RawPositionError {
    pub fn coded(code: u16, message: impl Into<String>) -> Self {
        Self::Coded {
            code,
            message: message.into(),
        }
    }

    pub fn uncoded(message: impl Into<String>) -> Self {
        Self::Uncoded {
            message: message.into(),
        }
    }
}

/// A capability that determines the current position of the device.
///
/// Callback based platform APIs as well as async native wrappers
/// are adapted to this trait at the boundary.
pub trait PositionSource {
    fn current_position(
        &self,
        options: &PositionOptions,
    ) -> impl Future<Output = Result<Coordinate, RawPositionError>> + Send;
}
