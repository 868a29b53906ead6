use thiserror::Error;

use crate::gateways::{
    position::{RawPositionError, PERMISSION_DENIED, POSITION_UNAVAILABLE, TIMEOUT},
    report::ReportError,
};

/// The closed set of acquisition failures.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    #[error("Location requires a secure connection (HTTPS).")]
    InsecureContext,
    #[error("Geolocation is not supported on this device/browser.")]
    NotSupported,
    #[error("Location permission was denied. Please allow location access in your device settings and try again.")]
    PermissionDenied,
    #[error("Location is unavailable. Please check GPS / network and try again.")]
    PositionUnavailable,
    #[error("Location request timed out. Please try again.")]
    Timeout,
    #[error("Unable to get your location. Please enable location services or enter manually.")]
    Unknown,
}

impl AcquisitionError {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::InsecureContext => "insecure_context",
            Self::NotSupported => "not_supported",
            Self::PermissionDenied => "permission_denied",
            Self::PositionUnavailable => "position_unavailable",
            Self::Timeout => "timeout",
            Self::Unknown => "unknown",
        }
    }

    fn from_code(code: u16) -> Self {
        match code {
            PERMISSION_DENIED => Self::PermissionDenied,
            POSITION_UNAVAILABLE => Self::PositionUnavailable,
            TIMEOUT => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// Sources that only report a message are classified by its content.
    fn from_message(message: &str) -> Self {
        let message = message.to_lowercase();
        if message.contains("permission") && message.contains("denied") {
            Self::PermissionDenied
        } else if message.contains("timeout") {
            Self::Timeout
        } else {
            Self::PositionUnavailable
        }
    }
}

impl From<RawPositionError> for AcquisitionError {
    fn from(err: RawPositionError) -> Self {
        match err {
            RawPositionError::InsecureContext => Self::InsecureContext,
            RawPositionError::NotSupported => Self::NotSupported,
            RawPositionError::Coded { code, .. } => Self::from_code(code),
            RawPositionError::Uncoded { message } => Self::from_message(&message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
    #[error("Unable to update your location. Please try again.")]
    Report(#[source] ReportError),
}

impl CycleError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Acquisition(err) => err.kind(),
            Self::Report(_) => "report_failed",
        }
    }
}
