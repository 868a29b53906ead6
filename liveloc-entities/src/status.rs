use strum::{AsRefStr, Display};

/// Lifecycle of a location update as exposed to consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AcquisitionStatus {
    #[default]
    Idle,
    Updating,
    Ok,
    Error,
}
