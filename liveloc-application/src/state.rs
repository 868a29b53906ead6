use crate::{
    entities::*,
    usecases::{CycleError, CycleOutcome},
};

/// Identifies the trigger that started a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleToken {
    generation: u64,
}

/// Everything a consumer gets to see about the live location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationState {
    pub status: AcquisitionStatus,
    /// Last successfully reported position
    pub coords: Option<Coordinate>,
    pub place_name: Option<String>,
    pub error_message: Option<String>,
    /// Cause of the last failed cycle
    pub error: Option<CycleError>,
    generation: u64,
}

impl LocationState {
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new cycle and supersede all cycles that are still pending.
    ///
    /// Without an actor the state becomes idle and no cycle
    /// is started.
    pub fn begin(&mut self, actor: Option<&Actor>) -> Option<CycleToken> {
        self.generation += 1;
        if actor.is_none() {
            *self = Self {
                generation: self.generation,
                ..Default::default()
            };
            return None;
        }
        self.status = AcquisitionStatus::Updating;
        self.error_message = None;
        self.error = None;
        Some(CycleToken {
            generation: self.generation,
        })
    }

    pub fn is_current(&self, token: CycleToken) -> bool {
        token.generation == self.generation
    }

    /// Apply the outcome of a cycle unless it has been superseded.
    ///
    /// Returns `true` if the state has been modified.
    pub fn commit(&mut self, token: CycleToken, outcome: CycleOutcome) -> bool {
        if !self.is_current(token) {
            log::debug!(
                "Discarding outcome of superseded cycle #{} (current #{})",
                token.generation,
                self.generation
            );
            return false;
        }
        match outcome {
            CycleOutcome::Skipped => {
                self.status = AcquisitionStatus::Idle;
            }
            CycleOutcome::Succeeded(LiveLocation { coords, place_name }) => {
                self.status = AcquisitionStatus::Ok;
                self.coords = Some(coords);
                self.place_name = place_name;
            }
            CycleOutcome::Failed(err) => {
                self.status = AcquisitionStatus::Error;
                self.error_message = Some(err.to_string());
                self.error = Some(err);
            }
        }
        true
    }

    /// Discard the outcome of all pending cycles, e.g. on teardown.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}
