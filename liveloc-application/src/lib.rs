//! Keeps the live location of the signed-in account up to date.

mod state;
mod updater;

pub mod prelude {
    pub use super::{state::*, updater::*};
}

pub(crate) use liveloc_core::{entities, gateways, usecases};
