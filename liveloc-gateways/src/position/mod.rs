//! Implementations of [`PositionSource`](liveloc_core::gateways::position::PositionSource).

mod callback;
mod fixed;
mod gpsd;
mod native;
mod platform;

pub use self::{callback::*, fixed::*, gpsd::*, native::*, platform::*};
