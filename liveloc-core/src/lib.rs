pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use liveloc_entities::{actor::*, geo::*, location::*, status::*};
}
