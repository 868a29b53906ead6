mod acquire_and_report;
mod dispatch_report;
mod error;

#[cfg(test)]
pub mod tests;

pub use self::{acquire_and_report::*, dispatch_report::*, error::*};

mod prelude {
    pub use super::error::*;
    pub use crate::{entities::*, gateways::report::*};
}
