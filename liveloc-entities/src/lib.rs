#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # liveloc-entities
//!
//! Reusable, agnostic domain entities for live location reporting.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod actor;
pub mod geo;
pub mod location;
pub mod status;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
