pub mod geocode;
pub mod position;
pub mod report;
