use std::future::Future;

use thiserror::Error;

use crate::entities::ReportPayload;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Not authorized to update the location")]
    Unauthorized,
    #[error("Unexpected response status {0}")]
    Status(u16),
    #[error("Request failed: {0}")]
    Transport(String),
}

/// The backend endpoints that accept live locations, one per role.
pub trait LocationReportGateway {
    fn update_maid_location(
        &self,
        payload: &ReportPayload,
    ) -> impl Future<Output = Result<(), ReportError>> + Send;
    fn update_homeowner_location(
        &self,
        payload: &ReportPayload,
    ) -> impl Future<Output = Result<(), ReportError>> + Send;
    fn update_cleaning_company_location(
        &self,
        payload: &ReportPayload,
    ) -> impl Future<Output = Result<(), ReportError>> + Send;
    fn update_home_nurse_location(
        &self,
        payload: &ReportPayload,
    ) -> impl Future<Output = Result<(), ReportError>> + Send;
}
