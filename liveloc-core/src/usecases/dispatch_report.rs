use super::prelude::*;

/// Send the payload to the endpoint that belongs to the role.
///
/// Returns `None` without sending anything if the role is unknown.
pub async fn dispatch_report<R>(
    reporter: &R,
    role: Option<Role>,
    payload: &ReportPayload,
) -> Option<Result<(), ReportError>>
where
    R: LocationReportGateway,
{
    let result = match role? {
        Role::Maid => reporter.update_maid_location(payload).await,
        Role::Homeowner => reporter.update_homeowner_location(payload).await,
        Role::CleaningCompany => reporter.update_cleaning_company_location(payload).await,
        Role::HomeNurse => reporter.update_home_nurse_location(payload).await,
    };
    Some(result)
}
