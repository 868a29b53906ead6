use liveloc_core::gateways::report::{LocationReportGateway, ReportError};
use liveloc_entities::location::ReportPayload;
use reqwest::StatusCode;
use url::Url;

use crate::{append_path, json::LocationUpdate};

pub const MAID_LOCATION_PATH: &str = "maid/profiles/update_location/";
pub const HOMEOWNER_LOCATION_PATH: &str = "homeowner/profiles/update_location/";
pub const CLEANING_COMPANY_LOCATION_PATH: &str = "cleaning-company/me/update-location/";
pub const HOME_NURSE_LOCATION_PATH: &str = "home-nursing/me/update-location/";

/// Client of the marketplace REST API.
#[derive(Clone)]
pub struct BackendApi {
    client: reqwest::Client,
    base_url: Url,
    access_token: Option<String>,
}

impl std::fmt::Debug for BackendApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendApi")
            .field("base_url", &self.base_url.as_str())
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl BackendApi {
    pub fn new(base_url: Url, access_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            access_token,
        }
    }

    async fn post_location(&self, path: &str, payload: &ReportPayload) -> Result<(), ReportError> {
        let url = append_path(&self.base_url, path);
        let mut request = self.client.post(url).json(&LocationUpdate::from(payload));
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|err| ReportError::Transport(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            log::debug!("Location accepted by {path}: {status}");
            Ok(())
        } else if status == StatusCode::UNAUTHORIZED {
            Err(ReportError::Unauthorized)
        } else {
            Err(ReportError::Status(status.as_u16()))
        }
    }
}

impl LocationReportGateway for BackendApi {
    async fn update_maid_location(&self, payload: &ReportPayload) -> Result<(), ReportError> {
        self.post_location(MAID_LOCATION_PATH, payload).await
    }
    async fn update_homeowner_location(&self, payload: &ReportPayload) -> Result<(), ReportError> {
        self.post_location(HOMEOWNER_LOCATION_PATH, payload).await
    }
    async fn update_cleaning_company_location(
        &self,
        payload: &ReportPayload,
    ) -> Result<(), ReportError> {
        self.post_location(CLEANING_COMPANY_LOCATION_PATH, payload)
            .await
    }
    async fn update_home_nurse_location(
        &self,
        payload: &ReportPayload,
    ) -> Result<(), ReportError> {
        self.post_location(HOME_NURSE_LOCATION_PATH, payload).await
    }
}
