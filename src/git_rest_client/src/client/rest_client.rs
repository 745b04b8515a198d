use super::endpoints::{
    CREATE_USER_ENDPOINT, FILTER_DATA_ENDPOINT, RUN_CRON_JOB_ENDPOINT, VALID_USER_ENDPOINT,
};
use crate::config::Config;
use crate::constants::DEFAULT_BACKEND_URL;
use crate::types::{Credentials, FilterSummary, OutcomeResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

pub use reqwest::Result;

/// HTTP client for the pull request insights backend.
///
/// Every call is a single POST with a JSON body. Errors are logged and then
/// returned to the caller untouched: there are no retries and no timeout
/// beyond what `reqwest` applies by default.
#[derive(Clone, Debug)]
pub struct RestClient {
    base_uri: String,
    client: reqwest::Client,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }

    pub fn with_base_url(base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        Self {
            base_uri,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.backend_url.as_str())
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    /// Forwards `request` to `/filterData` and returns the decoded response body.
    pub async fn execute<T, R>(&self, request: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match serde_json::to_string(request) {
            Ok(body) => info!("Forwarding request to backend: {}", body),
            Err(e) => info!("Forwarding request to backend (unserializable: {})", e),
        }
        self.post_json(FILTER_DATA_ENDPOINT, request).await
    }

    pub async fn filter_data<T>(&self, request: &T) -> Result<FilterSummary>
    where
        T: Serialize + ?Sized,
    {
        self.execute(request).await
    }

    /// The backend answers 500 when the user cannot be stored, which surfaces as `Err`.
    pub async fn create_user(&self, credentials: &Credentials) -> Result<OutcomeResponse> {
        info!("Creating user {}", credentials.username);
        self.post_json(CREATE_USER_ENDPOINT, credentials).await
    }

    pub async fn valid_user(&self, credentials: &Credentials) -> Result<bool> {
        info!("Validating user {}", credentials.username);
        let outcome: OutcomeResponse = self.post_json(VALID_USER_ENDPOINT, credentials).await?;
        Ok(outcome.is_success())
    }

    pub async fn run_cron_job(&self) -> Result<OutcomeResponse> {
        info!("Triggering backend cron job");
        self.post_json(RUN_CRON_JOB_ENDPOINT, &json!({})).await
    }

    async fn post_json<T, R>(&self, path: &str, request: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.get_url(path);
        let result = self.send(&url, request).await;
        if let Err(e) = &result {
            error!("Error while connecting to backend at {}: {}", url, e);
        }
        result
    }

    async fn send<T, R>(&self, url: &str, request: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.client
            .post(url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
