//! HTTP client implementation for the Strava v3 API.
//!
//! This module provides a reqwest-based implementation of the [`StravaApi`](crate::StravaApi) trait.

use crate::{ActivitySummary, DetailedActivity, StravaApi, StravaError, TokenResponse};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the Strava API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestStravaClient {
    base_url: String,
    client: reqwest::Client,
}

impl ReqwestStravaClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Strava API (e.g., "https://www.strava.com")
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Build a bearer-authenticated GET request.
    fn get_request(&self, url: &str, access_token: &str) -> reqwest::RequestBuilder {
        self.client.get(url).bearer_auth(access_token)
    }

    /// Execute a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, StravaError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }
}

/// Extract error information from a failed response.
async fn error_from_response(resp: reqwest::Response) -> StravaError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let body_snippet: String = body.chars().take(256).collect();
    StravaError::Remote {
        status,
        body: body_snippet,
    }
}

#[async_trait]
impl StravaApi for ReqwestStravaClient {
    async fn refresh_token(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        refresh_token: &str,
    ) -> Result<TokenResponse, StravaError> {
        let url = format!("{}/oauth/token", self.base_url);
        let form = [
            ("client_id", client_id),
            ("client_secret", client_secret.expose_secret()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];
        self.execute_json(self.client.post(&url).form(&form)).await
    }

    async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError> {
        let url = format!("{}/api/v3/athlete/activities", self.base_url);
        let pairs = [
            ("before", before.to_string()),
            ("after", after.to_string()),
            ("per_page", per_page.to_string()),
        ];
        self.execute_json(self.get_request(&url, access_token).query(&pairs))
            .await
    }

    async fn get_activity(
        &self,
        access_token: &str,
        activity_id: i64,
    ) -> Result<DetailedActivity, StravaError> {
        let url = format!("{}/api/v3/activities/{}", self.base_url, activity_id);
        self.execute_json(self.get_request(&url, access_token))
            .await
    }
}
