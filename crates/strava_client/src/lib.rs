//! Typed models, error taxonomy and the `StravaApi` trait for the Strava v3 API.

use async_trait::async_trait;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

pub mod config;
pub mod credentials;
pub mod http_client;
pub mod token;

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("token refresh failed: {0}")]
    AuthRefresh(String),
    #[error("remote request failed (status {status}): {body}")]
    Remote { status: u16, body: String },
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// One activity as returned by the list endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ActivitySummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub activity_type: String,
    pub start_date: String,
    #[serde(default)]
    pub elapsed_time: i64,
}

/// Full activity payload from the detail endpoint. Split and calorie fields
/// only carry meaningful data for runs.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DetailedActivity {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub start_date: String,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: i64,
    #[serde(default)]
    pub elapsed_time: i64,
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub splits_metric: Option<Vec<Split>>,
}

/// One metric split: a completed kilometer, plus a possible final partial one.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Split {
    pub split: u32,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: i64,
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub elevation_difference: Option<f64>,
}

/// Body of a successful `POST /oauth/token` response.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

#[async_trait]
pub trait StravaApi: Send + Sync + 'static {
    /// Exchange a refresh token for a new token triple. The old refresh
    /// token is invalidated server-side by this call.
    async fn refresh_token(
        &self,
        client_id: &str,
        client_secret: &SecretString,
        refresh_token: &str,
    ) -> Result<TokenResponse, StravaError>;

    /// List activities whose start time falls between `after` and `before`
    /// (epoch seconds). Single page only.
    async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        before: i64,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, StravaError>;

    async fn get_activity(
        &self,
        access_token: &str,
        activity_id: i64,
    ) -> Result<DetailedActivity, StravaError>;
}
