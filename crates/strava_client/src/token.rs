//! OAuth2 token lifecycle: freshness check, single refresh attempt,
//! atomic persistence of the rotated token triple.

use crate::credentials::{CredentialRecord, CredentialStore};
use crate::{StravaApi, StravaError};
use chrono::Utc;

/// Tokens within this many seconds of expiry are refreshed early so they
/// cannot expire mid-request.
pub const EXPIRY_MARGIN_SECS: i64 = 600;

/// A token is expired once it is within [`EXPIRY_MARGIN_SECS`] of `now`.
pub fn is_expired(expires_at: i64, now: i64) -> bool {
    expires_at < now + EXPIRY_MARGIN_SECS
}

/// Owns the in-memory credential state and the store behind it.
///
/// The store remains the source of truth between processes; the record held
/// here is a transient read that is only mutated after a successful refresh.
pub struct TokenManager<S: CredentialStore> {
    store: S,
    record: CredentialRecord,
}

impl<S: CredentialStore> TokenManager<S> {
    /// Load and validate credentials from the store. Fails with
    /// `StravaError::Config` before any network activity when a field is
    /// missing or malformed.
    pub fn new(store: S) -> Result<Self, StravaError> {
        let record = store.load()?;
        Ok(Self { store, record })
    }

    pub fn record(&self) -> &CredentialRecord {
        &self.record
    }

    /// Return a bearer token that is guaranteed to outlive the safety margin.
    ///
    /// Fresh tokens are returned as-is with no network call and no store
    /// write. Expired tokens trigger exactly one refresh; on failure no token
    /// is returned (never a stale one). The refreshed triple is persisted
    /// before use, but a store write failure is downgraded to a warning so
    /// the new tokens remain usable for the rest of the process.
    pub async fn access_token(&mut self, api: &dyn StravaApi) -> Result<String, StravaError> {
        let now = Utc::now().timestamp();
        if !is_expired(self.record.expires_at, now) {
            tracing::debug!("access token still valid");
            return Ok(self.record.access_token.clone());
        }

        tracing::info!("access token expired or about to expire, refreshing");
        let fresh = api
            .refresh_token(
                &self.record.client_id,
                &self.record.client_secret,
                &self.record.refresh_token,
            )
            .await
            .map_err(|e| StravaError::AuthRefresh(e.to_string()))?;

        // The refresh rotated the refresh token server-side; the old one is
        // dead and must never be written back.
        self.record.access_token = fresh.access_token.clone();
        self.record.refresh_token = fresh.refresh_token;
        self.record.expires_at = fresh.expires_at;

        if let Err(e) = self.store.save(&self.record) {
            tracing::warn!("credential store write failed, tokens kept in memory only: {e}");
        }

        Ok(fresh.access_token)
    }
}
