use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::UpstreamError;
use crate::spotify::models::{AlbumResponse, TokenResponse, TrackResponse};

const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Read-only catalog lookups. Handlers and the fetcher depend on this trait
/// so tests can substitute a fake client.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn album(&self, id: &str) -> Result<AlbumResponse, UpstreamError>;
    async fn track(&self, id: &str) -> Result<TrackResponse, UpstreamError>;
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Spotify Web API client using the client-credentials grant. Constructed
/// once at startup and shared across requests; the bearer token is cached
/// and renewed shortly before it expires.
pub struct SpotifyClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    token: Mutex<Option<CachedToken>>,
}

impl SpotifyClient {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            token: Mutex::new(None),
        }
    }

    async fn bearer_token(&self) -> Result<String, UpstreamError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            if token.expires_at > Instant::now() {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Requesting a fresh client-credentials token");
        let resp = self
            .http
            .post(ACCOUNTS_TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        let token: TokenResponse = serde_json::from_str(&body)?;

        // Renew a minute early so in-flight lookups never race expiry.
        let expires_at =
            Instant::now() + Duration::from_secs(token.expires_in.saturating_sub(60));
        let access_token = token.access_token.clone();
        *slot = Some(CachedToken {
            access_token: token.access_token,
            expires_at,
        });
        info!("Obtained Spotify access token");
        Ok(access_token)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, UpstreamError> {
        let token = self.bearer_token().await?;
        let url = format!("{API_BASE_URL}{path}");
        debug!("GET {}", url);
        let resp = self.http.get(&url).bearer_auth(token).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn album(&self, id: &str) -> Result<AlbumResponse, UpstreamError> {
        self.get_json(&format!("/albums/{id}")).await
    }

    async fn track(&self, id: &str) -> Result<TrackResponse, UpstreamError> {
        self.get_json(&format!("/tracks/{id}")).await
    }
}
