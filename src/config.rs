use std::env;

use anyhow::{Context, Result};

/// Process configuration, sourced from the environment (a local `.env` file
/// is honored in development).
#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    /// When set, raw error detail is withheld from the rendered page.
    pub production: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let spotify_client_id = env::var("SPOTIFY_CLIENT_ID")
            .context("SPOTIFY_CLIENT_ID must be set")?;
        let spotify_client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .context("SPOTIFY_CLIENT_SECRET must be set")?;
        let production = env::var("PRODUCTION").map_or(false, |v| !v.is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            spotify_client_id,
            spotify_client_secret,
            production,
            port,
        })
    }
}
