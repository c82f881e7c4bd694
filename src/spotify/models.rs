//! Typed shapes for the slice of the Spotify Web API responses this app
//! consumes. Anything the API marks optional stays optional here; absence of
//! a field the lookup needs is reported during mapping, not papered over.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumResponse {
    pub name: String,
    pub release_date: String,
    pub label: Option<String>,
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<AlbumTrackItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTrackItem {
    pub track_number: u32,
    pub name: String,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackResponse {
    pub name: String,
    pub album: AlbumRef,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub id: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
}
