//! Maps a pasted Spotify URL into a [`NormalizedRecord`] via one or two
//! catalog lookups.

use tracing::{info, instrument};

use crate::error::{FetchError, Result, UpstreamError};
use crate::link::{extract_link, LinkKind};
use crate::record::{AlbumRecord, NormalizedRecord, TrackEntry, TrackRecord};
use crate::spotify::models::AlbumResponse;
use crate::spotify::CatalogClient;

/// Resolves a free-form URL into a normalized album or track record.
///
/// URLs with no recognizable `album`/`track` reference fail with
/// [`FetchError::InvalidInput`] before any network call. A track lookup issues
/// a second album lookup, solely to obtain the label (the track response does
/// not embed it). One attempt per call, no retries.
#[instrument(skip(client))]
pub async fn fetch_metadata(client: &dyn CatalogClient, url: &str) -> Result<NormalizedRecord> {
    let (kind, id) = extract_link(url)
        .ok_or_else(|| FetchError::InvalidInput(url.to_string()))?;

    match kind {
        LinkKind::Album => {
            let album = client.album(id).await?;
            let record = map_album(album)?;
            info!(tracks = record.tracks.len(), "Fetched album metadata");
            Ok(NormalizedRecord::Album(record))
        }
        LinkKind::Track => {
            let track = client.track(id).await?;
            let album = client.album(&track.album.id).await?;
            let label = album
                .label
                .ok_or_else(|| UpstreamError::MissingField("label".into()))?;
            let isrc = track
                .external_ids
                .and_then(|ids| ids.isrc)
                .ok_or_else(|| UpstreamError::MissingField("external_ids.isrc".into()))?;
            info!("Fetched track metadata");
            Ok(NormalizedRecord::Track(TrackRecord {
                title: track.name,
                release_date: track.album.release_date,
                label,
                isrc,
            }))
        }
    }
}

fn map_album(album: AlbumResponse) -> std::result::Result<AlbumRecord, UpstreamError> {
    let label = album
        .label
        .ok_or_else(|| UpstreamError::MissingField("label".into()))?;
    let tracks = album
        .tracks
        .items
        .into_iter()
        .map(|item| {
            let isrc = item
                .external_ids
                .and_then(|ids| ids.isrc)
                .ok_or_else(|| UpstreamError::MissingField("external_ids.isrc".into()))?;
            Ok(TrackEntry {
                track_number: item.track_number,
                title: item.name,
                isrc,
            })
        })
        .collect::<std::result::Result<Vec<_>, UpstreamError>>()?;

    Ok(AlbumRecord {
        name: album.name,
        release_date: album.release_date,
        label,
        tracks,
    })
}
