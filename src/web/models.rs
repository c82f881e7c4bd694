use serde::Deserialize;

use crate::record::NormalizedRecord;

/// The single free-text input, submitted by form and echoed into the
/// download link's query string.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupForm {
    pub url: String,
}

// Web-specific view of a normalized record, flattened for templating.
pub struct RecordView {
    pub is_album: bool,
    pub heading: String,
    pub release_date: String,
    pub label: String,
    /// Track lookups only.
    pub isrc: String,
    /// Album lookups only, in catalog order.
    pub tracks: Vec<TrackLineView>,
}

pub struct TrackLineView {
    pub track_number: u32,
    pub title: String,
    pub isrc: String,
}

impl From<&NormalizedRecord> for RecordView {
    fn from(record: &NormalizedRecord) -> Self {
        match record {
            NormalizedRecord::Album(album) => Self {
                is_album: true,
                heading: album.name.clone(),
                release_date: album.release_date.clone(),
                label: album.label.clone(),
                isrc: String::new(),
                tracks: album
                    .tracks
                    .iter()
                    .map(|t| TrackLineView {
                        track_number: t.track_number,
                        title: t.title.clone(),
                        isrc: t.isrc.clone(),
                    })
                    .collect(),
            },
            NormalizedRecord::Track(track) => Self {
                is_album: false,
                heading: track.title.clone(),
                release_date: track.release_date.clone(),
                label: track.label.clone(),
                isrc: track.isrc.clone(),
                tracks: Vec::new(),
            },
        }
    }
}

/// User-facing failure notice: a generic sentence with a correlation id, and
/// (outside production) the raw error detail.
pub struct ErrorView {
    pub message: String,
    pub detail: Option<String>,
}
