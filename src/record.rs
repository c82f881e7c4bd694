//! Normalized metadata shapes produced by a lookup. Built once per submitted
//! URL and never mutated afterwards.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedRecord {
    Album(AlbumRecord),
    Track(TrackRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRecord {
    pub name: String,
    /// Catalog-provided date string, not locally validated.
    pub release_date: String,
    pub label: String,
    /// Catalog-reported track order, not re-sorted.
    pub tracks: Vec<TrackEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub track_number: u32,
    pub title: String,
    pub isrc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub title: String,
    pub release_date: String,
    /// Label of the containing album, obtained via a second lookup.
    pub label: String,
    pub isrc: String,
}
