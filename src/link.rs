use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `album/<id>`, `album:<id>`, `track/<id>`, `track:<id>` anywhere in
/// a pasted link. The id is a contiguous alphanumeric run, so query-string
/// suffixes (`?si=...`) are never captured.
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(album|track)[/:]([A-Za-z0-9]+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Album,
    Track,
}

/// Pulls the entry kind and opaque catalog id out of a free-form URL string.
/// The first match scanning left to right wins; returns `None` when the URL
/// contains no recognizable album/track reference.
pub fn extract_link(url: &str) -> Option<(LinkKind, &str)> {
    let caps = LINK_RE.captures(url)?;
    let kind = match caps.get(1)?.as_str() {
        "album" => LinkKind::Album,
        _ => LinkKind::Track,
    };
    Some((kind, caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_track_id_from_share_link() {
        let url = "https://open.spotify.com/track/7HKez549fwJQDzx3zLjHKC?si=127e706087124590";
        assert_eq!(
            extract_link(url),
            Some((LinkKind::Track, "7HKez549fwJQDzx3zLjHKC"))
        );
    }

    #[test]
    fn extracts_album_id_from_path_form() {
        let url = "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy";
        assert_eq!(
            extract_link(url),
            Some((LinkKind::Album, "4aawyAB9vmqN3uQ7FjRGTy"))
        );
    }

    #[test]
    fn extracts_album_id_from_uri_form() {
        assert_eq!(
            extract_link("spotify:album:4aawyAB9vmqN3uQ7FjRGTy"),
            Some((LinkKind::Album, "4aawyAB9vmqN3uQ7FjRGTy"))
        );
    }

    #[test]
    fn query_string_is_not_part_of_the_id() {
        let (_, id) = extract_link("https://open.spotify.com/album/abc123?si=xyz").unwrap();
        assert_eq!(id, "abc123");
    }

    #[test]
    fn first_match_wins() {
        let (kind, id) = extract_link("https://host/album/first111/track/second222").unwrap();
        assert_eq!(kind, LinkKind::Album);
        assert_eq!(id, "first111");
    }

    #[test]
    fn no_match_for_unrelated_urls() {
        assert_eq!(extract_link("https://example.com/nothing-here"), None);
        // Keyword present but no structured id after it.
        assert_eq!(extract_link("https://example.com/I-like-tracks"), None);
    }
}
