//! Renders a normalized record as a single-page PDF. Rendering is pure: no
//! I/O, no timestamps, identical records produce byte-identical output.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

use crate::record::NormalizedRecord;

const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 18.0;
const MARGIN_LEFT: f32 = 56.0;
const TOP_BASELINE: f32 = 780.0;
// A4 in points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;

/// The fixed line layout of the document, one entry per rendered line.
pub fn layout_lines(record: &NormalizedRecord) -> Vec<String> {
    match record {
        NormalizedRecord::Album(album) => {
            let mut lines = vec![
                format!("Album: {}", album.name),
                format!("Release Date: {}", album.release_date),
                format!("Label: {}", album.label),
                "Tracklist & ISRCs:".to_string(),
            ];
            lines.extend(
                album
                    .tracks
                    .iter()
                    .map(|t| format!("{}. {} - {}", t.track_number, t.title, t.isrc)),
            );
            lines
        }
        NormalizedRecord::Track(track) => vec![
            format!("Track: {}", track.title),
            format!("Release Date: {}", track.release_date),
            format!("Label: {}", track.label),
            format!("ISRC: {}", track.isrc),
        ],
    }
}

/// Produces the downloadable PDF document for a record.
pub fn render_pdf(record: &NormalizedRecord) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);
    let font_name = Name(b"F1");

    let mut content = Content::new();
    content.begin_text();
    content.set_font(font_name, FONT_SIZE);
    content.next_line(MARGIN_LEFT, TOP_BASELINE);
    let mut first = true;
    for line in layout_lines(record) {
        if !first {
            content.next_line(0.0, -LINE_HEIGHT);
        }
        first = false;
        content.show(Str(&encode_latin1(&line)));
    }
    content.end_text();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);
    {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(font_name, font_id);
    }
    pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
    pdf.stream(content_id, &content.finish());
    pdf.finish()
}

/// The built-in Helvetica font is single-byte; narrow to Latin-1 and replace
/// anything unmappable.
fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AlbumRecord, TrackEntry, TrackRecord};

    fn sample_album() -> NormalizedRecord {
        NormalizedRecord::Album(AlbumRecord {
            name: "Test Album".to_string(),
            release_date: "2023-05-01".to_string(),
            label: "Test Records".to_string(),
            tracks: vec![
                TrackEntry {
                    track_number: 1,
                    title: "Opener".to_string(),
                    isrc: "USAB12300001".to_string(),
                },
                TrackEntry {
                    track_number: 7,
                    title: "Deep Cut".to_string(),
                    isrc: "USAB12300007".to_string(),
                },
                TrackEntry {
                    track_number: 3,
                    title: "Closer".to_string(),
                    isrc: "USAB12300003".to_string(),
                },
            ],
        })
    }

    fn sample_track() -> NormalizedRecord {
        NormalizedRecord::Track(TrackRecord {
            title: "Single".to_string(),
            release_date: "2020-01-17".to_string(),
            label: "Test Records".to_string(),
            isrc: "GBXY22200123".to_string(),
        })
    }

    #[test]
    fn album_layout_has_header_and_one_line_per_track() {
        let lines = layout_lines(&sample_album());
        assert_eq!(lines[3], "Tracklist & ISRCs:");
        assert_eq!(lines.len(), 4 + 3);
        // Catalog order and catalog-supplied numbering, not re-sorted.
        assert_eq!(lines[4], "1. Opener - USAB12300001");
        assert_eq!(lines[5], "7. Deep Cut - USAB12300007");
        assert_eq!(lines[6], "3. Closer - USAB12300003");
    }

    #[test]
    fn track_layout_has_no_tracklist_section() {
        let lines = layout_lines(&sample_track());
        assert_eq!(
            lines,
            vec![
                "Track: Single",
                "Release Date: 2020-01-17",
                "Label: Test Records",
                "ISRC: GBXY22200123",
            ]
        );
        assert!(!lines.iter().any(|l| l.contains("Tracklist")));
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = sample_album();
        assert_eq!(render_pdf(&record), render_pdf(&record));

        let track = sample_track();
        assert_eq!(render_pdf(&track), render_pdf(&track));
    }

    #[test]
    fn rendered_document_is_a_pdf() {
        let bytes = render_pdf(&sample_track());
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn unmappable_characters_are_replaced() {
        assert_eq!(encode_latin1("déjà vu 🎵"), b"d\xe9j\xe0 vu ?".to_vec());
    }
}
