//! Chord highlighting
//!
//! Projects a document and its chord spans into an ordered list of styled
//! segments for display. Plain gaps and chord tokens alternate; the chord
//! holding the cursor is flagged active.

use serde::{Deserialize, Serialize};

use crate::text::ChordSpan;

/// A run of document text with its display style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub is_chord: bool,
    pub is_active: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_chord: false,
            is_active: false,
        }
    }

    fn chord(text: &str, is_active: bool) -> Self {
        Self {
            text: text.to_string(),
            is_chord: true,
            is_active,
        }
    }
}

/// Build the rendering plan for `document`
///
/// Concatenating the returned segment texts reproduces `document` exactly.
/// A chord segment is active iff `active_cursor` is given and
/// `span.start < cursor <= span.end`.
///
/// Spans are expected in scan order. A span that overlaps one already
/// emitted or runs past the end of the document is skipped (its text stays
/// in the surrounding plain segment).
pub fn render(document: &str, spans: &[ChordSpan], active_cursor: Option<usize>) -> Vec<Segment> {
    // Byte offset of every char boundary, including the end of the text.
    let bounds: Vec<usize> = document
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(document.len()))
        .collect();
    let len = bounds.len() - 1;

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut pos = 0;

    for span in spans {
        if span.start < pos || span.end > len || span.start >= span.end {
            log::warn!(
                "render: skipping span {}..{} (cursor {}, length {})",
                span.start,
                span.end,
                pos,
                len
            );
            continue;
        }

        if span.start > pos {
            segments.push(Segment::plain(&document[bounds[pos]..bounds[span.start]]));
        }

        let is_active = active_cursor.map_or(false, |cursor| span.is_active_at(cursor));
        segments.push(Segment::chord(
            &document[bounds[span.start]..bounds[span.end]],
            is_active,
        ));
        pos = span.end;
    }

    if pos < len {
        segments.push(Segment::plain(&document[bounds[pos]..]));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::scan;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_render_alternates_plain_and_chord() {
        let doc = "Start (C) middle (G) end";
        let segments = render(doc, &scan(doc), None);

        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Start ", "(C)", " middle ", "(G)", " end"]);
        assert_eq!(
            segments.iter().map(|s| s.is_chord).collect::<Vec<_>>(),
            vec![false, true, false, true, false]
        );
        assert!(segments.iter().all(|s| !s.is_active));
        assert_eq!(joined(&segments), doc);
    }

    #[test]
    fn test_render_active_boundary() {
        let doc = "ab(C)cd";
        let spans = scan(doc);

        // Cursor at the opening boundary is before the chord
        assert!(!render(doc, &spans, Some(2))[1].is_active);
        assert!(render(doc, &spans, Some(3))[1].is_active);
        // Cursor at the closing boundary is inside
        assert!(render(doc, &spans, Some(5))[1].is_active);
        assert!(!render(doc, &spans, Some(6))[1].is_active);
    }

    #[test]
    fn test_render_adjacent_chords_only_one_active() {
        let doc = "(C)(G)";
        let segments = render(doc, &scan(doc), Some(3));

        assert_eq!(segments.len(), 2);
        assert!(segments[0].is_active);
        assert!(!segments[1].is_active);
    }

    #[test]
    fn test_render_empty_document() {
        assert!(render("", &[], Some(0)).is_empty());
    }

    #[test]
    fn test_render_skips_bad_spans_without_losing_text() {
        let doc = "xy(C)";
        let spans = vec![
            ChordSpan::new(2, 5, "(C)"),
            ChordSpan::new(3, 4, "C"),  // overlaps the previous span
            ChordSpan::new(4, 40, "?"), // past the end
        ];
        let segments = render(doc, &spans, None);

        assert_eq!(joined(&segments), doc);
        assert_eq!(segments.iter().filter(|s| s.is_chord).count(), 1);
    }

    #[test]
    fn test_render_multibyte_text() {
        let doc = "façade (Bb) naïve";
        let segments = render(doc, &scan(doc), None);
        assert_eq!(joined(&segments), doc);
        assert_eq!(segments[1].text, "(Bb)");
    }
}
