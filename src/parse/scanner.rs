//! Chord scanner
//!
//! Finds every chord token in a document, left to right. Matches never
//! overlap: each match is consumed in full before the search resumes.

use crate::parse::grammar::CHORD_TOKEN_RE;
use crate::text::ChordSpan;

/// Scan `document` for chord tokens
///
/// Returned spans are ordered by `start` and satisfy
/// `spans[i].end <= spans[i + 1].start`. Offsets are character offsets.
pub fn scan(document: &str) -> Vec<ChordSpan> {
    let mut spans = Vec::new();

    // Regex offsets are bytes; walk the char boundaries once to convert.
    let mut chars_seen = 0;
    let mut bytes_seen = 0;

    for m in CHORD_TOKEN_RE.find_iter(document) {
        chars_seen += document[bytes_seen..m.start()].chars().count();
        let start = chars_seen;
        // `\d` admits non-ASCII digits, so count chars rather than bytes.
        let end = start + m.as_str().chars().count();

        spans.push(ChordSpan::new(start, end, m.as_str()));

        chars_seen = end;
        bytes_seen = m.end();
    }

    log::debug!("scan: {} chord(s) in {} bytes", spans.len(), document.len());
    spans
}

/// Distinct chord bodies in order of first appearance
pub fn chord_names(document: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for span in scan(document) {
        let body = span.body();
        if !names.iter().any(|n| n == body) {
            names.push(body.to_string());
        }
    }
    names
}
