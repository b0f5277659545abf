//! Chord spans: derived regions of a document holding a chord token
//!
//! Spans are never stored alongside the text. They are recomputed from the
//! document by the scanner whenever they are needed, so they cannot drift out
//! of sync with edits.

use serde::{Deserialize, Serialize};

/// A chord token found in a document
///
/// `start..end` is a half-open character range. `token` is the literal text
/// in that range, parentheses included (e.g. `"(Cmaj7)"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSpan {
    pub start: usize,
    pub end: usize,
    pub token: String,
}

impl ChordSpan {
    pub fn new(start: usize, end: usize, token: impl Into<String>) -> Self {
        Self {
            start,
            end,
            token: token.into(),
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The chord body without its parentheses
    pub fn body(&self) -> &str {
        self.token
            .strip_prefix('(')
            .and_then(|t| t.strip_suffix(')'))
            .unwrap_or(&self.token)
    }

    /// Half-open containment: `start <= offset < end`
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Strictly-inside test used for insertion: `start < offset < end`
    pub fn strictly_contains(&self, offset: usize) -> bool {
        offset > self.start && offset < self.end
    }

    /// Whether a cursor at `offset` makes this chord the active one
    ///
    /// A cursor exactly at `start` sits before the chord; a cursor at `end`
    /// sits on its closing boundary and counts as inside.
    pub fn is_active_at(&self, offset: usize) -> bool {
        self.start < offset && offset <= self.end
    }
}

/// The span other than `exclude` whose half-open range holds `offset`
pub fn span_containing<'a>(
    spans: &'a [ChordSpan],
    offset: usize,
    exclude: &ChordSpan,
) -> Option<&'a ChordSpan> {
    spans
        .iter()
        .find(|s| *s != exclude && s.contains(offset))
}

/// The span a cursor at `offset` activates, if any
pub fn active_span(spans: &[ChordSpan], offset: usize) -> Option<&ChordSpan> {
    spans.iter().find(|s| s.is_active_at(offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_boundary_is_exclusive_start_inclusive_end() {
        let span = ChordSpan::new(2, 5, "(C)");

        assert!(!span.is_active_at(2)); // before the chord
        assert!(span.is_active_at(3));
        assert!(span.is_active_at(5)); // on the closing boundary
        assert!(!span.is_active_at(6));
    }

    #[test]
    fn test_contains_is_half_open() {
        let span = ChordSpan::new(2, 5, "(C)");

        assert!(span.contains(2));
        assert!(span.contains(4));
        assert!(!span.contains(5));
        assert!(!span.contains(1));
    }

    #[test]
    fn test_body_strips_parentheses() {
        assert_eq!(ChordSpan::new(0, 7, "(Cmaj7)").body(), "Cmaj7");
    }

    #[test]
    fn test_span_containing_skips_excluded() {
        let spans = vec![ChordSpan::new(0, 3, "(C)"), ChordSpan::new(3, 6, "(G)")];

        assert_eq!(span_containing(&spans, 4, &spans[0]), Some(&spans[1]));
        assert_eq!(span_containing(&spans, 1, &spans[0]), None);
    }

    #[test]
    fn test_active_span_lookup() {
        let spans = vec![ChordSpan::new(0, 3, "(C)"), ChordSpan::new(3, 6, "(G)")];

        assert_eq!(active_span(&spans, 0), None);
        assert_eq!(active_span(&spans, 3), Some(&spans[0]));
        assert_eq!(active_span(&spans, 4), Some(&spans[1]));
    }
}
