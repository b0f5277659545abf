//! Chord edit engine
//!
//! Relocates, inserts and removes chord tokens in a lyrics document. Every
//! operation takes the current text and returns the new text plus the new
//! cursor; nothing is kept between calls. Spans are re-derived with a fresh
//! scan on each call.
//!
//! # Movement
//!
//! A chord moves one slot at a time. To the left it jumps over the single
//! character before it, or over the whole neighbouring chord when that
//! character belongs to one. To the right it does the same with the
//! character after it. The two directions are exact inverses: moving right
//! and then left restores the original text.
//!
//! A move that would alter any other chord token (plain text such as `(C`
//! and `)` closing up into a new chord) is refused and reported unchanged.

use serde::{Deserialize, Serialize};

use crate::edit::error::{EditError, Result};
use crate::parse::{scan, token_for, validate};
use crate::text::{char_len, clamp_offset, insert_at, remove_range, span_containing, ChordSpan};

/// Outcome of an edit operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEdit {
    /// Document text after the edit
    pub text: String,

    /// New cursor offset
    pub cursor: usize,

    /// The edited chord's span in `text` (`None` after removal)
    pub span: Option<ChordSpan>,

    /// `false` for no-ops (chord already at the edge, or a refused move)
    pub changed: bool,
}

impl ChordEdit {
    fn unchanged(document: &str, span: &ChordSpan) -> Self {
        Self {
            text: document.to_string(),
            cursor: span.end,
            span: Some(span.clone()),
            changed: false,
        }
    }
}

/// Move a chord one slot to the left
///
/// No-op when the chord already starts the document.
pub fn move_chord_left(document: &str, span: &ChordSpan) -> Result<ChordEdit> {
    let spans = scan(document);
    let index = locate(&spans, span)?;

    if span.start == 0 {
        log::debug!("move_chord_left: {} already at document start", span.token);
        return Ok(ChordEdit::unchanged(document, span));
    }

    let mut target = span.start - 1;
    if let Some(neighbour) = span_containing(&spans, target, span) {
        target = neighbour.start;
    }

    // Everything before the chord keeps its offset once the token is lifted out.
    Ok(relocate(document, &spans, index, target))
}

/// Move a chord one slot to the right
///
/// No-op when the chord already ends the document.
pub fn move_chord_right(document: &str, span: &ChordSpan) -> Result<ChordEdit> {
    let spans = scan(document);
    let index = locate(&spans, span)?;
    let len = char_len(document);

    if span.end >= len {
        log::debug!("move_chord_right: {} already at document end", span.token);
        return Ok(ChordEdit::unchanged(document, span));
    }

    let probe = span.end;
    let land_after = match span_containing(&spans, probe, span) {
        Some(neighbour) => neighbour.end,
        None => probe + 1,
    };

    // Offsets after the chord shift left by its length once it is lifted out.
    Ok(relocate(document, &spans, index, land_after - span.len()))
}

/// Insert a new chord `(body)` at `position`
///
/// `position` is clamped to the document; a position strictly inside an
/// existing chord is moved to that chord's end so tokens never nest.
pub fn insert_chord_at(document: &str, body: &str, position: usize) -> Result<ChordEdit> {
    if !validate(body) {
        log::warn!("insert_chord_at: rejected chord body '{}'", body);
        return Err(EditError::InvalidChordGrammar(body.to_string()));
    }

    let mut position = clamp_offset(document, position);
    if let Some(enclosing) = scan(document).iter().find(|s| s.strictly_contains(position)) {
        log::debug!(
            "insert_chord_at: {} is inside {}, inserting after it",
            position,
            enclosing.token
        );
        position = enclosing.end;
    }

    let token = token_for(body);
    let span = ChordSpan::new(position, position + char_len(&token), token);
    let text = insert_at(document, position, &span.token);
    log::debug!("insert_chord_at: {} at {}", span.token, position);

    Ok(ChordEdit {
        text,
        cursor: span.end,
        span: Some(span),
        changed: true,
    })
}

/// Delete a chord token, leaving the cursor where it started
pub fn remove_chord(document: &str, span: &ChordSpan) -> Result<ChordEdit> {
    let spans = scan(document);
    locate(&spans, span)?;

    log::debug!("remove_chord: {} at {}", span.token, span.start);
    Ok(ChordEdit {
        text: remove_range(document, span.start, span.end),
        cursor: span.start,
        span: None,
        changed: true,
    })
}

// ============================================================================
// Helpers
// ============================================================================

/// Index of `span` among the document's scanned spans
fn locate(spans: &[ChordSpan], span: &ChordSpan) -> Result<usize> {
    spans
        .iter()
        .position(|s| s == span)
        .ok_or_else(|| EditError::UnknownSpan {
            start: span.start,
            end: span.end,
            token: span.token.clone(),
        })
}

/// Lift `spans[index]` out of the document and drop it in at `target`
///
/// `target` is an offset into the text with the token removed. Returns the
/// unchanged document if the result would disturb any other chord.
fn relocate(document: &str, spans: &[ChordSpan], index: usize, target: usize) -> ChordEdit {
    let span = &spans[index];
    let without = remove_range(document, span.start, span.end);
    let text = insert_at(&without, target, &span.token);
    let moved = ChordSpan::new(target, target + span.len(), span.token.clone());

    let rescanned = scan(&text);
    let others_before = spans
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, s)| s.token.as_str());
    let others_after = rescanned
        .iter()
        .filter(|s| **s != moved)
        .map(|s| s.token.as_str());

    if !rescanned.contains(&moved) || !others_before.eq(others_after) {
        log::warn!(
            "refusing to move {} from {} to {}: neighbouring text would form or break a chord",
            span.token,
            span.start,
            target
        );
        return ChordEdit::unchanged(document, span);
    }

    log::debug!("moved {} from {} to {}", span.token, span.start, target);
    ChordEdit {
        text,
        cursor: moved.end,
        span: Some(moved),
        changed: true,
    }
}
