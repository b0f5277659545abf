//! Shared types for the WASM API
//!
//! Result shapes handed back to the host after session operations.

use serde::{Deserialize, Serialize};

use crate::models::{EditorState, KeyOutcome};
use crate::renderers::Segment;

/// Everything the host needs to redraw after a session call
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EditorSnapshot {
    pub text: String,
    pub cursor: usize,
    pub chord_active: bool,
    pub entry_open: bool,
    pub segments: Vec<Segment>,
}

impl EditorSnapshot {
    pub fn of(state: &EditorState) -> Self {
        Self {
            text: state.text().to_string(),
            cursor: state.cursor(),
            chord_active: state.is_chord_active(),
            entry_open: state.entry().is_some(),
            segments: state.segments(),
        }
    }
}

/// Result of a key press routed through the session
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct KeyResult {
    /// `false` means the host should apply its default key behaviour
    pub handled: bool,
    pub snapshot: EditorSnapshot,
}

impl KeyResult {
    pub fn new(outcome: KeyOutcome, state: &EditorState) -> Self {
        Self {
            handled: outcome == KeyOutcome::Handled,
            snapshot: EditorSnapshot::of(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = EditorState::new("(C)la");
        state.set_cursor(2);

        let snapshot = EditorSnapshot::of(&state);
        assert_eq!(snapshot.text, "(C)la");
        assert_eq!(snapshot.cursor, 2);
        assert!(snapshot.chord_active);
        assert!(!snapshot.entry_open);
        assert_eq!(snapshot.segments.len(), 2);
    }

    #[test]
    fn test_key_result_serializes_flat_fields() {
        let state = EditorState::new("la");
        let result = KeyResult::new(KeyOutcome::PassThrough, &state);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["handled"], false);
        assert_eq!(json["snapshot"]["text"], "la");
    }
}
