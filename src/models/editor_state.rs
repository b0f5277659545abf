//! Editor session state
//!
//! `EditorState` is the state of one open song: the lyrics text, the cursor,
//! whether the cursor currently sits on a chord, and the transient chord
//! entry box when it is open. The host owns it and feeds it user input; the
//! pure transforms in `edit::engine` do the actual text work.

use serde::{Deserialize, Serialize};

use crate::edit::{self, insert_chord_at, move_chord_left, move_chord_right, remove_chord, ChordEdit};
use crate::models::config::EditorConfig;
use crate::parse::{chord_names, scan};
use crate::renderers::{render, render_html, Segment};
use crate::text::{active_span, clamp_offset, ChordSpan};

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditorKey {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Escape,
    Other,
}

impl EditorKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => EditorKey::Left,
            "ArrowRight" | "Right" => EditorKey::Right,
            "ArrowUp" | "Up" => EditorKey::Up,
            "ArrowDown" | "Down" => EditorKey::Down,
            "Backspace" => EditorKey::Backspace,
            "Delete" | "Del" => EditorKey::Delete,
            "Escape" | "Esc" => EditorKey::Escape,
            _ => EditorKey::Other,
        }
    }
}

/// What the host should do with a key after the session has seen it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOutcome {
    /// The session consumed the key; redraw from the session
    Handled,
    /// Let the host's own text editing handle the key
    PassThrough,
}

/// The open chord entry box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEntry {
    /// Where the chord will be inserted
    pub position: usize,
    /// What the user has typed so far
    pub text: String,
}

/// State of one editing session
#[derive(Debug, Clone)]
pub struct EditorState {
    text: String,
    cursor: usize,
    chord_active: bool,
    entry: Option<ChordEntry>,
    config: EditorConfig,
}

impl EditorState {
    /// Open a session on `text` with the cursor at the start
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, EditorConfig::default())
    }

    pub fn with_config(text: impl Into<String>, config: EditorConfig) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            chord_active: false,
            entry: None,
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_chord_active(&self) -> bool {
        self.chord_active
    }

    pub fn entry(&self) -> Option<&ChordEntry> {
        self.entry.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Swap in new display and entry settings; the document is untouched
    pub fn set_config(&mut self, config: EditorConfig) {
        log::debug!("EditorState: config replaced");
        self.config = config;
    }

    /// Replace the text after ordinary host editing
    ///
    /// Closes any open chord entry, since its position may no longer mean
    /// anything in the new text.
    pub fn set_text(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.entry = None;
        self.set_cursor(cursor);
    }

    /// Move the cursor (click or host caret movement) and classify it
    ///
    /// The cursor is clamped to the text. A chord becomes active when the
    /// cursor lands in `(start, end]` of its span.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_offset(&self.text, cursor);
        self.chord_active = active_span(&scan(&self.text), self.cursor).is_some();
    }

    /// Drop the active highlight without moving the cursor
    pub fn clear_active(&mut self) {
        self.chord_active = false;
    }

    /// The active chord's span, if a chord is active
    pub fn active_span(&self) -> Option<ChordSpan> {
        if !self.chord_active {
            return None;
        }
        active_span(&scan(&self.text), self.cursor).cloned()
    }

    /// React to a key press
    ///
    /// With a chord active, Left/Right move it and Backspace/Delete remove
    /// it. Up/Down deactivate the chord and pass through so the host moves
    /// the caret vertically. With no chord active every key passes through.
    /// While the chord entry is open, Escape cancels it and everything else
    /// belongs to the entry box.
    pub fn handle_key(&mut self, key: EditorKey) -> edit::error::Result<KeyOutcome> {
        if self.entry.is_some() {
            if key == EditorKey::Escape {
                self.cancel_chord_entry();
                return Ok(KeyOutcome::Handled);
            }
            return Ok(KeyOutcome::PassThrough);
        }

        let Some(span) = self.active_span() else {
            self.chord_active = false;
            return Ok(KeyOutcome::PassThrough);
        };

        match key {
            EditorKey::Left => {
                let edit = move_chord_left(&self.text, &span)?;
                self.apply(edit);
                Ok(KeyOutcome::Handled)
            }
            EditorKey::Right => {
                let edit = move_chord_right(&self.text, &span)?;
                self.apply(edit);
                Ok(KeyOutcome::Handled)
            }
            EditorKey::Backspace | EditorKey::Delete => {
                let edit = remove_chord(&self.text, &span)?;
                self.apply(edit);
                Ok(KeyOutcome::Handled)
            }
            EditorKey::Escape => {
                self.chord_active = false;
                Ok(KeyOutcome::Handled)
            }
            EditorKey::Up | EditorKey::Down | EditorKey::Other => {
                self.chord_active = false;
                Ok(KeyOutcome::PassThrough)
            }
        }
    }

    /// Insert `(body)` at the cursor and make it the active chord
    pub fn insert_chord(&mut self, body: &str) -> edit::error::Result<ChordEdit> {
        let edit = insert_chord_at(&self.text, body, self.cursor)?;
        self.apply(edit.clone());
        Ok(edit)
    }

    // ========================================================================
    // Chord entry box
    // ========================================================================

    /// Open the chord entry box at the cursor
    pub fn open_chord_entry(&mut self) {
        self.chord_active = false;
        self.entry = Some(ChordEntry {
            position: self.cursor,
            text: String::new(),
        });
    }

    /// Update the text typed into the entry box (ignored when closed)
    pub fn set_entry_text(&mut self, text: impl Into<String>) {
        if let Some(entry) = self.entry.as_mut() {
            entry.text = text.into();
        }
    }

    /// Insert the typed chord and close the entry box
    ///
    /// Returns `Ok(None)` when no entry is open. On invalid input the
    /// document is untouched and the box stays open so the user can fix it.
    pub fn confirm_chord_entry(&mut self) -> edit::error::Result<Option<ChordEdit>> {
        let Some(entry) = self.entry.as_ref() else {
            return Ok(None);
        };

        let body = if self.config.trim_entry_input {
            entry.text.trim()
        } else {
            entry.text.as_str()
        };

        let edit = insert_chord_at(&self.text, body, entry.position)?;
        self.entry = None;
        self.apply(edit.clone());
        Ok(Some(edit))
    }

    /// Close the entry box without touching the document
    ///
    /// Called on Escape or a pointer action outside the box.
    pub fn cancel_chord_entry(&mut self) {
        self.entry = None;
    }

    // ========================================================================
    // Display
    // ========================================================================

    /// Highlight segments for the current text
    pub fn segments(&self) -> Vec<Segment> {
        let active_cursor = self.chord_active.then_some(self.cursor);
        render(&self.text, &scan(&self.text), active_cursor)
    }

    /// HTML markup for the current text
    pub fn html(&self) -> String {
        render_html(&self.segments(), &self.config)
    }

    /// Distinct chords used in the song, in order of appearance
    pub fn chord_names(&self) -> Vec<String> {
        chord_names(&self.text)
    }

    fn apply(&mut self, edit: ChordEdit) {
        self.text = edit.text;
        self.cursor = edit.cursor;
        self.chord_active = edit.span.is_some();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditError;

    fn state_at(text: &str, cursor: usize) -> EditorState {
        let mut state = EditorState::new(text);
        state.set_cursor(cursor);
        state
    }

    #[test]
    fn test_new_state() {
        let state = EditorState::new("la (C) la");
        assert_eq!(state.cursor(), 0);
        assert!(!state.is_chord_active());
        assert!(state.entry().is_none());
    }

    #[test]
    fn test_set_cursor_classifies_active_chord() {
        let mut state = EditorState::new("la (C) la");

        state.set_cursor(3);
        assert!(!state.is_chord_active()); // at the opening boundary

        state.set_cursor(5);
        assert!(state.is_chord_active());
        assert_eq!(state.active_span(), Some(ChordSpan::new(3, 6, "(C)")));

        state.set_cursor(6);
        assert!(state.is_chord_active());
    }

    #[test]
    fn test_set_cursor_clamps() {
        let state = state_at("abc", 99);
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_arrow_keys_move_active_chord() {
        let mut state = state_at("ab(C)cd", 5);

        assert_eq!(state.handle_key(EditorKey::Left).unwrap(), KeyOutcome::Handled);
        assert_eq!(state.text(), "a(C)bcd");
        assert_eq!(state.cursor(), 4);
        assert!(state.is_chord_active());

        assert_eq!(state.handle_key(EditorKey::Right).unwrap(), KeyOutcome::Handled);
        assert_eq!(state.handle_key(EditorKey::Right).unwrap(), KeyOutcome::Handled);
        assert_eq!(state.text(), "abc(C)d");
        assert_eq!(state.cursor(), 6);
    }

    #[test]
    fn test_left_at_start_is_noop_but_handled() {
        let mut state = state_at("(C)ab", 3);
        assert_eq!(state.handle_key(EditorKey::Left).unwrap(), KeyOutcome::Handled);
        assert_eq!(state.text(), "(C)ab");
        assert!(state.is_chord_active());
    }

    #[test]
    fn test_vertical_keys_clear_active() {
        let mut state = state_at("(C)ab", 2);
        assert_eq!(state.handle_key(EditorKey::Down).unwrap(), KeyOutcome::PassThrough);
        assert!(!state.is_chord_active());
        assert_eq!(state.text(), "(C)ab");

        state.set_cursor(3);
        assert!(state.is_chord_active());
        assert_eq!(state.handle_key(EditorKey::Up).unwrap(), KeyOutcome::PassThrough);
        assert!(!state.is_chord_active());
        assert_eq!(state.text(), "(C)ab");
        assert_eq!(state.cursor(), 3);
    }

    #[test]
    fn test_set_config_changes_html_classes() {
        let mut state = state_at("(C)x", 3);
        state.set_config(EditorConfig {
            chord_class: "song-chord".to_string(),
            active_class: "song-chord-on".to_string(),
            ..Default::default()
        });

        let html = state.html();
        assert!(html.contains("song-chord song-chord-on"));
        assert_eq!(state.text(), "(C)x");
        assert!(state.is_chord_active());
    }

    #[test]
    fn test_keys_pass_through_without_active_chord() {
        let mut state = state_at("ab(C)", 1);
        assert_eq!(state.handle_key(EditorKey::Left).unwrap(), KeyOutcome::PassThrough);
        assert_eq!(state.text(), "ab(C)");
    }

    #[test]
    fn test_backspace_removes_active_chord() {
        let mut state = state_at("ab(C)cd", 5);
        assert_eq!(state.handle_key(EditorKey::Backspace).unwrap(), KeyOutcome::Handled);
        assert_eq!(state.text(), "abcd");
        assert_eq!(state.cursor(), 2);
        assert!(!state.is_chord_active());
    }

    #[test]
    fn test_chord_entry_confirm() {
        let mut state = state_at("Hello ", 6);
        state.open_chord_entry();
        state.set_entry_text(" Am ");

        let edit = state.confirm_chord_entry().unwrap().unwrap();
        assert_eq!(edit.text, "Hello (Am)");
        assert_eq!(state.text(), "Hello (Am)");
        assert_eq!(state.cursor(), 10);
        assert!(state.is_chord_active());
        assert!(state.entry().is_none());
        assert!(state.segments()[1].is_active);
    }

    #[test]
    fn test_chord_entry_invalid_keeps_document() {
        let mut state = state_at("Hello ", 6);
        state.open_chord_entry();
        state.set_entry_text("Zz");

        let err = state.confirm_chord_entry().unwrap_err();
        assert_eq!(err, EditError::InvalidChordGrammar("Zz".to_string()));
        assert_eq!(state.text(), "Hello ");
        assert_eq!(state.cursor(), 6);
        assert!(state.entry().is_some());
    }

    #[test]
    fn test_chord_entry_without_trim_rejects_spaces() {
        let config = EditorConfig {
            trim_entry_input: false,
            ..Default::default()
        };
        let mut state = EditorState::with_config("x", config);
        state.open_chord_entry();
        state.set_entry_text("C ");
        assert!(state.confirm_chord_entry().is_err());
    }

    #[test]
    fn test_escape_cancels_entry() {
        let mut state = state_at("Hello ", 6);
        state.open_chord_entry();
        state.set_entry_text("G");

        assert_eq!(state.handle_key(EditorKey::Escape).unwrap(), KeyOutcome::Handled);
        assert!(state.entry().is_none());
        assert_eq!(state.text(), "Hello ");
        assert_eq!(state.confirm_chord_entry().unwrap(), None);
    }

    #[test]
    fn test_keys_belong_to_open_entry() {
        let mut state = state_at("ab(C)", 5);
        state.open_chord_entry();
        assert_eq!(state.handle_key(EditorKey::Left).unwrap(), KeyOutcome::PassThrough);
        assert_eq!(state.text(), "ab(C)");
    }

    #[test]
    fn test_set_text_closes_entry_and_reclassifies() {
        let mut state = state_at("ab", 2);
        state.open_chord_entry();
        state.set_text("(G) ab", 2);
        assert!(state.entry().is_none());
        assert!(state.is_chord_active());
    }

    #[test]
    fn test_segments_only_highlight_when_active() {
        let mut state = state_at("(C)x", 3);
        assert!(state.segments()[0].is_active);

        state.clear_active();
        assert!(!state.segments()[0].is_active);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(EditorKey::from_key_name("ArrowLeft"), EditorKey::Left);
        assert_eq!(EditorKey::from_key_name("Esc"), EditorKey::Escape);
        assert_eq!(EditorKey::from_key_name("a"), EditorKey::Other);
    }
}
