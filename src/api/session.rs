//! Stateful WASM API
//!
//! `ChordEditor` wraps one `EditorState` for hosts that would rather hand
//! key presses and clicks to an object than track the document, cursor and
//! active chord themselves. Each mutating call returns a snapshot the host
//! redraws from; restoring scroll position stays with the host.

use wasm_bindgen::prelude::*;

use crate::api::core::config_or_default;
use crate::api::helpers::{serialize, to_js_error};
use crate::api::types::{EditorSnapshot, KeyResult};
use crate::models::{EditorKey, EditorState};

/// One open song in the chord editor
#[wasm_bindgen]
pub struct ChordEditor {
    state: EditorState,
}

#[wasm_bindgen]
impl ChordEditor {
    /// Open a session on `text` with optional config (`null` for defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, config_js: JsValue) -> Result<ChordEditor, JsValue> {
        let config = config_or_default(config_js)?;
        config
            .apply_log_level()
            .map_err(|e| to_js_error("Invalid editor config", e))?;
        log::info!("ChordEditor opened ({} chars)", text.chars().count());
        Ok(ChordEditor {
            state: EditorState::with_config(text, config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.state.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    #[wasm_bindgen(getter, js_name = chordActive)]
    pub fn chord_active(&self) -> bool {
        self.state.is_chord_active()
    }

    /// Replace the session config (`null` restores defaults)
    ///
    /// Rejects an invalid config and keeps the current one.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config_js: JsValue) -> Result<(), JsValue> {
        let config = config_or_default(config_js)?;
        config
            .apply_log_level()
            .map_err(|e| to_js_error("Invalid editor config", e))?;
        self.state.set_config(config);
        Ok(())
    }

    /// Replace the text after ordinary editing in the host
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str, cursor: usize) -> Result<JsValue, JsValue> {
        self.state.set_text(text, cursor);
        self.snapshot()
    }

    /// Move the cursor (click or caret movement) and re-classify it
    #[wasm_bindgen(js_name = setCursor)]
    pub fn set_cursor(&mut self, cursor: usize) -> Result<JsValue, JsValue> {
        self.state.set_cursor(cursor);
        self.snapshot()
    }

    /// Route a key press (`KeyboardEvent.key`) through the session
    ///
    /// # Returns
    /// `{ handled, snapshot }`; when `handled` is false the host applies its
    /// default behaviour for the key
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> Result<JsValue, JsValue> {
        let outcome = self
            .state
            .handle_key(EditorKey::from_key_name(key))
            .map_err(|e| to_js_error("handleKey", e))?;
        log::debug!("handleKey '{}' -> {:?}", key, outcome);
        serialize(&KeyResult::new(outcome, &self.state), "Failed to serialize key result")
    }

    /// Insert `(body)` at the cursor without going through the entry box
    #[wasm_bindgen(js_name = insertChord)]
    pub fn insert_chord(&mut self, body: &str) -> Result<JsValue, JsValue> {
        self.state
            .insert_chord(body)
            .map_err(|e| to_js_error("insertChord", e))?;
        self.snapshot()
    }

    /// Open the chord entry box at the cursor
    #[wasm_bindgen(js_name = openChordEntry)]
    pub fn open_chord_entry(&mut self) -> Result<JsValue, JsValue> {
        self.state.open_chord_entry();
        self.snapshot()
    }

    #[wasm_bindgen(js_name = setEntryText)]
    pub fn set_entry_text(&mut self, text: &str) {
        self.state.set_entry_text(text);
    }

    /// Insert the typed chord and close the entry box
    ///
    /// Rejects with an "invalid chord" message on bad input; the document is
    /// unchanged and the box stays open.
    #[wasm_bindgen(js_name = confirmChordEntry)]
    pub fn confirm_chord_entry(&mut self) -> Result<JsValue, JsValue> {
        self.state
            .confirm_chord_entry()
            .map_err(|e| to_js_error("confirmChordEntry", e))?;
        self.snapshot()
    }

    /// Close the entry box (Escape or a click outside it)
    #[wasm_bindgen(js_name = cancelChordEntry)]
    pub fn cancel_chord_entry(&mut self) -> Result<JsValue, JsValue> {
        self.state.cancel_chord_entry();
        self.snapshot()
    }

    /// The active chord's span, or `null`
    #[wasm_bindgen(js_name = activeSpan)]
    pub fn active_span(&self) -> Result<JsValue, JsValue> {
        serialize(&self.state.active_span(), "Failed to serialize span")
    }

    #[wasm_bindgen(js_name = chordNames)]
    pub fn chord_names(&self) -> Result<JsValue, JsValue> {
        serialize(&self.state.chord_names(), "Failed to serialize chord names")
    }

    /// HTML for the current text, active chord highlighted
    pub fn html(&self) -> String {
        self.state.html()
    }

    /// Current text, cursor, active flag and segments
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&EditorSnapshot::of(&self.state), "Failed to serialize snapshot")
    }
}
