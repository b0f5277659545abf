//! Stateless WASM API
//!
//! One export per engine operation. Hosts that keep their own document and
//! cursor call these directly and apply the returned text and cursor.
//! Offsets are character offsets throughout.
//!
//! A character here is a Unicode scalar value, while `selectionStart` and
//! `String.length` in JavaScript count UTF-16 code units. The two agree for
//! text inside the Basic Multilingual Plane; lyrics containing emoji or
//! other astral characters need converting (e.g. `[...text].length` for a
//! prefix) before offsets are passed in or applied.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize, span_from_js, to_js_error, validation_error};
use crate::edit;
use crate::models::EditorConfig;
use crate::parse::{self, ChordBody};
use crate::renderers::{render, render_html};
use crate::text::ChordSpan;

/// Scan a document for chord tokens
///
/// # Returns
/// Array of `{ start, end, token }`, ordered and non-overlapping
#[wasm_bindgen(js_name = scanChords)]
pub fn scan_chords(document: &str) -> Result<JsValue, JsValue> {
    serialize(&parse::scan(document), "Failed to serialize chord spans")
}

/// Check a chord body (without parentheses) against the chord grammar
#[wasm_bindgen(js_name = validateChord)]
pub fn validate_chord(body: &str) -> bool {
    parse::validate(body)
}

/// Split a chord body into root, quality, extension and bass
///
/// # Returns
/// The parsed chord, or `null` when `body` is not a valid chord
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord(body: &str) -> Result<JsValue, JsValue> {
    serialize(&ChordBody::parse(body), "Failed to serialize chord")
}

/// Distinct chord bodies used in a document, in order of first appearance
#[wasm_bindgen(js_name = chordNames)]
pub fn chord_names(document: &str) -> Result<JsValue, JsValue> {
    serialize(&parse::chord_names(document), "Failed to serialize chord names")
}

/// Build highlight segments for a document
///
/// # Parameters
/// - `document`: lyrics text
/// - `spans_js`: spans from `scanChords`, or `null`/`undefined` to scan here
/// - `active_cursor`: cursor offset when a chord is active, otherwise omitted
///
/// # Returns
/// Array of `{ text, is_chord, is_active }` whose texts concatenate to `document`
#[wasm_bindgen(js_name = renderSegments)]
pub fn render_segments(
    document: &str,
    spans_js: JsValue,
    active_cursor: Option<u32>,
) -> Result<JsValue, JsValue> {
    let spans = spans_or_scan(document, spans_js)?;
    let segments = render(document, &spans, active_cursor.map(|c| c as usize));
    serialize(&segments, "Failed to serialize segments")
}

/// Render a document as HTML with chord spans wrapped in classed `<span>`s
///
/// `config_js` may be `null`/`undefined` for the default classes.
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js(
    document: &str,
    active_cursor: Option<u32>,
    config_js: JsValue,
) -> Result<String, JsValue> {
    let config = config_or_default(config_js)?;
    let segments = render(document, &parse::scan(document), active_cursor.map(|c| c as usize));
    Ok(render_html(&segments, &config))
}

/// Move a chord one slot left
///
/// # Returns
/// `{ text, cursor, span, changed }`; `changed` is false at the document start
#[wasm_bindgen(js_name = moveChordLeft)]
pub fn move_chord_left(document: &str, span_js: JsValue) -> Result<JsValue, JsValue> {
    let span = span_from_js(span_js)?;
    let edit = edit::move_chord_left(document, &span).map_err(|e| to_js_error("moveChordLeft", e))?;
    serialize(&edit, "Failed to serialize edit")
}

/// Move a chord one slot right
///
/// # Returns
/// `{ text, cursor, span, changed }`; `changed` is false at the document end
#[wasm_bindgen(js_name = moveChordRight)]
pub fn move_chord_right(document: &str, span_js: JsValue) -> Result<JsValue, JsValue> {
    let span = span_from_js(span_js)?;
    let edit = edit::move_chord_right(document, &span).map_err(|e| to_js_error("moveChordRight", e))?;
    serialize(&edit, "Failed to serialize edit")
}

/// Insert `(body)` at `position`
///
/// Rejects with an "invalid chord" message when `body` fails the grammar;
/// the host shows it to the user and keeps its document unchanged.
#[wasm_bindgen(js_name = insertChordAt)]
pub fn insert_chord_at(document: &str, body: &str, position: usize) -> Result<JsValue, JsValue> {
    let edit = edit::insert_chord_at(document, body, position)
        .map_err(|e| to_js_error("insertChordAt", e))?;
    serialize(&edit, "Failed to serialize edit")
}

/// Delete a chord token
#[wasm_bindgen(js_name = removeChord)]
pub fn remove_chord(document: &str, span_js: JsValue) -> Result<JsValue, JsValue> {
    let span = span_from_js(span_js)?;
    let edit = edit::remove_chord(document, &span).map_err(|e| to_js_error("removeChord", e))?;
    serialize(&edit, "Failed to serialize edit")
}

/// Set the maximum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`)
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = level
        .parse::<log::LevelFilter>()
        .map_err(|_| validation_error(format!("Unknown log level: '{}'", level)))?;
    log::set_max_level(filter);
    log::info!("Log level set to {}", filter);
    Ok(())
}

fn spans_or_scan(document: &str, spans_js: JsValue) -> Result<Vec<ChordSpan>, JsValue> {
    if spans_js.is_null() || spans_js.is_undefined() {
        return Ok(parse::scan(document));
    }
    deserialize(spans_js, "Invalid chord spans")
}

pub(crate) fn config_or_default(config_js: JsValue) -> Result<EditorConfig, JsValue> {
    if config_js.is_null() || config_js.is_undefined() {
        return Ok(EditorConfig::default());
    }
    let config: EditorConfig = deserialize(config_js, "Invalid editor config")?;
    config.validate().map_err(|e| to_js_error("Invalid editor config", e))?;
    Ok(config)
}
