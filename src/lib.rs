//! Chord Editor WASM Module
//!
//! Inline chord annotation engine for a lyrics editor. Recognizes chord
//! markup such as `(Cmaj7)` embedded in lyric text, renders it as
//! highlighted segments, and moves or inserts chord tokens one character
//! slot at a time without corrupting the surrounding text.
//!
//! The lyrics text is the only source of truth: chord spans are re-derived
//! by scanning on every operation.

pub mod text;
pub mod parse;
pub mod renderers;
pub mod edit;
pub mod models;
pub mod api;

// Re-export commonly used types
pub use edit::{ChordEdit, EditError};
pub use models::{EditorConfig, EditorKey, EditorState, KeyOutcome};
pub use parse::{scan, validate, ChordBody};
pub use renderers::{render, Segment};
pub use text::ChordSpan;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init (module re-instantiated by the host) keeps the first logger.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Chord Editor WASM module initialized");
}
