//! Chord Editor WASM API
//!
//! The JavaScript-facing surface of the chord engine.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, validation and error conversion
//! - `core`: stateless exports, one per engine operation
//! - `session`: the `ChordEditor` class wrapping an `EditorState`
//! - `types`: result shapes returned to the host

pub mod helpers;
pub mod types;
pub mod core;
pub mod session;

pub use self::core::*;
pub use session::ChordEditor;
