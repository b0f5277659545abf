//! Models module for the chord editor
//!
//! Session state for one open song and the host-supplied configuration.

pub mod config;
pub mod editor_state;

// Re-export commonly used types
pub use config::{ConfigError, EditorConfig};
pub use editor_state::{ChordEntry, EditorKey, EditorState, KeyOutcome};
