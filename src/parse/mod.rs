//! Chord grammar and scanner
//!
//! Recognizes chord markup embedded in free-form lyric text. This is the
//! leaf layer: the renderer and the edit engine both call into it.

pub mod grammar;
pub mod scanner;

// Re-export commonly used types
pub use grammar::{validate, token_for, Accidental, ChordBody, Note, Quality};
pub use scanner::{chord_names, scan};
