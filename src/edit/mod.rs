//! Chord edit engine
//!
//! The stateful part of chord editing lives with the host (see
//! `models::editor_state`); this module holds the pure text transforms.

pub mod engine;
pub mod error;

pub use engine::{insert_chord_at, move_chord_left, move_chord_right, remove_chord, ChordEdit};
pub use error::EditError;
