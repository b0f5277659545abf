//! Error types for chord edits
//!
//! Edits either succeed, are silent no-ops (a chord already at the edge of
//! the document), or fail with one of these. A failed edit never changes
//! the document.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The chord body does not fully match the chord grammar
    #[error("invalid chord: '{0}'")]
    InvalidChordGrammar(String),

    /// The span passed in is not a chord of the current document
    #[error("no chord {token} at {start}..{end} in the current document")]
    UnknownSpan {
        start: usize,
        end: usize,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, EditError>;
