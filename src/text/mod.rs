//! Layer 0: Text primitives
//!
//! Plain character-offset text handling with no knowledge of chord grammar.
//! The lyrics `String` is the source of truth; chord spans are derived from
//! it by the scanner.
//!
//! ## Modules
//!
//! - `buffer`: char-offset splicing over `String`
//! - `span`: the `ChordSpan` type and span queries

pub mod buffer;
pub mod span;

// Re-exports for convenience
pub use buffer::{char_len, char_to_byte, clamp_offset, insert_at, remove_range};
pub use span::{active_span, span_containing, ChordSpan};
