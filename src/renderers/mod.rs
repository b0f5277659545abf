//! Renderers module for the chord editor
//!
//! Display projections of a lyrics document. Nothing here mutates the
//! document or its spans.

pub mod highlight;
pub mod html;

// Re-export commonly used types
pub use highlight::{render, Segment};
pub use html::render_html;
