//! # Text Transforms
//!
//! Pure, synchronous, stateless string transforms used by the text blocks:
//! URL percent escaping/unescaping and HTML entity decoding. Nothing here
//! touches the concurrency core.

pub mod entities;
pub mod escape;

// Re-export common utilities
pub use entities::decode_html_entities;
pub use escape::{escape, unescape};
