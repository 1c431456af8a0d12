//! # Web Blocks
//!
//! The block set this workspace exposes to the host engine:
//!
//! | Block           | Input  | Output | Backed by |
//! |-----------------|--------|--------|-----------|
//! | `Web.Get`       | String | Bytes  | the blocking-call bridge (`core-fetch`) |
//! | `Web.Escape`    | String | String | `core-text::escape` |
//! | `Web.Unescape`  | String | String | `core-text::unescape` |
//! | `Web.HtmlDecode`| String | String | `core-text::decode_html_entities` |
//!
//! `Web.Get` suspends its owning task cooperatively while a worker thread
//! performs the blocking transfer; the text blocks are pure synchronous
//! transforms.

use std::sync::Arc;

use core_fetch::Transfer;
use engine_traits::BlockRegistry;

pub mod get;
pub mod text;

pub use get::WebGet;
pub use text::{HtmlDecode, Unescape, UrlEscape};

/// Register every web block into `registry`.
///
/// `transfer` backs each `Web.Get` instance the registry creates; the text
/// blocks have no dependencies.
pub fn register_blocks(registry: &mut BlockRegistry, transfer: Arc<dyn Transfer>) {
    registry.register(get::BLOCK_NAME, move || {
        Box::new(WebGet::new(Arc::clone(&transfer)))
    });
    registry.register(text::ESCAPE_NAME, || Box::new(UrlEscape));
    registry.register(text::UNESCAPE_NAME, || Box::new(Unescape));
    registry.register(text::HTML_DECODE_NAME, || Box::new(HtmlDecode));
}
