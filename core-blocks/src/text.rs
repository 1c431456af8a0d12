//! Text Blocks
//!
//! Stateless string-to-string blocks over the `core-text` transforms.

use engine_traits::{Block, BlockDescriptor, Scheduler, Value, ValueKind};

pub const ESCAPE_NAME: &str = "Web.Escape";
pub const UNESCAPE_NAME: &str = "Web.Unescape";
pub const HTML_DECODE_NAME: &str = "Web.HtmlDecode";

/// Percent-encode a string for URL inclusion.
pub struct UrlEscape;

impl Block for UrlEscape {
    fn descriptor(&self) -> BlockDescriptor {
        BlockDescriptor::new(ESCAPE_NAME, ValueKind::String, ValueKind::String)
    }

    fn activate(
        &mut self,
        _scheduler: &mut dyn Scheduler,
        input: &Value,
    ) -> engine_traits::error::Result<Value> {
        Ok(Value::String(core_text::escape(input.as_str()?)))
    }
}

/// Decode percent-escapes.
pub struct Unescape;

impl Block for Unescape {
    fn descriptor(&self) -> BlockDescriptor {
        BlockDescriptor::new(UNESCAPE_NAME, ValueKind::String, ValueKind::String)
    }

    fn activate(
        &mut self,
        _scheduler: &mut dyn Scheduler,
        input: &Value,
    ) -> engine_traits::error::Result<Value> {
        Ok(Value::String(core_text::unescape(input.as_str()?)))
    }
}

/// Decode HTML entities.
pub struct HtmlDecode;

impl Block for HtmlDecode {
    fn descriptor(&self) -> BlockDescriptor {
        BlockDescriptor::new(HTML_DECODE_NAME, ValueKind::String, ValueKind::String)
    }

    fn activate(
        &mut self,
        _scheduler: &mut dyn Scheduler,
        input: &Value,
    ) -> engine_traits::error::Result<Value> {
        Ok(Value::String(core_text::decode_html_entities(
            input.as_str()?,
        )))
    }
}
