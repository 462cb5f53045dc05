//! Handler traits

use unitbot_core::{Message, Reply};
use serde::Serialize;

/// Metadata for a message handler
#[derive(Debug, Clone, Serialize)]
pub struct HandlerMeta {
    pub name: &'static str,
    pub description: &'static str,
    /// Longer explanation of how users invoke the handler
    pub usage: &'static str,
    /// Literal token that routes a message to this handler
    pub trigger: &'static str,
    pub examples: &'static [&'static str],
}

/// Chat message handler.
///
/// `triage` is cheap and decides whether `handle` runs at all. `handle` is
/// synchronous and must always produce a reply; failures are reported
/// inside the reply content.
pub trait MessageHandler: Send + Sync {
    fn meta(&self) -> HandlerMeta;
    fn triage(&self, message: &Message) -> bool;
    fn handle(&self, message: &Message) -> Reply;
}
