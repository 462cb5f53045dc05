//! Handler Registry

use crate::{HandlerMeta, MessageHandler, ReplySink};
use unitbot_core::Message;
use std::sync::Arc;
use tracing::{debug, warn};

/// Central handler registry.
///
/// Handlers are kept in registration order; every handler whose triage
/// accepts a message gets to reply to it.
pub struct HandlerRegistry {
    handlers: Vec<Arc<dyn MessageHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    pub fn with_handler<H: MessageHandler + 'static>(mut self, h: H) -> Self {
        self.handlers.push(Arc::new(h));
        self
    }

    pub fn get_handler(&self, name: &str) -> Option<&dyn MessageHandler> {
        let name = name.to_lowercase();
        self.handlers
            .iter()
            .find(|h| h.meta().name == name)
            .map(|h| h.as_ref())
    }

    pub fn list_handlers(&self) -> Vec<HandlerMeta> {
        self.handlers.iter().map(|h| h.meta()).collect()
    }

    /// Route `message` to the handlers that accept it and send their
    /// replies. Returns the number of replies delivered.
    pub fn dispatch(&self, message: &Message, sink: &mut dyn ReplySink) -> usize {
        let mut delivered = 0;

        for handler in &self.handlers {
            let name = handler.meta().name;
            if !handler.triage(message) {
                continue;
            }

            debug!(handler = name, stream = %message.display_recipient, "handling message");
            let reply = handler.handle(message);

            match sink.send(&reply) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(handler = name, error = %e, "failed to send reply"),
            }
        }

        delivered
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
