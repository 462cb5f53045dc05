//! Reply transport

use unitbot_core::{MessageError, Reply};
use thiserror::Error;

/// Errors delivering a reply to the messaging backend
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Message(#[from] MessageError),
}

/// Destination for replies. Sends are fire-and-forget from the
/// dispatcher's point of view: a failure is logged, never retried.
pub trait ReplySink {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError>;
}

/// Sink that keeps every reply in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub replies: Vec<Reply>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplySink for MemorySink {
    fn send(&mut self, reply: &Reply) -> Result<(), SinkError> {
        self.replies.push(reply.clone());
        Ok(())
    }
}
