//! Unitbot Core - Fundamental types
//!
//! This crate provides the core types shared by handlers and hosts:
//! - `Message`: An inbound chat message
//! - `Reply`: An outbound reply command
//! - `BotError`: Structured errors rendered into reply lines

mod error;
mod message;

pub use error::{BotError, codes};
pub use message::{Message, MessageError, Reply, ReplyKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BotError, Message, Reply};
    pub use crate::error::codes;
}
