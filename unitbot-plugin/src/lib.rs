//! Unitbot Handler System
//!
//! Provides the seams between chat handlers and the host:
//! - Handlers (triage + synchronous reply)
//! - Reply sinks (transport to the messaging backend)
//! - Registry (routing incoming messages to handlers)

mod traits;
mod registry;
mod sink;

pub use traits::{MessageHandler, HandlerMeta};
pub use registry::HandlerRegistry;
pub use sink::{ReplySink, MemorySink, SinkError};

/// Re-export core types for handler authors
pub mod prelude {
    pub use crate::{
        MessageHandler, HandlerMeta,
        HandlerRegistry, ReplySink, MemorySink, SinkError,
    };
    pub use unitbot_core::prelude::*;
}
