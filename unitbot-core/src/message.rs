//! Inbound chat messages and outbound reply commands

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A chat message as delivered by the messaging backend.
///
/// Only the fields the handlers read are modelled; anything else in the
/// payload is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Free text of the message
    pub content: String,
    /// Stream the message was posted to
    pub display_recipient: String,
    /// Topic within the stream
    pub subject: String,
}

impl Message {
    pub fn new(
        content: impl Into<String>,
        display_recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            display_recipient: display_recipient.into(),
            subject: subject.into(),
        }
    }

    /// Decode a message from one JSON document
    pub fn from_json(s: &str) -> Result<Self, MessageError> {
        serde_json::from_str(s).map_err(MessageError::Decode)
    }
}

/// Destination kind of a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Stream,
}

/// A reply command handed to the messaging backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(rename = "type")]
    pub kind: ReplyKind,
    pub to: String,
    pub subject: String,
    pub content: String,
}

impl Reply {
    /// Reply into the same stream and topic as `message`
    pub fn to_stream(message: &Message, content: impl Into<String>) -> Self {
        Self {
            kind: ReplyKind::Stream,
            to: message.display_recipient.clone(),
            subject: message.subject.clone(),
            content: content.into(),
        }
    }

    /// Encode the reply as a single-line JSON document
    pub fn to_json(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(MessageError::Encode)
    }
}

/// Errors decoding or encoding wire messages
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("invalid message payload: {0}")]
    Decode(serde_json::Error),

    #[error("failed to encode reply: {0}")]
    Encode(serde_json::Error),
}
