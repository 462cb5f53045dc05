//! Structured errors for chat replies
//!
//! Errors never abort message handling. They are values that end up as
//! reply lines, each carrying a pointer back to the help text.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const INCOMPATIBLE_CATEGORY: &str = "INCOMPATIBLE_CATEGORY";
    pub const TOO_FEW_ARGS: &str = "TOO_FEW_ARGS";
}

/// Structured error rendered into a chat reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl BotError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// The line posted back to the conversation: message, then suggestion.
    pub fn reply_line(&self) -> String {
        match self.suggestion {
            Some(ref suggestion) => format!("{} {}", self.message, suggestion),
            None => self.message.clone(),
        }
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_number(token: &str) -> Self {
        Self::new(codes::INVALID_NUMBER, format!("{} is not a valid number.", token))
    }

    pub fn unknown_unit(token: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("{} is not a valid unit.", token))
    }

    /// Both names are used verbatim; callers decide on capitalization.
    pub fn incompatible_category(first: &str, second: &str) -> Self {
        Self::new(
            codes::INCOMPATIBLE_CATEGORY,
            format!("{} and {} are not from the same category.", first, second),
        )
    }

    pub fn too_few_args() -> Self {
        Self::new(codes::TOO_FEW_ARGS, "Too few arguments given.")
    }
}

impl std::fmt::Display for BotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for BotError {}
