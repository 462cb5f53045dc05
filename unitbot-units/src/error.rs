//! Conversion errors

use thiserror::Error;
use unitbot_core::BotError;
use crate::BaseUnit;
use crate::help::QUICK_HELP;

/// Errors that can occur while handling one `@convert` occurrence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The number token is not a finite float literal
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Unit token not found after alias and prefix resolution
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Units resolve but measure different things
    #[error("cannot convert {from} ({from_base}) to {to} ({to_base}): incompatible categories")]
    IncompatibleCategory {
        from: String,
        to: String,
        from_base: BaseUnit,
        to_base: BaseUnit,
    },

    /// Fewer than three tokens follow `@convert`
    #[error("too few arguments")]
    TooFewArguments,
}

impl From<&ConvertError> for BotError {
    fn from(err: &ConvertError) -> Self {
        let err = match err {
            ConvertError::InvalidNumber(token) => BotError::invalid_number(token),
            ConvertError::UnknownUnit(token) => BotError::unknown_unit(token),
            ConvertError::IncompatibleCategory { from, to, from_base, .. } => {
                let from = if from_base.is_proper_name() {
                    capitalize(from)
                } else {
                    from.clone()
                };
                BotError::incompatible_category(&capitalize(to), &from)
            }
            ConvertError::TooFewArguments => BotError::too_few_args(),
        };
        err.with_suggestion(QUICK_HELP)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
