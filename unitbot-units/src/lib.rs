//! Unitbot Units - Unit Conversion Handler
//!
//! Answers `@convert <number> <unit_from> <unit_to>` commands in chat
//! messages. Every unit maps to the base unit of its category through an
//! affine transform (`base = value * scale + offset`).
//!
//! Categories:
//! - Data (bit, byte)
//! - Volume (cubic-meter, liter, cup, etc.)
//! - Mass (gram, kilogram, pound, etc.)
//! - Temperature (kelvin, celsius, fahrenheit)
//! - Length (meter, inch, mile, etc.)
//! - Area (square-meter, hectare, acre, etc.)
//!
//! Unit tokens accept SI prefixes from atto to exa. On data units the
//! prefixes step by 1024, so `kilobyte` is 1024 bytes.

mod category;
mod unit;
mod units;
mod error;
mod parse;
mod round;
mod convert;
mod help;
mod handler;

pub use category::BaseUnit;
pub use unit::Unit;
pub use units::{UnitRegistry, UNITS};
pub use error::ConvertError;
pub use parse::{parse_number, resolve_unit, ResolvedUnit};
pub use round::{round_significant, ROUND_DIGITS};
pub use convert::{convert, convert_request, convert_resolved, Conversion, ConversionRequest};
pub use help::{HELP_MESSAGE, QUICK_HELP};
pub use handler::{parse_commands, render_reply, ConverterHandler, Occurrence, TRIGGER};

use unitbot_plugin::HandlerRegistry;

/// Load the converter handler into registry
pub fn load_converter(registry: HandlerRegistry) -> HandlerRegistry {
    registry.with_handler(ConverterHandler)
}
