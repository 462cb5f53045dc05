//! Conversion engine

use std::fmt;
use serde::Serialize;
use crate::ConvertError;
use crate::parse::{parse_number, resolve_unit, ResolvedUnit};
use crate::round::{round_significant, ROUND_DIGITS};

/// Raw tokens of one `@convert <number> <unit_from> <unit_to>` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub number: &'a str,
    pub unit_from: &'a str,
    pub unit_to: &'a str,
}

/// A successful conversion, keeping the unit tokens as the user typed them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub unit_from: String,
    pub result: f64,
    pub unit_to: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting always shows a decimal point: 12.0, 53.6, 1e-7
        write!(f, "{:?} {} = {:?} {}", self.value, self.unit_from, self.result, self.unit_to)
    }
}

/// Convert `value` between two resolved units.
///
/// The result goes through the shared base unit, then is scaled by the net
/// prefix exponent: 1024 per three decimal steps for information units,
/// ten per step otherwise. Rounded to `ROUND_DIGITS` past the leading digit.
pub fn convert_resolved(value: f64, from: &ResolvedUnit, to: &ResolvedUnit) -> Result<f64, ConvertError> {
    if !from.unit.is_compatible(to.unit) {
        return Err(ConvertError::IncompatibleCategory {
            from: from.unit.name.to_string(),
            to: to.unit.name.to_string(),
            from_base: from.unit.base,
            to_base: to.unit.base,
        });
    }

    let base_value = from.unit.to_base(value);
    let mut result = to.unit.from_base(base_value);

    let exponent = from.exponent - to.exponent;
    if from.unit.base.uses_binary_prefixes() {
        result *= 1024f64.powf(f64::from(exponent) / 3.0);
    } else {
        result *= 10f64.powi(exponent);
    }

    Ok(round_significant(result, ROUND_DIGITS))
}

/// Convert `value` between two unit tokens
pub fn convert(value: f64, unit_from: &str, unit_to: &str) -> Result<f64, ConvertError> {
    let from = resolve_unit(unit_from)?;
    let to = resolve_unit(unit_to)?;
    convert_resolved(value, &from, &to)
}

/// Run one request. An invalid number stops early; otherwise both unit
/// tokens are checked and every unknown one is reported.
pub fn convert_request(request: &ConversionRequest<'_>) -> Result<Conversion, Vec<ConvertError>> {
    let value = parse_number(request.number).map_err(|e| vec![e])?;

    let (from, to) = match (resolve_unit(request.unit_from), resolve_unit(request.unit_to)) {
        (Ok(from), Ok(to)) => (from, to),
        (from, to) => {
            return Err([from.err(), to.err()].into_iter().flatten().collect());
        }
    };

    let result = convert_resolved(value, &from, &to).map_err(|e| vec![e])?;

    Ok(Conversion {
        value,
        unit_from: request.unit_from.to_string(),
        result,
        unit_to: request.unit_to.to_string(),
    })
}
