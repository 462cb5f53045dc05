//! Token parsing - numbers and unit tokens like "km", "kilomile" or "cm^2"

use crate::{ConvertError, Unit};
use crate::units::UNITS;

/// A unit token resolved to a table entry plus its prefix magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit {
    pub unit: &'static Unit,
    /// Power of ten contributed by stripped prefixes
    pub exponent: i32,
}

/// Resolve a lowercased unit token.
///
/// Aliases are matched against the whole token first. Prefixes are then
/// stripped in a single pass, longest prefix name first, and the remainder
/// must name a unit. Errors carry the token as given.
pub fn resolve_unit(token: &str) -> Result<ResolvedUnit, ConvertError> {
    let mut name = UNITS.alias(token).unwrap_or(token);
    let mut exponent = 0;

    for (prefix, exp) in UNITS.prefixes() {
        if let Some(rest) = name.strip_prefix(prefix) {
            name = rest;
            exponent += exp;
        }
    }

    UNITS.get(name)
        .map(|unit| ResolvedUnit { unit, exponent })
        .ok_or_else(|| ConvertError::UnknownUnit(token.to_string()))
}

/// Parse a number token as a finite base-10 float literal
pub fn parse_number(token: &str) -> Result<f64, ConvertError> {
    token.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConvertError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaseUnit;

    #[test]
    fn test_resolve_plain_unit() {
        let r = resolve_unit("mile").unwrap();
        assert_eq!(r.unit.name, "mile");
        assert_eq!(r.exponent, 0);
    }

    #[test]
    fn test_resolve_alias() {
        let r = resolve_unit("cm2").unwrap();
        assert_eq!(r.unit.name, "square-centimeter");
        assert_eq!(r.exponent, 0);

        let r = resolve_unit("lb").unwrap();
        assert_eq!(r.unit.name, "pound");
    }

    #[test]
    fn test_alias_then_prefix() {
        // km -> kilometer -> kilo + meter
        let r = resolve_unit("km").unwrap();
        assert_eq!(r.unit.name, "meter");
        assert_eq!(r.exponent, 3);
    }

    #[test]
    fn test_resolve_prefixed() {
        let r = resolve_unit("kilomile").unwrap();
        assert_eq!(r.unit.name, "mile");
        assert_eq!(r.exponent, 3);

        let r = resolve_unit("millimeter").unwrap();
        assert_eq!(r.unit.name, "meter");
        assert_eq!(r.exponent, -3);

        let r = resolve_unit("gigabyte").unwrap();
        assert_eq!(r.unit.base, BaseUnit::Bit);
        assert_eq!(r.exponent, 9);
    }

    #[test]
    fn test_unit_names_that_look_prefixed() {
        // "hectare" is not hecto + something
        let r = resolve_unit("hectare").unwrap();
        assert_eq!(r.unit.name, "hectare");
        assert_eq!(r.exponent, 0);

        // decimeter resolves through the prefix, same magnitude
        let r = resolve_unit("decimeter").unwrap();
        assert_eq!(r.unit.name, "meter");
        assert!((r.unit.to_base(1.0) * 10f64.powi(r.exponent) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_unit_keeps_raw_token() {
        assert_eq!(
            resolve_unit("parsecs"),
            Err(ConvertError::UnknownUnit("parsecs".to_string()))
        );
        assert_eq!(
            resolve_unit("kiloparsec"),
            Err(ConvertError::UnknownUnit("kiloparsec".to_string()))
        );
        assert_eq!(
            resolve_unit("kilo"),
            Err(ConvertError::UnknownUnit("kilo".to_string()))
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Ok(12.0));
        assert_eq!(parse_number("-13.05"), Ok(-13.05));
        assert_eq!(parse_number("0.002"), Ok(0.002));
        assert_eq!(parse_number("1.5e2"), Ok(150.0));
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for token in ["twelve", "1,5", "", "inf", "nan", "12m"] {
            assert_eq!(
                parse_number(token),
                Err(ConvertError::InvalidNumber(token.to_string())),
                "token {:?}",
                token
            );
        }
    }
}
