//! Measurement categories
//!
//! Every unit converts through exactly one base unit. Units that share a
//! base unit belong to the same category and are mutually convertible.

use std::fmt;
use serde::Serialize;

/// Base unit of a measurement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaseUnit {
    /// Information storage [bit]
    Bit,
    /// Volume [m^3]
    CubicMeter,
    /// Mass [g]
    Gram,
    /// Temperature [K]
    Kelvin,
    /// Length [m]
    Meter,
    /// Area [m^2]
    SquareMeter,
}

impl BaseUnit {
    pub const ALL: [BaseUnit; 6] = [
        BaseUnit::Bit,
        BaseUnit::CubicMeter,
        BaseUnit::Gram,
        BaseUnit::Kelvin,
        BaseUnit::Meter,
        BaseUnit::SquareMeter,
    ];

    /// Canonical name of the base unit
    pub fn name(&self) -> &'static str {
        match self {
            BaseUnit::Bit => "bit",
            BaseUnit::CubicMeter => "cubic-meter",
            BaseUnit::Gram => "gram",
            BaseUnit::Kelvin => "kelvin",
            BaseUnit::Meter => "meter",
            BaseUnit::SquareMeter => "square-meter",
        }
    }

    /// Prefixes on information units step by 1024 instead of 1000
    pub fn uses_binary_prefixes(&self) -> bool {
        matches!(self, BaseUnit::Bit)
    }

    /// Temperature scales are named after people and keep their capital
    pub fn is_proper_name(&self) -> bool {
        matches!(self, BaseUnit::Kelvin)
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(BaseUnit::CubicMeter.name(), "cubic-meter");
        assert_eq!(format!("{}", BaseUnit::SquareMeter), "square-meter");
    }

    #[test]
    fn test_binary_prefixes_only_for_bits() {
        for base in BaseUnit::ALL {
            assert_eq!(base.uses_binary_prefixes(), base == BaseUnit::Bit);
        }
    }

    #[test]
    fn test_serialize_matches_name() {
        for base in BaseUnit::ALL {
            let json = serde_json::to_string(&base).unwrap();
            assert_eq!(json, format!("\"{}\"", base.name()));
        }
    }
}
