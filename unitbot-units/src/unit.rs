//! Unit representation with affine conversion factors

use std::fmt;
use serde::Serialize;
use crate::BaseUnit;

/// A unit of measurement and its affine transform to the base unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical unit name (e.g., "meter", "cubic-foot")
    pub name: &'static str,
    /// Added after scaling (non-zero only for temperature scales)
    pub offset: f64,
    /// Factor to the base unit (value_base = value * scale + offset)
    pub scale: f64,
    /// Base unit of the category
    pub base: BaseUnit,
}

impl Unit {
    /// Create a new unit with proportional conversion (no offset)
    pub const fn new(name: &'static str, scale: f64, base: BaseUnit) -> Self {
        Unit { name, offset: 0.0, scale, base }
    }

    /// Create a unit with offset (for temperature conversions)
    pub const fn with_offset(name: &'static str, offset: f64, scale: f64, base: BaseUnit) -> Self {
        Unit { name, offset, scale, base }
    }

    /// Check if this is the base unit of its category
    #[cfg(test)]
    pub fn is_base(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0 && self.name == self.base.name()
    }

    /// Check if two units share a base unit (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.base == other.base
    }

    /// Convert a value from this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Convert a value from the base unit to this unit
    pub fn from_base(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METER: Unit = Unit::new("meter", 1.0, BaseUnit::Meter);
    const KILOMETER: Unit = Unit::new("kilometer", 1000.0, BaseUnit::Meter);
    const GRAM: Unit = Unit::new("gram", 1.0, BaseUnit::Gram);
    const CELSIUS: Unit = Unit::with_offset("celsius", 273.15, 1.0, BaseUnit::Kelvin);

    #[test]
    fn test_base_unit() {
        assert!(METER.is_base());
        assert!(!KILOMETER.is_base());
        assert!(!CELSIUS.is_base());
    }

    #[test]
    fn test_compatible_units() {
        assert!(METER.is_compatible(&KILOMETER));
        assert!(!METER.is_compatible(&GRAM));
    }

    #[test]
    fn test_to_base() {
        assert_eq!(KILOMETER.to_base(5.0), 5000.0);
        assert_eq!(CELSIUS.to_base(0.0), 273.15);
    }

    #[test]
    fn test_from_base() {
        assert_eq!(KILOMETER.from_base(5000.0), 5.0);
        assert_eq!(CELSIUS.from_base(273.15), 0.0);
    }
}
