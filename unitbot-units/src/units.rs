//! Unit, prefix and alias tables

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{BaseUnit, Unit};

/// Global unit registry, built on first use and read-only afterwards
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Fahrenheit to kelvin factor (5/9)
const FAHRENHEIT_SCALE: f64 = 5.0 / 9.0;

/// Registry of all known units, magnitude prefixes and short aliases
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
    aliases: HashMap<&'static str, &'static str>,
    /// Longest name first, ties alphabetical
    prefixes: Vec<(&'static str, i32)>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
            prefixes: Vec::new(),
        };
        registry.register_all_units();
        registry.register_prefixes();
        registry
    }

    /// Get a unit by canonical name
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Canonical name for a whole-token alias
    pub fn alias(&self, token: &str) -> Option<&'static str> {
        self.aliases.get(token).copied()
    }

    /// Prefix table in match order
    pub fn prefixes(&self) -> &[(&'static str, i32)] {
        &self.prefixes
    }

    /// Get all units in a category
    #[cfg(test)]
    pub fn by_category(&self, base: BaseUnit) -> Vec<&Unit> {
        let mut units: Vec<&Unit> = self.units.values()
            .filter(|u| u.base == base)
            .collect();
        units.sort_by_key(|u| u.name);
        units
    }

    /// Get all unit names
    #[cfg(test)]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.units.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn register(&mut self, unit: Unit) {
        debug_assert!(unit.scale != 0.0, "unit {} has zero scale", unit.name);
        self.units.insert(unit.name, unit);
    }

    fn add_alias(&mut self, alias: &'static str, name: &'static str) {
        self.aliases.insert(alias, name);
    }

    fn register_all_units(&mut self) {
        self.register_data_units();
        self.register_volume_units();
        self.register_mass_units();
        self.register_temperature_units();
        self.register_length_units();
        self.register_area_units();
    }

    fn register_data_units(&mut self) {
        self.register(Unit::new("bit", 1.0, BaseUnit::Bit));
        self.register(Unit::new("byte", 8.0, BaseUnit::Bit));
    }

    fn register_volume_units(&mut self) {
        // Metric
        self.register(Unit::new("cubic-centimeter", 0.000001, BaseUnit::CubicMeter));
        self.register(Unit::new("cubic-decimeter", 0.001, BaseUnit::CubicMeter));
        self.register(Unit::new("liter", 0.001, BaseUnit::CubicMeter));
        self.register(Unit::new("cubic-meter", 1.0, BaseUnit::CubicMeter));

        // Imperial/US
        self.register(Unit::new("cubic-inch", 0.000016387064, BaseUnit::CubicMeter));
        self.register(Unit::new("fluid-ounce", 0.000029574, BaseUnit::CubicMeter));
        self.register(Unit::new("cubic-foot", 0.028316846592, BaseUnit::CubicMeter));
        self.register(Unit::new("cubic-yard", 0.764554857984, BaseUnit::CubicMeter));

        // Kitchen (metric variants)
        self.register(Unit::new("teaspoon", 0.0000049289216, BaseUnit::CubicMeter));
        self.register(Unit::new("tablespoon", 0.000014787, BaseUnit::CubicMeter));
        self.register(Unit::new("cup", 0.00023658823648491, BaseUnit::CubicMeter));

        self.add_alias("cm3", "cubic-centimeter");
        self.add_alias("cm^3", "cubic-centimeter");
        self.add_alias("dm3", "cubic-decimeter");
        self.add_alias("dm^3", "cubic-decimeter");
        self.add_alias("l", "liter");
        self.add_alias("m3", "cubic-meter");
        self.add_alias("m^3", "cubic-meter");
        self.add_alias("in3", "cubic-inch");
        self.add_alias("in^3", "cubic-inch");
        self.add_alias("fl-oz", "fluid-ounce");
        self.add_alias("ft3", "cubic-foot");
        self.add_alias("ft^3", "cubic-foot");
        self.add_alias("y3", "cubic-yard");
        self.add_alias("y^3", "cubic-yard");
        self.add_alias("tsp", "teaspoon");
        self.add_alias("tbsp", "tablespoon");
    }

    fn register_mass_units(&mut self) {
        self.register(Unit::new("gram", 1.0, BaseUnit::Gram));
        self.register(Unit::new("kilogram", 1000.0, BaseUnit::Gram));
        self.register(Unit::new("ton", 1000000.0, BaseUnit::Gram));
        self.register(Unit::new("ounce", 28.349523125, BaseUnit::Gram));
        self.register(Unit::new("pound", 453.59237, BaseUnit::Gram));

        self.add_alias("g", "gram");
        self.add_alias("kg", "kilogram");
        self.add_alias("t", "ton");
        self.add_alias("oz", "ounce");
        self.add_alias("lb", "pound");
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::new("kelvin", 1.0, BaseUnit::Kelvin));
        self.register(Unit::with_offset("celsius", 273.15, 1.0, BaseUnit::Kelvin));
        // 0 °F = 459.67 °R = 459.67 * 5/9 K
        self.register(Unit::with_offset(
            "fahrenheit",
            459.67 * FAHRENHEIT_SCALE,
            FAHRENHEIT_SCALE,
            BaseUnit::Kelvin,
        ));

        self.add_alias("k", "kelvin");
        self.add_alias("c", "celsius");
        self.add_alias("f", "fahrenheit");
    }

    fn register_length_units(&mut self) {
        // Metric
        self.register(Unit::new("centimeter", 0.01, BaseUnit::Meter));
        self.register(Unit::new("decimeter", 0.1, BaseUnit::Meter));
        self.register(Unit::new("meter", 1.0, BaseUnit::Meter));
        self.register(Unit::new("kilometer", 1000.0, BaseUnit::Meter));

        // Imperial/US
        self.register(Unit::new("inch", 0.0254, BaseUnit::Meter));
        self.register(Unit::new("foot", 0.3048, BaseUnit::Meter));
        self.register(Unit::new("yard", 0.9144, BaseUnit::Meter));
        self.register(Unit::new("mile", 1609.344, BaseUnit::Meter));
        self.register(Unit::new("nautical-mile", 1852.0, BaseUnit::Meter));

        self.add_alias("cm", "centimeter");
        self.add_alias("dm", "decimeter");
        self.add_alias("m", "meter");
        self.add_alias("km", "kilometer");
        self.add_alias("in", "inch");
        self.add_alias("ft", "foot");
        self.add_alias("y", "yard");
        self.add_alias("mi", "mile");
        self.add_alias("nmi", "nautical-mile");
    }

    fn register_area_units(&mut self) {
        // Metric
        self.register(Unit::new("square-centimeter", 0.0001, BaseUnit::SquareMeter));
        self.register(Unit::new("square-decimeter", 0.01, BaseUnit::SquareMeter));
        self.register(Unit::new("square-meter", 1.0, BaseUnit::SquareMeter));
        self.register(Unit::new("square-kilometer", 1000000.0, BaseUnit::SquareMeter));
        self.register(Unit::new("are", 100.0, BaseUnit::SquareMeter));
        self.register(Unit::new("hectare", 10000.0, BaseUnit::SquareMeter));

        // Imperial/US
        self.register(Unit::new("square-inch", 0.00064516, BaseUnit::SquareMeter));
        self.register(Unit::new("square-foot", 0.09290304, BaseUnit::SquareMeter));
        self.register(Unit::new("square-yard", 0.83612736, BaseUnit::SquareMeter));
        self.register(Unit::new("square-mile", 2589988.110336, BaseUnit::SquareMeter));
        self.register(Unit::new("acre", 4046.8564224, BaseUnit::SquareMeter));

        self.add_alias("cm2", "square-centimeter");
        self.add_alias("cm^2", "square-centimeter");
        self.add_alias("dm2", "square-decimeter");
        self.add_alias("dm^2", "square-decimeter");
        self.add_alias("m2", "square-meter");
        self.add_alias("m^2", "square-meter");
        self.add_alias("km2", "square-kilometer");
        self.add_alias("km^2", "square-kilometer");
        self.add_alias("a", "are");
        self.add_alias("ha", "hectare");
        self.add_alias("in2", "square-inch");
        self.add_alias("in^2", "square-inch");
        self.add_alias("ft2", "square-foot");
        self.add_alias("ft^2", "square-foot");
        self.add_alias("y2", "square-yard");
        self.add_alias("y^2", "square-yard");
        self.add_alias("mi2", "square-mile");
        self.add_alias("mi^2", "square-mile");
        self.add_alias("ac", "acre");
    }

    fn register_prefixes(&mut self) {
        self.prefixes = vec![
            ("atto", -18),
            ("femto", -15),
            ("pico", -12),
            ("nano", -9),
            ("micro", -6),
            ("milli", -3),
            ("centi", -2),
            ("deci", -1),
            ("deca", 1),
            ("hecto", 2),
            ("kilo", 3),
            ("mega", 6),
            ("giga", 9),
            ("tera", 12),
            ("peta", 15),
            ("exa", 18),
        ];
        self.prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
