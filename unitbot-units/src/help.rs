//! User-facing help text

/// Posted verbatim for `@convert help`
pub const HELP_MESSAGE: &str = "Converter usage:\n\
`@convert <number> <unit_from> <unit_to>`\n\
Converts `number` in the unit <unit_from> to the <unit_to> and prints the result\n\
`number`: integer or floating point number, e.g. 12, 13.05, 0.002\n\
<unit_from> and <unit_to> are two of the following units:\n\
* square-centimeter (cm^2, cm2), square-decimeter (dm^2, dm2), square-meter (m^2, m2), \
square-kilometer (km^2, km2), square-inch (in^2, in2), square-foot (ft^2, ft2), \
square-yard (y^2, y2),  square-mile(mi^2, mi2),  are (a), hectare (ha), acre (ac)\n\
* bit, byte\n\
* centimeter (cm), decimeter(dm), meter (m), kilometer (km), inch (in), foot (ft), \
yard (y), mile (mi), nautical-mile (nmi)\n\
* Kelvin (K), Celsius(C), Fahrenheit (F)\n\
* cubic-centimeter (cm^3, cm3), cubic-decimeter (dm^3, dm3), liter (l), \
cubic-meter (m^3, m3), cubic-inch (in^3, in3), fluid-ounce (fl-oz), \
cubic-foot (ft^3, ft3), cubic-yard (y^3, y3)\n\
* gram (g), kilogram (kg), ton (t), ounce (oz), pound(lb)\n\
* (metric only, U.S. and imperial units differ slightly:) teaspoon (tsp), tablespoon (tbsp), cup\n\
\n\n\
Allowed prefixes are:\n\
* atto, pico, femto, nano, micro, milli, centi, deci\n\
* deca, hecto, kilo, mega, giga, tera, peta, exa\n\
\n\n\
Usage examples:\n\
* `@convert 12 celsius fahrenheit`\n\
* `@convert 0.002 kilomile millimeter`\n\
* `@convert 31.5 square-mile ha`\n\
* `@convert 56 g lb`\n";

/// Appended to every error line
pub const QUICK_HELP: &str = "Enter `@convert help` for help on using the converter.";

/// Handler description shown by hosts listing their handlers
pub const USAGE: &str = "This plugin allows users to make conversions between \
various units, e.g. Celsius to Fahrenheit, or kilobytes to gigabytes. \
It looks for messages of the format '@convert <number> <unit_from> <unit_to>'. \
The message '@convert help' posts a short description of how to use the plugin, \
along with a list of all supported units.";
