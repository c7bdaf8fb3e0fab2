//! # Unit Registry & Quantity Converter
//!
//! Static tables mapping unit symbols to a conversion relative to the SI base
//! unit of each physical quantity kind, plus the two conversion functions
//! every solve goes through: [`to_base`] and [`from_base`].
//!
//! ## Design Philosophy
//!
//! - One [`PhysicalQuantityKind`] enum and one registry, so a unit symbol is
//!   always resolved against a specific kind (`lb` is a force *and* a mass).
//! - Unknown symbols are rejected with [`SolveError::UnknownUnit`], never
//!   treated as factor 1.
//! - Linear units convert with a single factor. Temperature units are affine
//!   and carry an origin and an offset as well.
//!
//! ## Example
//!
//! ```rust
//! use eqsolve_core::units::{from_base, to_base, PhysicalQuantityKind};
//!
//! let kelvin = to_base(212.0, "F", PhysicalQuantityKind::Temperature).unwrap();
//! assert!((kelvin - 373.15).abs() < 1e-9);
//!
//! let mph = from_base(10.0, "mph", PhysicalQuantityKind::Velocity).unwrap();
//! assert!((mph - 22.369).abs() < 1e-3);
//! ```

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{EqResult, SolveError};

// ============================================================================
// Quantity Kinds
// ============================================================================

/// Physical quantity kinds known to the registry.
///
/// Each kind has exactly one base unit (the first entry of its table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalQuantityKind {
    Length,
    Mass,
    Force,
    Velocity,
    Time,
    Density,
    Area,
    Volume,
    Energy,
    Pressure,
    Angle,
    /// Absolute temperature (affine conversions)
    Temperature,
    /// Temperature difference (linear conversions, no offset)
    TemperatureInterval,
    Acceleration,
    Frequency,
    SpecificHeat,
    Dimensionless,
}

impl PhysicalQuantityKind {
    /// All kinds, in registry order
    pub const ALL: [PhysicalQuantityKind; 17] = [
        PhysicalQuantityKind::Length,
        PhysicalQuantityKind::Mass,
        PhysicalQuantityKind::Force,
        PhysicalQuantityKind::Velocity,
        PhysicalQuantityKind::Time,
        PhysicalQuantityKind::Density,
        PhysicalQuantityKind::Area,
        PhysicalQuantityKind::Volume,
        PhysicalQuantityKind::Energy,
        PhysicalQuantityKind::Pressure,
        PhysicalQuantityKind::Angle,
        PhysicalQuantityKind::Temperature,
        PhysicalQuantityKind::TemperatureInterval,
        PhysicalQuantityKind::Acceleration,
        PhysicalQuantityKind::Frequency,
        PhysicalQuantityKind::SpecificHeat,
        PhysicalQuantityKind::Dimensionless,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PhysicalQuantityKind::Length => "Length",
            PhysicalQuantityKind::Mass => "Mass",
            PhysicalQuantityKind::Force => "Force",
            PhysicalQuantityKind::Velocity => "Velocity",
            PhysicalQuantityKind::Time => "Time",
            PhysicalQuantityKind::Density => "Density",
            PhysicalQuantityKind::Area => "Area",
            PhysicalQuantityKind::Volume => "Volume",
            PhysicalQuantityKind::Energy => "Energy",
            PhysicalQuantityKind::Pressure => "Pressure",
            PhysicalQuantityKind::Angle => "Angle",
            PhysicalQuantityKind::Temperature => "Temperature",
            PhysicalQuantityKind::TemperatureInterval => "Temperature Interval",
            PhysicalQuantityKind::Acceleration => "Acceleration",
            PhysicalQuantityKind::Frequency => "Frequency",
            PhysicalQuantityKind::SpecificHeat => "Specific Heat",
            PhysicalQuantityKind::Dimensionless => "Dimensionless",
        }
    }

    /// Parse from the display name or the variant name, case-insensitive.
    pub fn from_str_flexible(s: &str) -> EqResult<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        PhysicalQuantityKind::ALL
            .into_iter()
            .find(|kind| kind.display_name().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| SolveError::incomplete_input(format!("unknown quantity kind '{}'", s)))
    }

    /// Registered units of this kind. The base unit comes first.
    pub fn units(&self) -> &'static [UnitDefinition] {
        match self {
            PhysicalQuantityKind::Length => LENGTH_UNITS,
            PhysicalQuantityKind::Mass => MASS_UNITS,
            PhysicalQuantityKind::Force => FORCE_UNITS,
            PhysicalQuantityKind::Velocity => VELOCITY_UNITS,
            PhysicalQuantityKind::Time => TIME_UNITS,
            PhysicalQuantityKind::Density => DENSITY_UNITS,
            PhysicalQuantityKind::Area => AREA_UNITS,
            PhysicalQuantityKind::Volume => VOLUME_UNITS,
            PhysicalQuantityKind::Energy => ENERGY_UNITS,
            PhysicalQuantityKind::Pressure => PRESSURE_UNITS,
            PhysicalQuantityKind::Angle => ANGLE_UNITS,
            PhysicalQuantityKind::Temperature => TEMPERATURE_UNITS,
            PhysicalQuantityKind::TemperatureInterval => TEMPERATURE_INTERVAL_UNITS,
            PhysicalQuantityKind::Acceleration => ACCELERATION_UNITS,
            PhysicalQuantityKind::Frequency => FREQUENCY_UNITS,
            PhysicalQuantityKind::SpecificHeat => SPECIFIC_HEAT_UNITS,
            PhysicalQuantityKind::Dimensionless => DIMENSIONLESS_UNITS,
        }
    }

    /// The SI base unit of this kind
    pub fn base_unit(&self) -> &'static UnitDefinition {
        &self.units()[0]
    }
}

impl fmt::Display for PhysicalQuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Unit Definitions
// ============================================================================

/// How a unit maps onto its kind's base unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Conversion {
    /// `base = raw × factor`
    Linear { factor: f64 },
    /// `base = (raw − origin) × factor + offset`
    ///
    /// Celsius: origin 0, factor 1, offset 273.15.
    /// Fahrenheit: origin 32, factor 5/9, offset 273.15.
    Affine { factor: f64, offset: f64, origin: f64 },
}

impl Conversion {
    /// Convert a raw value into the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value * factor,
            Conversion::Affine { factor, offset, origin } => (value - origin) * factor + offset,
        }
    }

    /// Convert a base-unit value back into this unit.
    ///
    /// This is the algebraic inverse of [`Conversion::to_base`], not the
    /// forward rule applied again.
    pub fn from_base(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { factor } => value / factor,
            Conversion::Affine { factor, offset, origin } => (value - offset) / factor + origin,
        }
    }

    /// True for a linear factor of exactly 1
    pub fn is_identity(&self) -> bool {
        matches!(*self, Conversion::Linear { factor } if factor == 1.0)
    }
}

/// A registered unit symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Canonical symbol (e.g., "m/s", "kg/m³")
    pub symbol: &'static str,
    /// Descriptive name (e.g., "Meters per second")
    pub name: &'static str,
    /// Kind this unit measures
    pub kind: PhysicalQuantityKind,
    /// Conversion to the kind's base unit
    pub conversion: Conversion,
    /// Accepted ASCII spellings of the symbol (e.g., "m2" for "m²")
    pub aliases: &'static [&'static str],
}

impl UnitDefinition {
    const fn linear(symbol: &'static str, name: &'static str, kind: PhysicalQuantityKind, factor: f64) -> Self {
        Self {
            symbol,
            name,
            kind,
            conversion: Conversion::Linear { factor },
            aliases: &[],
        }
    }

    const fn affine(
        symbol: &'static str,
        name: &'static str,
        factor: f64,
        offset: f64,
        origin: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            kind: PhysicalQuantityKind::Temperature,
            conversion: Conversion::Affine { factor, offset, origin },
            aliases: &[],
        }
    }

    const fn aka(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Whether `symbol` names this unit
    pub fn matches(&self, symbol: &str) -> bool {
        self.symbol == symbol || self.aliases.contains(&symbol)
    }

    /// Whether this is its kind's base unit
    pub fn is_base(&self) -> bool {
        std::ptr::eq(self, self.kind.base_unit())
    }
}

// ============================================================================
// Registry Tables
// ============================================================================

use PhysicalQuantityKind as K;

const ZERO_CELSIUS_K: f64 = 273.15;

static LENGTH_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("m", "Meters", K::Length, 1.0),
    UnitDefinition::linear("cm", "Centimeters", K::Length, 0.01),
    UnitDefinition::linear("mm", "Millimeters", K::Length, 0.001),
    UnitDefinition::linear("μm", "Micrometers", K::Length, 1e-6).aka(&["um"]),
    UnitDefinition::linear("nm", "Nanometers", K::Length, 1e-9),
    UnitDefinition::linear("km", "Kilometers", K::Length, 1000.0),
    UnitDefinition::linear("in", "Inches", K::Length, 0.0254),
    UnitDefinition::linear("ft", "Feet", K::Length, 0.3048),
    UnitDefinition::linear("yd", "Yards", K::Length, 0.9144),
    UnitDefinition::linear("mi", "Miles", K::Length, 1609.34),
];

static MASS_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("kg", "Kilograms", K::Mass, 1.0),
    UnitDefinition::linear("g", "Grams", K::Mass, 0.001),
    UnitDefinition::linear("mg", "Milligrams", K::Mass, 1e-6),
    UnitDefinition::linear("lb", "Pounds", K::Mass, 0.453592),
    UnitDefinition::linear("oz", "Ounces", K::Mass, 0.0283495),
    UnitDefinition::linear("ton", "Metric tons", K::Mass, 1000.0).aka(&["t"]),
    UnitDefinition::linear("ton_us", "US tons", K::Mass, 907.185),
];

static FORCE_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("N", "Newtons", K::Force, 1.0),
    UnitDefinition::linear("kN", "Kilonewtons", K::Force, 1000.0),
    UnitDefinition::linear("mN", "Millinewtons", K::Force, 0.001),
    UnitDefinition::linear("lb", "Pounds-force", K::Force, 4.44822),
    UnitDefinition::linear("lbf", "Pounds-force", K::Force, 4.44822),
    UnitDefinition::linear("oz", "Ounce-force", K::Force, 0.278014),
    UnitDefinition::linear("kgf", "Kilogram-force", K::Force, 9.80665),
    UnitDefinition::linear("dyn", "Dynes", K::Force, 1e-5),
];

static VELOCITY_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("m/s", "Meters per second", K::Velocity, 1.0),
    UnitDefinition::linear("km/s", "Kilometers per second", K::Velocity, 1000.0),
    UnitDefinition::linear("km/h", "Kilometers per hour", K::Velocity, 1.0 / 3.6),
    UnitDefinition::linear("mph", "Miles per hour", K::Velocity, 0.44704),
    UnitDefinition::linear("ft/s", "Feet per second", K::Velocity, 0.3048),
    UnitDefinition::linear("in/s", "Inches per second", K::Velocity, 0.0254),
    UnitDefinition::linear("cm/s", "Centimeters per second", K::Velocity, 0.01),
    UnitDefinition::linear("knots", "Knots", K::Velocity, 0.514444).aka(&["kn"]),
    UnitDefinition::linear("c", "Speed of light", K::Velocity, 299_792_458.0),
];

static TIME_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("s", "Seconds", K::Time, 1.0),
    UnitDefinition::linear("ms", "Milliseconds", K::Time, 0.001),
    UnitDefinition::linear("μs", "Microseconds", K::Time, 1e-6).aka(&["us"]),
    UnitDefinition::linear("ns", "Nanoseconds", K::Time, 1e-9),
    UnitDefinition::linear("min", "Minutes", K::Time, 60.0),
    UnitDefinition::linear("h", "Hours", K::Time, 3600.0),
];

static DENSITY_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("kg/m³", "Kilograms per cubic meter", K::Density, 1.0).aka(&["kg/m3", "kg/m^3"]),
    UnitDefinition::linear("g/cm³", "Grams per cubic centimeter", K::Density, 1000.0).aka(&["g/cm3", "g/cm^3"]),
    UnitDefinition::linear("g/mL", "Grams per milliliter", K::Density, 1000.0).aka(&["g/ml"]),
    UnitDefinition::linear("g/L", "Grams per liter", K::Density, 1.0).aka(&["g/l"]),
    UnitDefinition::linear("kg/L", "Kilograms per liter", K::Density, 1000.0).aka(&["kg/l"]),
    UnitDefinition::linear("lb/ft³", "Pounds per cubic foot", K::Density, 16.0185).aka(&["lb/ft3", "lb/ft^3"]),
    UnitDefinition::linear("lb/in³", "Pounds per cubic inch", K::Density, 27_679.9).aka(&["lb/in3", "lb/in^3"]),
];

static AREA_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("m²", "Square meters", K::Area, 1.0).aka(&["m2", "m^2"]),
    UnitDefinition::linear("cm²", "Square centimeters", K::Area, 1e-4).aka(&["cm2", "cm^2"]),
    UnitDefinition::linear("mm²", "Square millimeters", K::Area, 1e-6).aka(&["mm2", "mm^2"]),
    UnitDefinition::linear("km²", "Square kilometers", K::Area, 1e6).aka(&["km2", "km^2"]),
    UnitDefinition::linear("ft²", "Square feet", K::Area, 0.092903).aka(&["ft2", "ft^2"]),
    UnitDefinition::linear("in²", "Square inches", K::Area, 0.00064516).aka(&["in2", "in^2"]),
];

static VOLUME_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("m³", "Cubic meters", K::Volume, 1.0).aka(&["m3", "m^3"]),
    UnitDefinition::linear("L", "Liters", K::Volume, 0.001).aka(&["l"]),
    UnitDefinition::linear("mL", "Milliliters", K::Volume, 1e-6).aka(&["ml"]),
    UnitDefinition::linear("cm³", "Cubic centimeters", K::Volume, 1e-6).aka(&["cm3", "cm^3"]),
    UnitDefinition::linear("mm³", "Cubic millimeters", K::Volume, 1e-9).aka(&["mm3", "mm^3"]),
    UnitDefinition::linear("ft³", "Cubic feet", K::Volume, 0.0283168).aka(&["ft3", "ft^3"]),
    UnitDefinition::linear("in³", "Cubic inches", K::Volume, 1.63871e-5).aka(&["in3", "in^3"]),
    UnitDefinition::linear("gal", "US gallons", K::Volume, 0.00378541),
];

static ENERGY_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("J", "Joules", K::Energy, 1.0),
    UnitDefinition::linear("kJ", "Kilojoules", K::Energy, 1000.0),
    UnitDefinition::linear("cal", "Calories", K::Energy, 4.184),
    UnitDefinition::linear("kcal", "Kilocalories", K::Energy, 4184.0),
    UnitDefinition::linear("BTU", "British thermal units", K::Energy, 1055.06),
    UnitDefinition::linear("Wh", "Watt-hours", K::Energy, 3600.0),
];

static PRESSURE_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("Pa", "Pascals", K::Pressure, 1.0),
    UnitDefinition::linear("kPa", "Kilopascals", K::Pressure, 1000.0),
    UnitDefinition::linear("MPa", "Megapascals", K::Pressure, 1e6),
    UnitDefinition::linear("bar", "Bar", K::Pressure, 100_000.0),
    UnitDefinition::linear("atm", "Atmospheres", K::Pressure, 101_325.0),
    UnitDefinition::linear("psi", "Pounds per square inch", K::Pressure, 6894.76),
    UnitDefinition::linear("torr", "Torr", K::Pressure, 133.322),
];

static ANGLE_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("rad", "Radians", K::Angle, 1.0),
    UnitDefinition::linear("deg", "Degrees", K::Angle, PI / 180.0).aka(&["°"]),
];

static TEMPERATURE_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("K", "Kelvin", K::Temperature, 1.0),
    UnitDefinition::affine("C", "Celsius", 1.0, ZERO_CELSIUS_K, 0.0).aka(&["°C"]),
    UnitDefinition::affine("F", "Fahrenheit", 5.0 / 9.0, ZERO_CELSIUS_K, 32.0).aka(&["°F"]),
];

static TEMPERATURE_INTERVAL_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("K", "Kelvin", K::TemperatureInterval, 1.0),
    UnitDefinition::linear("C", "Celsius degrees", K::TemperatureInterval, 1.0).aka(&["°C"]),
    UnitDefinition::linear("F", "Fahrenheit degrees", K::TemperatureInterval, 5.0 / 9.0).aka(&["°F"]),
];

static ACCELERATION_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("m/s²", "Meters per second squared", K::Acceleration, 1.0).aka(&["m/s2", "m/s^2"]),
    UnitDefinition::linear("cm/s²", "Centimeters per second squared", K::Acceleration, 0.01).aka(&["cm/s2", "cm/s^2"]),
    UnitDefinition::linear("ft/s²", "Feet per second squared", K::Acceleration, 0.3048).aka(&["ft/s2", "ft/s^2"]),
    UnitDefinition::linear("in/s²", "Inches per second squared", K::Acceleration, 0.0254).aka(&["in/s2", "in/s^2"]),
    UnitDefinition::linear("g", "Standard gravity", K::Acceleration, 9.80665),
    UnitDefinition::linear("km/h²", "Kilometers per hour squared", K::Acceleration, 1000.0 / 12_960_000.0)
        .aka(&["km/h2", "km/h^2"]),
];

static FREQUENCY_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("Hz", "Hertz", K::Frequency, 1.0),
    UnitDefinition::linear("kHz", "Kilohertz", K::Frequency, 1e3),
    UnitDefinition::linear("MHz", "Megahertz", K::Frequency, 1e6),
    UnitDefinition::linear("GHz", "Gigahertz", K::Frequency, 1e9),
    UnitDefinition::linear("THz", "Terahertz", K::Frequency, 1e12),
];

static SPECIFIC_HEAT_UNITS: &[UnitDefinition] = &[
    UnitDefinition::linear("J/(kg·K)", "Joules per kilogram-kelvin", K::SpecificHeat, 1.0).aka(&["J/(kg*K)", "J/kgK"]),
    UnitDefinition::linear("kJ/(kg·K)", "Kilojoules per kilogram-kelvin", K::SpecificHeat, 1000.0)
        .aka(&["kJ/(kg*K)", "kJ/kgK"]),
    UnitDefinition::linear("cal/(g·°C)", "Calories per gram-degree", K::SpecificHeat, 4184.0).aka(&["cal/(g*C)", "cal/gC"]),
];

static DIMENSIONLESS_UNITS: &[UnitDefinition] = &[UnitDefinition::linear("", "Unitless", K::Dimensionless, 1.0).aka(&["-"])];

// ============================================================================
// Quantity Converter
// ============================================================================

/// Look up a unit symbol (or alias) registered under `kind`.
pub fn find_unit(symbol: &str, kind: PhysicalQuantityKind) -> EqResult<&'static UnitDefinition> {
    let symbol = symbol.trim();
    kind.units()
        .iter()
        .find(|unit| unit.matches(symbol))
        .ok_or_else(|| SolveError::unknown_unit(symbol, kind.display_name()))
}

/// Convert `value` expressed in `unit` to the base unit of `kind`.
pub fn to_base(value: f64, unit: &str, kind: PhysicalQuantityKind) -> EqResult<f64> {
    Ok(find_unit(unit, kind)?.conversion.to_base(value))
}

/// Convert a base-unit `value` of `kind` into `unit`.
pub fn from_base(value: f64, unit: &str, kind: PhysicalQuantityKind) -> EqResult<f64> {
    Ok(find_unit(unit, kind)?.conversion.from_base(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_unit() {
        let samples = [-273.0, -1.5, 0.0, 1e-7, 0.5, 1.0, 42.0, 9_876.5, 3.2e9];
        for kind in PhysicalQuantityKind::ALL {
            for unit in kind.units() {
                for &v in &samples {
                    let base = to_base(v, unit.symbol, kind).unwrap();
                    let back = from_base(base, unit.symbol, kind).unwrap();
                    let tol = 1e-9 * v.abs().max(1.0);
                    assert!(
                        (back - v).abs() < tol,
                        "{:?} '{}' round trip of {} gave {}",
                        kind,
                        unit.symbol,
                        v,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_exactly_one_base_unit_per_kind() {
        for kind in PhysicalQuantityKind::ALL {
            let bases: Vec<_> = kind.units().iter().filter(|u| u.conversion.is_identity()).collect();
            assert!(!bases.is_empty(), "{:?} has no base unit", kind);
            assert!(kind.base_unit().conversion.is_identity());
            assert!(kind.base_unit().is_base());
            for unit in kind.units() {
                assert_eq!(unit.kind, kind, "unit '{}' filed under wrong kind", unit.symbol);
            }
        }
    }

    #[test]
    fn test_temperature_affine_rules() {
        let k = to_base(0.0, "C", K::Temperature).unwrap();
        assert!((k - 273.15).abs() < 1e-12);

        let k = to_base(32.0, "F", K::Temperature).unwrap();
        assert!((k - 273.15).abs() < 1e-9);

        let f = from_base(373.15, "F", K::Temperature).unwrap();
        assert!((f - 212.0).abs() < 1e-9);

        let c = from_base(0.0, "°C", K::Temperature).unwrap();
        assert!((c + 273.15).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_interval_is_linear() {
        // A 9 °F rise is a 5 K rise, with no offset
        let dk = to_base(9.0, "F", K::TemperatureInterval).unwrap();
        assert!((dk - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_symbol_resolved_per_kind() {
        let force = to_base(1.0, "lb", K::Force).unwrap();
        let mass = to_base(1.0, "lb", K::Mass).unwrap();
        assert!((force - 4.44822).abs() < 1e-12);
        assert!((mass - 0.453592).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = to_base(1.0, "furlong", K::Length).unwrap_err();
        assert_eq!(
            err,
            SolveError::UnknownUnit {
                unit: "furlong".to_string(),
                kind: "Length".to_string()
            }
        );
        // A valid symbol of another kind is still unknown here
        assert!(to_base(1.0, "N", K::Mass).is_err());
    }

    #[test]
    fn test_aliases() {
        assert_eq!(find_unit("m2", K::Area).unwrap().symbol, "m²");
        assert_eq!(find_unit(" kg/m3 ", K::Density).unwrap().symbol, "kg/m³");
        assert_eq!(find_unit("-", K::Dimensionless).unwrap().symbol, "");
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(PhysicalQuantityKind::from_str_flexible("velocity").unwrap(), K::Velocity);
        assert_eq!(
            PhysicalQuantityKind::from_str_flexible("Temperature Interval").unwrap(),
            K::TemperatureInterval
        );
        assert_eq!(
            PhysicalQuantityKind::from_str_flexible("specific-heat").unwrap(),
            K::SpecificHeat
        );
        assert!(PhysicalQuantityKind::from_str_flexible("luminosity").is_err());
    }

    #[test]
    fn test_angle_degrees() {
        let rad = to_base(180.0, "deg", K::Angle).unwrap();
        assert!((rad - PI).abs() < 1e-12);
    }
}
