//! Axis Scale Module
//! Unit conversion table and the power-of-ten axis auto-scale.

/// Display units understood by the chart axes.
///
/// `factor()` is the divisor relative to the cgs base value. The table is
/// static; entries not exercised by the shipped scenario are kept for
/// completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Thousands of kilometers (1e8 cm).
    ThousandKilometer,
    /// Kilometers (1e5 cm).
    Kilometer,
    /// Meters (100 cm).
    Meter,
    /// Raw cgs value, divisor 1.
    Sgs,
    Milligal,
    Eotvos,
}

impl Unit {
    /// Divisor that converts a cgs value into this unit for display.
    pub fn factor(self) -> f64 {
        match self {
            Unit::ThousandKilometer => 1e8,
            Unit::Kilometer => 1e5,
            Unit::Meter => 100.0,
            Unit::Sgs => 1.0,
            Unit::Milligal => 1e3,
            Unit::Eotvos => 1e9,
        }
    }
}

/// Exponent of the power-of-ten factor that makes `maximum` readable.
pub fn rescale_exponent(maximum: f64) -> i32 {
    2 - maximum.log10().round() as i32
}

/// Power-of-ten factor 10^(2 - round(log10(maximum))).
///
/// Multiplying the axis maximum by this factor lands it in a two-digit-ish
/// display range. Assumes a positive finite maximum; callers validate.
pub fn rescale(maximum: f64) -> f64 {
    10f64.powi(rescale_exponent(maximum))
}
