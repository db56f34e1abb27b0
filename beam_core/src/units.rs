//! # Unit Types
//!
//! Thin newtype wrappers for the SI units a beam case is expressed in. They
//! serialize as bare numbers and know how to print their own unit suffix.
//!
//! Formatting follows the formatter's precision: without one the value is
//! printed in its shortest round-trip form (`6.0`, `2.5`, `1e+16`,
//! `1.5e-05`), with one it is rounded for display (`{:.2}` gives `4.83`).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{KiloNewtons, Meters};
//!
//! let span = Meters(6.0);
//! assert_eq!(format!("{span}"), "6.0 m");
//!
//! let reaction = KiloNewtons(29.0 / 6.0);
//! assert_eq!(format!("{reaction:.2}"), "4.83 kN");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

/// Shortest round-trip text for `value`.
///
/// Scientific notation kicks in below 1e-4 and from 1e16 up; the exponent is
/// signed and at least two digits wide (`1e+16`, `2.5e-07`).
pub fn shortest_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Write `value` honouring the formatter's precision, then the unit suffix.
fn write_quantity(f: &mut fmt::Formatter<'_>, value: f64, suffix: &str) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$} {suffix}"),
        None => write!(f, "{} {suffix}", shortest_repr(value)),
    }
}

macro_rules! impl_quantity {
    ($type:ty, $suffix:expr) => {
        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_quantity(f, self.0, $suffix)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_quantity!(Meters, "m");
impl_quantity!(KiloNewtons, "kN");
impl_quantity!(KiloNewtonMeters, "kNm");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_precision_keeps_decimal_point() {
        assert_eq!(Meters(6.0).to_string(), "6.0 m");
        assert_eq!(KiloNewtons(2.5).to_string(), "2.5 kN");
        assert_eq!(Meters(1e15).to_string(), "1000000000000000.0 m");
        assert_eq!(Meters(0.0001).to_string(), "0.0001 m");
    }

    #[test]
    fn test_display_exponent_is_signed_and_padded() {
        assert_eq!(Meters(1e16).to_string(), "1e+16 m");
        assert_eq!(Meters(1.5e-5).to_string(), "1.5e-05 m");
        assert_eq!(KiloNewtons(-2.5e-7).to_string(), "-2.5e-07 kN");
        assert_eq!(KiloNewtonMeters(3e120).to_string(), "3e+120 kNm");
    }

    #[test]
    fn test_non_finite_text() {
        assert_eq!(shortest_repr(f64::NAN), "nan");
        assert_eq!(shortest_repr(f64::INFINITY), "inf");
        assert_eq!(shortest_repr(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_display_with_precision_rounds() {
        assert_eq!(format!("{:.2}", KiloNewtons(13.0 / 6.0)), "2.17 kN");
        assert_eq!(format!("{:.2}", KiloNewtonMeters(6.5)), "6.50 kNm");
        assert_eq!(format!("{:.0}", Meters(2.6)), "3 m");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&KiloNewtons(4.5)).unwrap();
        assert_eq!(json, "4.5");
        let roundtrip: KiloNewtons = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, KiloNewtons(4.5));
        assert_eq!(roundtrip.value(), 4.5);
    }
}
