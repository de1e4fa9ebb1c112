//! # Unit Types
//!
//! Type-safe wrappers for the temperature scales used by the daily logger.
//! They are plain f64 newtypes so JSON stays clean (just numbers) while the
//! compiler keeps Fahrenheit and Celsius readings apart.
//!
//! ## Example
//!
//! ```rust
//! use primer_core::units::{Celsius, Fahrenheit};
//!
//! let boiling = Fahrenheit(212.0);
//! let c: Celsius = boiling.into();
//! assert!((c.0 - 100.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Offset between the two scales at the freezing point of water
const FREEZING_F: f64 = 32.0;

/// Fahrenheit degrees per Celsius degree
const F_PER_C: f64 = 1.8;

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - FREEZING_F) / F_PER_C)
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * F_PER_C + FREEZING_F)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Fahrenheit);
impl_arithmetic!(Celsius);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fahrenheit_to_celsius() {
        let c: Celsius = Fahrenheit(50.0).into();
        assert!((c.0 - 10.0).abs() < 1e-9);

        let freezing: Celsius = Fahrenheit(32.0).into();
        assert_eq!(freezing.0, 0.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let f: Fahrenheit = Celsius(-40.0).into();
        assert!((f.0 + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Fahrenheit(70.0);
        let b = Fahrenheit(10.0);
        assert_eq!((a + b).0, 80.0);
        assert_eq!((a - b).0, 60.0);
        assert_eq!((a * 2.0).0, 140.0);
        assert_eq!((a / 2.0).0, 35.0);
    }

    #[test]
    fn test_serialization() {
        let f = Fahrenheit(68.5);
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "68.5");
    }
}
