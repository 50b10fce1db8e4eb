//! Non-negative quantities that may exceed the range of `f64`.
//!
//! Combination counts grow as `size^length`, so a long password overflows
//! `f64` quickly (94 symbols overflow past roughly 156 characters). A
//! [`Magnitude`] keeps the plain `f64` approximation next to its base-10
//! logarithm; once the approximation turns infinite the logarithm still
//! supports division and scientific-notation display.

use std::fmt;

use crate::crack_time::{format_number, format_scientific};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnitude {
    value: f64,
    log10: f64,
}

impl Magnitude {
    pub const ZERO: Magnitude = Magnitude {
        value: 0.0,
        log10: f64::NEG_INFINITY,
    };

    pub const ONE: Magnitude = Magnitude {
        value: 1.0,
        log10: 0.0,
    };

    /// `base^exponent`. `0^0` is treated as zero: an empty alphabet has no
    /// combinations to try.
    pub fn power(base: u32, exponent: usize) -> Self {
        if base == 0 {
            return Self::ZERO;
        }
        if exponent == 0 {
            return Self::ONE;
        }
        let base = f64::from(base);
        let exponent = exponent as f64;
        Self {
            value: base.powf(exponent),
            log10: base.log10() * exponent,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Whether the plain `f64` approximation is still meaningful.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// The value as `f64`; infinite once it leaves the `f64` range.
    pub fn to_f64(&self) -> f64 {
        self.value
    }

    pub fn log10(&self) -> f64 {
        self.log10
    }

    /// Divides by a positive, finite divisor.
    pub fn divide(self, divisor: f64) -> Self {
        debug_assert!(divisor > 0.0 && divisor.is_finite());
        if self.is_zero() {
            return Self::ZERO;
        }
        Self {
            value: self.value / divisor,
            log10: self.log10 - divisor.log10(),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            f.write_str(&format_number(self.value))
        } else {
            f.write_str(&format_scientific(self.log10))
        }
    }
}

/// Serializes as a plain number while it fits in `f64`, otherwise as the
/// scientific-notation string, e.g. `"1.78e+789"`.
#[cfg(feature = "serde")]
impl serde::Serialize for Magnitude {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.value)
        } else {
            serializer.collect_str(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_exact_for_small_values() {
        assert_eq!(Magnitude::power(26, 8).to_f64(), 208_827_064_576.0);
        assert_eq!(Magnitude::power(10, 4).to_f64(), 10_000.0);
        assert_eq!(Magnitude::power(94, 0), Magnitude::ONE);
    }

    #[test]
    fn test_power_zero_base() {
        assert!(Magnitude::power(0, 0).is_zero());
        assert!(Magnitude::power(0, 12).is_zero());
    }

    #[test]
    fn test_power_beyond_f64_keeps_log() {
        let huge = Magnitude::power(94, 400);
        assert!(!huge.is_finite());
        assert!((huge.log10() - 400.0 * 94f64.log10()).abs() < 1e-9);
        assert_eq!(huge.to_string(), "1.78e+789");
    }

    #[test]
    fn test_divide() {
        let m = Magnitude::power(10, 20).divide(1e10);
        assert_eq!(m.to_f64(), 1e10);
        assert!((m.log10() - 10.0).abs() < 1e-12);
        assert!(Magnitude::ZERO.divide(1e10).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Magnitude::power(10, 2).to_string(), "100");
        assert_eq!(Magnitude::power(26, 4).to_string(), "456,976");
        assert_eq!(Magnitude::power(10, 20).to_string(), "1.00e+20");
        assert_eq!(Magnitude::power(10, 400).to_string(), "1.00e+400");
        assert_eq!(Magnitude::ZERO.to_string(), "0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_never_emits_null() {
        assert_eq!(serde_json::to_value(Magnitude::ZERO).expect("json"), 0.0);
        assert_eq!(
            serde_json::to_value(Magnitude::power(26, 4)).expect("json"),
            456_976.0
        );
        assert_eq!(
            serde_json::to_value(Magnitude::power(94, 400)).expect("json"),
            "1.78e+789"
        );
    }
}
