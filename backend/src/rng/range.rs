//! Range mapping for integer and floating-point draws
//!
//! Maps tempered 32-bit words onto bounded ranges. Integer ranges use plain
//! modulo reduction, so bounds that do not divide 2^32 carry a small bias.
//! Floats are `word * 2^-32`, which covers `[0, 1)` with 32 bits of
//! resolution.

use super::Generator;
use crate::error::RngError;

/// Scale factor turning a 32-bit word into a float in `[0, 1)`
const WORD_TO_UNIT: f64 = 1.0 / 4_294_967_296.0;

/// Range requested for a draw
///
/// `Below(b)` means `[0, b)`. `Between(lo, hi)` means `[lo, hi)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds<T> {
    Unbounded,
    Below(T),
    Between(T, T),
}

impl<T: Copy> Bounds<T> {
    /// Build bounds from a positional argument list of length 0, 1 or 2
    ///
    /// # Errors
    /// Returns `InvalidArgumentCount` for more than two arguments.
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Bounds;
    ///
    /// assert_eq!(Bounds::from_args(&[5u32, 15]).unwrap(), Bounds::Between(5, 15));
    /// assert!(Bounds::from_args(&[1u32, 2, 3]).is_err());
    /// ```
    pub fn from_args(args: &[T]) -> Result<Self, RngError> {
        match *args {
            [] => Ok(Bounds::Unbounded),
            [upper] => Ok(Bounds::Below(upper)),
            [lower, upper] => Ok(Bounds::Between(lower, upper)),
            _ => Err(RngError::InvalidArgumentCount { count: args.len() }),
        }
    }
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Bounds::Unbounded
    }
}

impl Generator {
    /// Generate a bounded integer
    ///
    /// # Errors
    /// - `ZeroBound` for `Below(0)`
    /// - `InvalidRange` for `Between(lo, hi)` with `hi < lo`
    ///
    /// Validation happens before a word is drawn.
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::{Bounds, Generator};
    ///
    /// let mut rng = Generator::with_seed(12345);
    /// let die = rng.next_int(Bounds::Between(1, 7)).unwrap();
    /// assert!((1..7).contains(&die));
    /// ```
    pub fn next_int(&mut self, bounds: Bounds<u32>) -> Result<u32, RngError> {
        match bounds {
            Bounds::Unbounded => Ok(self.next_uint32()),
            Bounds::Below(0) => Err(RngError::ZeroBound),
            Bounds::Below(upper) => Ok(self.next_uint32() % upper),
            Bounds::Between(lower, upper) if upper < lower => Err(RngError::InvalidRange {
                min: f64::from(lower),
                max: f64::from(upper),
            }),
            Bounds::Between(lower, upper) => {
                let value = self.next_uint32();
                // Empty span: still consume a word to keep stream positions aligned
                if upper == lower {
                    return Ok(lower);
                }
                Ok(lower + value % (upper - lower))
            }
        }
    }

    /// Generate a bounded float
    ///
    /// # Errors
    /// - `InvalidBoundType` if a bound is NaN
    /// - `InvalidRange` for `Between(lo, hi)` with `hi < lo`
    pub fn next_float(&mut self, bounds: Bounds<f64>) -> Result<f64, RngError> {
        match bounds {
            Bounds::Unbounded => Ok(self.next_unit()),
            Bounds::Below(upper) => {
                check_not_nan(upper)?;
                Ok(self.next_unit() * upper)
            }
            Bounds::Between(lower, upper) => {
                check_not_nan(lower)?;
                check_not_nan(upper)?;
                if upper < lower {
                    return Err(RngError::InvalidRange {
                        min: lower,
                        max: upper,
                    });
                }
                Ok(lower + self.next_unit() * (upper - lower))
            }
        }
    }

    /// Uniform integer in `[0, upper)`
    pub fn next_below(&mut self, upper: u32) -> Result<u32, RngError> {
        self.next_int(Bounds::Below(upper))
    }

    /// Uniform integer in `[lower, upper)`
    pub fn next_between(&mut self, lower: u32, upper: u32) -> Result<u32, RngError> {
        self.next_int(Bounds::Between(lower, upper))
    }

    /// Uniform float in `[0.0, 1.0)`
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Generator;
    ///
    /// let mut rng = Generator::with_seed(12345);
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        self.next_unit()
    }

    /// Float in `[0, upper)` (or `(upper, 0]` for negative `upper`)
    pub fn next_f64_below(&mut self, upper: f64) -> Result<f64, RngError> {
        self.next_float(Bounds::Below(upper))
    }

    /// Float in `[lower, upper)`
    pub fn next_f64_between(&mut self, lower: f64, upper: f64) -> Result<f64, RngError> {
        self.next_float(Bounds::Between(lower, upper))
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_uint32()) * WORD_TO_UNIT
    }
}

fn check_not_nan(bound: f64) -> Result<(), RngError> {
    if bound.is_nan() {
        return Err(RngError::InvalidBoundType(
            "Range must be a number, got NaN".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_counts() {
        assert_eq!(Bounds::<u32>::from_args(&[]).unwrap(), Bounds::Unbounded);
        assert_eq!(Bounds::from_args(&[9u32]).unwrap(), Bounds::Below(9));
        assert_eq!(
            Bounds::from_args(&[1.0, 2.0, 3.0]),
            Err(RngError::InvalidArgumentCount { count: 3 })
        );
    }

    #[test]
    fn test_unbounded_int_is_raw_word() {
        let mut a = Generator::with_seed(7);
        let mut b = Generator::with_seed(7);
        assert_eq!(a.next_int(Bounds::Unbounded).unwrap(), b.next_uint32());
    }

    #[test]
    fn test_below_is_raw_word_modulo_bound() {
        let mut a = Generator::with_seed(7);
        let mut b = Generator::with_seed(7);
        for _ in 0..100 {
            assert_eq!(a.next_below(1000).unwrap(), b.next_uint32() % 1000);
        }
    }

    #[test]
    fn test_zero_bound_rejected_without_drawing() {
        let mut rng = Generator::with_seed(7);
        assert_eq!(rng.next_below(0), Err(RngError::ZeroBound));
        assert_eq!(rng.cursor(), 624, "rejected call must not consume a word");
    }

    #[test]
    fn test_float_is_word_scaled_by_two_pow_minus_32() {
        let mut a = Generator::with_seed(5489);
        let expected = 3499211612.0 / 4294967296.0;
        assert_eq!(a.next_f64(), expected);
    }

    #[test]
    fn test_nan_bound_rejected() {
        let mut rng = Generator::with_seed(7);
        assert!(matches!(
            rng.next_f64_below(f64::NAN),
            Err(RngError::InvalidBoundType(_))
        ));
        assert!(matches!(
            rng.next_f64_between(0.0, f64::NAN),
            Err(RngError::InvalidBoundType(_))
        ));
    }

    #[test]
    fn test_negative_single_float_bound_scales() {
        let mut rng = Generator::with_seed(7);
        for _ in 0..100 {
            let value = rng.next_f64_below(-4.0).unwrap();
            assert!(value <= 0.0 && value > -4.0);
        }
    }
}
