//! Sampling helpers built on bounded draws
//!
//! Random strings, weighted index selection and shuffling. Each helper draws
//! from the generator in a fixed order, so results are reproducible for a
//! given seed.

use crate::error::RngError;
use crate::rng::Generator;

/// Charset used by [`Generator::rand_string`] when none is given
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

impl Generator {
    /// Random string of `len` characters drawn from `charset`
    ///
    /// # Errors
    /// Returns `EmptyCharset` if `charset` has no characters.
    ///
    /// # Example
    /// ```
    /// use mtrand_core_rs::Generator;
    ///
    /// let mut rng = Generator::with_seed(12345);
    /// let token = rng.rand_string(16, None).unwrap();
    /// assert_eq!(token.len(), 16);
    /// assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn rand_string(&mut self, len: usize, charset: Option<&str>) -> Result<String, RngError> {
        let chars: Vec<char> = charset.unwrap_or(DEFAULT_CHARSET).chars().collect();
        if chars.is_empty() {
            return Err(RngError::EmptyCharset);
        }
        let bound = u32::try_from(chars.len()).map_err(|_| {
            RngError::InvalidBoundType(format!("charset of {} characters is too large", chars.len()))
        })?;

        let mut out = String::with_capacity(len);
        for _ in 0..len {
            let index = self.next_below(bound)? as usize;
            out.push(chars[index]);
        }
        Ok(out)
    }

    /// Pick an index with probability proportional to its weight
    ///
    /// Returns `Ok(None)` for an empty slice. All-zero weights are treated as
    /// uniform.
    ///
    /// # Errors
    /// Returns `NegativeWeight` if any weight is below zero, and
    /// `InvalidBoundType` if any weight is NaN or infinite, or if the weights
    /// sum past `f64::MAX`. Nothing is drawn on error.
    pub fn select_random_index(&mut self, weights: &[f64]) -> Result<Option<usize>, RngError> {
        if weights.is_empty() {
            return Ok(None);
        }

        for (index, &weight) in weights.iter().enumerate() {
            if weight.is_nan() {
                return Err(RngError::InvalidBoundType(format!("weight at index {} is NaN", index)));
            }
            if weight < 0.0 {
                return Err(RngError::NegativeWeight { index, weight });
            }
            if weight.is_infinite() {
                return Err(RngError::InvalidBoundType(format!(
                    "weight at index {} is infinite",
                    index
                )));
            }
        }

        let total: f64 = weights.iter().sum();
        if !total.is_finite() {
            return Err(RngError::InvalidBoundType(
                "sum of weights overflows f64".to_string(),
            ));
        }
        let uniform;
        let (weights, total) = if total == 0.0 {
            uniform = vec![1.0 / weights.len() as f64; weights.len()];
            (uniform.as_slice(), 1.0)
        } else {
            (weights, total)
        };

        let target = self.next_f64_below(total)?;
        let mut accum = 0.0;
        for (index, &weight) in weights.iter().enumerate() {
            if target >= accum && target < accum + weight {
                return Ok(Some(index));
            }
            accum += weight;
        }

        // Rounding in the running sum can leave `target` past the last interval
        Ok(Some(last_positive_index(weights)))
    }

    /// Shuffled copy of `items`
    ///
    /// Swaps each position with a uniformly chosen position in the whole
    /// slice, one draw per item. The draw order is part of the stream
    /// contract: a given seed always yields the same permutation.
    ///
    /// # Errors
    /// Returns `InvalidBoundType` if `items` holds more than `u32::MAX`
    /// elements, since one draw cannot address every position.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>, RngError> {
        let len = items.len();
        if len == 0 {
            return Ok(Vec::new());
        }
        let bound = shuffle_bound(len)?;
        let mut out = items.to_vec();
        for i in 0..len {
            let j = (self.next_uint32() % bound) as usize;
            out.swap(i, j);
        }
        Ok(out)
    }
}

fn shuffle_bound(len: usize) -> Result<u32, RngError> {
    u32::try_from(len).map_err(|_| {
        RngError::InvalidBoundType(format!("cannot shuffle {} items, limit is {}", len, u32::MAX))
    })
}

fn last_positive_index(weights: &[f64]) -> usize {
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}
