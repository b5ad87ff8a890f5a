//! Precomputed Gaussian weights over integer differences.
//!
//! One cache covers spatial pixel offsets inside the prediction window, a
//! second covers signed per-channel color differences (`-255..=255`).

/// Lookup table of `exp(-d² / (2σ²))` for `d` in `[-range, range]`.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightCache {
    sigma: f32,
    range: usize,
    table: Vec<f32>,
}

impl WeightCache {
    /// Build the table. `sigma` must be positive and finite; callers validate
    /// it before construction.
    pub fn new(sigma: f32, range: usize) -> Self {
        let denom = 2.0 * sigma * sigma;
        let table = (0..=2 * range)
            .map(|i| {
                let d = i as f32 - range as f32;
                (-d * d / denom).exp()
            })
            .collect();
        Self {
            sigma,
            range,
            table,
        }
    }

    /// Weight for an integer difference. `|d|` must not exceed [`Self::range`].
    #[inline]
    pub fn weight(&self, d: i32) -> f32 {
        debug_assert!(
            d.unsigned_abs() as usize <= self.range,
            "weight cache queried outside its range: {d}"
        );
        self.table[(d + self.range as i32) as usize]
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn range(&self) -> usize {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_difference_has_unit_weight() {
        let cache = WeightCache::new(3.0, 7);
        assert_eq!(cache.weight(0), 1.0);
    }

    #[test]
    fn weights_strictly_decrease_with_distance() {
        let cache = WeightCache::new(2.0, 6);
        for d in 1..=6 {
            assert!(cache.weight(d) < cache.weight(d - 1));
            assert_eq!(cache.weight(d), cache.weight(-d));
        }
    }

    #[test]
    fn matches_closed_form() {
        let sigma = 12.5f32;
        let cache = WeightCache::new(sigma, 255);
        for d in [-255, -40, -1, 3, 100, 255] {
            let expected = (-(d as f32).powi(2) / (2.0 * sigma * sigma)).exp();
            assert!((cache.weight(d) - expected).abs() < 1e-7);
        }
    }

    #[test]
    fn zero_range_holds_single_entry() {
        let cache = WeightCache::new(1.0, 0);
        assert_eq!(cache.range(), 0);
        assert_eq!(cache.weight(0), 1.0);
    }
}
