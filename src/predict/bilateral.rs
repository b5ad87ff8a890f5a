use super::{require_positive, window_radius, DepthPredictor, Window, MIN_KNOWN_SAMPLES};
use crate::error::InpaintError;
use crate::gradient::depth_gradient;
use crate::image::{ImageF32, ImageRgb8};
use crate::kernel::WeightCache;

/// Lower bound on a sample weight so that a window never sums to zero.
const MIN_WEIGHT: f32 = 1e-6;

/// Largest signed difference between two 8-bit channel values.
const COLOR_RANGE: usize = u8::MAX as usize;

/// Bilateral (spatial × color) weighted average of the known window samples.
#[derive(Clone, Debug)]
pub struct BilateralPredictor {
    radius: usize,
    spatial: WeightCache,
    color: WeightCache,
    gradient_correction: bool,
}

impl BilateralPredictor {
    /// Validate the window and decay scales and build both weight caches.
    pub fn new(
        window_size: usize,
        sigma_distance: f32,
        sigma_color: f32,
    ) -> Result<Self, InpaintError> {
        let radius = window_radius(window_size)?;
        let sigma_distance = require_positive("sigma_distance", sigma_distance)?;
        let sigma_color = require_positive("sigma_color", sigma_color)?;
        Ok(Self {
            radius,
            spatial: WeightCache::new(sigma_distance, radius),
            color: WeightCache::new(sigma_color, COLOR_RANGE),
            gradient_correction: false,
        })
    }

    /// Extrapolate each sample along its local depth gradient before
    /// averaging. Off by default.
    pub fn with_gradient_correction(mut self, enabled: bool) -> Self {
        self.gradient_correction = enabled;
        self
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    fn weight(&self, color: &ImageRgb8, (x, y): (usize, usize), (m, n): (usize, usize)) -> f32 {
        let c1 = color.get(x, y);
        let c2 = color.get(m, n);
        let spatial =
            self.spatial.weight(m as i32 - x as i32) * self.spatial.weight(n as i32 - y as i32);
        let chroma = c1
            .iter()
            .zip(c2.iter())
            .map(|(&a, &b)| self.color.weight(a as i32 - b as i32))
            .product::<f32>();
        (spatial * chroma).max(MIN_WEIGHT)
    }
}

impl DepthPredictor for BilateralPredictor {
    fn name(&self) -> &'static str {
        "bilateral"
    }

    fn predict(&self, depth: &ImageF32, color: &ImageRgb8, x: usize, y: usize) -> Option<f32> {
        let window = Window::around(x, y, self.radius, depth.w, depth.h);
        let mut sum_values = 0.0f32;
        let mut sum_weights = 0.0f32;
        let mut count = 0usize;

        for (m, n, d) in window.known(depth) {
            let weight = self.weight(color, (x, y), (m, n));
            let value = if self.gradient_correction {
                let (gx, gy) = depth_gradient(depth, m, n);
                d + gx * (x as f32 - m as f32) + gy * (y as f32 - n as f32)
            } else {
                d
            };
            sum_values += weight * value;
            sum_weights += weight;
            count += 1;
        }

        if count < MIN_KNOWN_SAMPLES {
            return None;
        }
        Some(sum_values / sum_weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn uniform_color(w: usize, h: usize) -> ImageRgb8 {
        let mut img = ImageRgb8::new(w, h);
        img.data.iter_mut().for_each(|px| *px = [90, 90, 90]);
        img
    }

    #[test]
    fn three_known_samples_are_not_enough() {
        let predictor = BilateralPredictor::new(3, 1.0, 10.0).unwrap();
        let mut depth = ImageF32::new(3, 3);
        depth.set(0, 0, 10.0);
        depth.set(1, 0, 10.0);
        depth.set(2, 0, 10.0);
        assert_eq!(predictor.predict(&depth, &uniform_color(3, 3), 1, 1), None);
    }

    #[test]
    fn four_known_samples_produce_weighted_mean() {
        let predictor = BilateralPredictor::new(3, 1.0, 10.0).unwrap();
        let mut depth = ImageF32::new(3, 3);
        // the four edge-adjacent neighbours share the same spatial weight
        depth.set(1, 0, 10.0);
        depth.set(0, 1, 20.0);
        depth.set(2, 1, 30.0);
        depth.set(1, 2, 40.0);
        let value = predictor
            .predict(&depth, &uniform_color(3, 3), 1, 1)
            .unwrap();
        assert!((value - 25.0).abs() < 1e-4);
    }

    #[test]
    fn color_similarity_dominates_across_an_edge() {
        let predictor = BilateralPredictor::new(5, 3.0, 5.0).unwrap();
        let mut color = ImageRgb8::new(5, 5);
        let mut depth = ImageF32::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                let left = x < 2;
                color.set(x, y, if left { [10, 10, 10] } else { [240, 240, 240] });
                if x != 2 || y != 2 {
                    depth.set(x, y, if left { 100.0 } else { 900.0 });
                }
            }
        }
        let value = predictor.predict(&depth, &color, 2, 2).unwrap();
        assert!((value - 900.0).abs() < 1.0, "got {value}");
    }

    #[test]
    fn gradient_correction_extrapolates_a_ramp() {
        let mut depth = ImageF32::new(6, 1);
        for x in 0..5 {
            depth.set(x, 0, 10.0 * (x + 1) as f32);
        }
        let color = uniform_color(6, 1);

        let corrected = BilateralPredictor::new(9, 2.0, 10.0)
            .unwrap()
            .with_gradient_correction(true);
        let value = corrected.predict(&depth, &color, 5, 0).unwrap();
        assert!((value - 60.0).abs() < 1e-3, "got {value}");

        let plain = corrected.with_gradient_correction(false);
        assert!(plain.predict(&depth, &color, 5, 0).unwrap() < 50.0);
    }

    #[test]
    fn rejects_even_window_and_bad_sigma() {
        assert_eq!(
            BilateralPredictor::new(4, 1.0, 1.0).unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            BilateralPredictor::new(5, 0.0, 1.0).unwrap_err().kind(),
            ErrorKind::Configuration
        );
    }
}
