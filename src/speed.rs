//! Propagation priorities derived from the color guide's edge energy.
//!
//! The color image is smoothed with a Gaussian (σ = blur), differentiated with
//! Sobel along x and y per channel, and the squared derivatives are summed
//! over both axes and all three channels. A pixel discovered during
//! propagation is queued with priority `-1 / (1 + energy)`, which lies in
//! `(-1, 0]`: close to `0` on strong color edges, close to `-1` in flat
//! regions. The frontier expands the highest priority first, so edges are
//! crossed early and flat interiors wait for more context.
use crate::filters::{apply_separable, sobel_gradients, GaussianFilter, Gradients};
use crate::image::{ImageF32, ImageRgb8, ImageView};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only per-pixel gradient energy of the color guide.
#[derive(Clone, Debug)]
pub struct SpeedField {
    energy: ImageF32,
}

impl SpeedField {
    /// Compute the field once for a whole run.
    pub fn from_color(color: &ImageRgb8, blur_sigma: f32) -> Self {
        let filter = GaussianFilter::new(blur_sigma);
        let (w, h) = color.dims();
        let channel_gradients = |c: usize| -> Gradients {
            let plane = color.channel_f32(c);
            let smoothed = apply_separable(&filter, &plane);
            sobel_gradients(&smoothed)
        };

        #[cfg(feature = "parallel")]
        let gradients: Vec<Gradients> = (0..ImageRgb8::CHANNELS)
            .into_par_iter()
            .map(channel_gradients)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let gradients: Vec<Gradients> = (0..ImageRgb8::CHANNELS).map(channel_gradients).collect();

        let mut energy = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let e = gradients.iter().map(|g| g.energy(x, y)).sum();
                energy.set(x, y, e);
            }
        }
        Self { energy }
    }

    /// Summed squared color derivatives at (x, y).
    #[inline]
    pub fn energy(&self, x: usize, y: usize) -> f32 {
        self.energy.get(x, y)
    }

    /// Priority assigned to a pixel when it is filled.
    #[inline]
    pub fn priority(&self, x: usize, y: usize) -> f32 {
        -1.0 / (1.0 + self.energy(x, y))
    }

    pub fn energy_image(&self) -> &ImageF32 {
        &self.energy
    }
}
