use super::reflect_index;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Sampled Gaussian with radius `max(1, ceil(3σ))`, normalised to unit sum.
///
/// `σ == 0` yields the single tap `[1.0]`, i.e. no smoothing.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianFilter {
    pub fn new(sigma: f32) -> Self {
        if sigma <= 0.0 || !sigma.is_finite() {
            return Self {
                sigma: 0.0,
                taps: vec![1.0],
            };
        }
        let radius = ((3.0 * sigma).ceil() as usize).max(1);
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..=2 * radius)
            .map(|i| {
                let d = i as f32 - radius as f32;
                (-d * d / denom).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { sigma, taps }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve `src` with `filter` horizontally, then vertically, mirroring
/// samples beyond the border.
pub fn apply_separable(filter: &dyn SeparableFilter, src: &ImageF32) -> ImageF32 {
    let taps = filter.taps();
    if taps.len() <= 1 || src.w == 0 || src.h == 0 {
        let scale = taps.first().copied().unwrap_or(1.0);
        let mut out = src.clone();
        out.data.iter_mut().for_each(|v| *v *= scale);
        return out;
    }
    let radius = (taps.len() / 2) as isize;

    let mut tmp = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = tmp.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = reflect_index(x as isize + k as isize - radius, src.w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }

    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let rows: Vec<&[f32]> = (0..taps.len())
            .map(|k| tmp.row(reflect_index(y as isize + k as isize - radius, src.h)))
            .collect();
        let dst_row = out.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (row, &tap) in rows.iter().zip(taps) {
                acc += tap * row[x];
            }
            *dst_px = acc;
        }
    }
    out
}
