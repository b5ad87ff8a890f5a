//! Local depth prediction from nearby known samples and the color guide.
//!
//! Two interchangeable strategies implement [`DepthPredictor`]:
//!
//! - [`BilateralPredictor`]: Gaussian-weighted average over spatial offset
//!   and per-channel color difference.
//! - [`RegressionPredictor`]: ridge regression of depth against standardised
//!   color within the window, evaluated at the query pixel's color.
//!
//! Both look at the same clipped square [`Window`] and decline to predict
//! (return `None`) when it holds fewer than [`MIN_KNOWN_SAMPLES`] known depths.
//! The propagation engine treats `None` as "retry later".

pub mod bilateral;
pub mod regression;

pub use bilateral::BilateralPredictor;
pub use regression::{RegressionParams, RegressionPredictor};

use crate::error::InpaintError;
use crate::image::{ImageF32, ImageRgb8};

/// Minimum number of known depths a window must hold before predicting.
pub const MIN_KNOWN_SAMPLES: usize = 4;

/// Strategy estimating the depth of an unknown pixel.
pub trait DepthPredictor {
    /// Predict the depth at (x, y), or `None` when the window does not hold
    /// enough known context yet.
    fn predict(&self, depth: &ImageF32, color: &ImageRgb8, x: usize, y: usize) -> Option<f32>;

    /// Short label used in logs and reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Square neighbourhood of a query pixel, clipped to the image bounds.
/// Bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Window {
    pub fn around(x: usize, y: usize, radius: usize, w: usize, h: usize) -> Self {
        Self {
            x0: x.saturating_sub(radius),
            y0: y.saturating_sub(radius),
            x1: (x + radius).min(w.saturating_sub(1)),
            y1: (y + radius).min(h.saturating_sub(1)),
        }
    }

    /// Pixel positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.y0..=self.y1).flat_map(move |n| (self.x0..=self.x1).map(move |m| (m, n)))
    }

    /// Positions whose depth is known, paired with that depth.
    pub fn known<'a>(&'a self, depth: &'a ImageF32) -> impl Iterator<Item = (usize, usize, f32)> + 'a {
        self.positions().filter_map(move |(m, n)| {
            let d = depth.get(m, n);
            (d != 0.0).then_some((m, n, d))
        })
    }
}

/// Check that a window size is odd and at least 3; returns its radius.
pub fn window_radius(window_size: usize) -> Result<usize, InpaintError> {
    if window_size < 3 || window_size % 2 == 0 {
        return Err(InpaintError::InvalidWindowSize { size: window_size });
    }
    Ok(window_size / 2)
}

pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<f32, InpaintError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InpaintError::InvalidParameter {
            name,
            value,
            reason: "must be positive and finite",
        })
    }
}

pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<f32, InpaintError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InpaintError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative and finite",
        })
    }
}
