//! Parameter types configuring the inpainter.
//!
//! [`InpaintParams`] covers everything fixed at construction: the window, the
//! two bilateral decay scales, the blur applied before color edge detection
//! and the retry budget. [`RegressionParams`] is passed per run when the
//! regression predictor is selected.

pub use crate::predict::RegressionParams;
use serde::{Deserialize, Serialize};

/// Number of times a frontier pixel may be deferred before the run aborts.
pub const DEFAULT_MAX_DEFERRALS: u32 = 20;

/// Construction-time parameters shared by both predictors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InpaintParams {
    /// Spatial Gaussian scale (pixels) of the bilateral weight.
    pub sigma_distance: f32,
    /// Color Gaussian scale (8-bit channel units) of the bilateral weight.
    pub sigma_color: f32,
    /// Gaussian σ applied to the color guide before edge detection.
    /// `0` disables smoothing.
    pub blur_sigma: f32,
    /// Side of the square prediction window; odd and at least 3.
    pub window_size: usize,
    /// Retry budget per frontier pixel.
    pub max_deferrals: u32,
    /// Extrapolate bilateral samples along the local depth gradient.
    pub gradient_correction: bool,
}

impl Default for InpaintParams {
    fn default() -> Self {
        Self {
            sigma_distance: 2.0,
            sigma_color: 20.0,
            blur_sigma: 1.0,
            window_size: 5,
            max_deferrals: DEFAULT_MAX_DEFERRALS,
            gradient_correction: false,
        }
    }
}

/// Depth predictor selected for one run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictorChoice {
    Bilateral,
    Regression(RegressionParams),
}

impl Default for PredictorChoice {
    fn default() -> Self {
        Self::Bilateral
    }
}
