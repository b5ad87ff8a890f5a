//! Ridge regression of depth against color within the prediction window.
//!
//! Suited to large holes where a weighted average over few samples blurs too
//! much. Inside the window every known sample contributes a feature row
//! `(r, g, b, c)`: the color channels are centred on the window mean and
//! scaled by the window standard deviation, `c` is a fixed constant feature.
//! Depth targets are centred on their mean. The 4×4 system
//! `(XᵀX + εI) β = Xᵀy` is solved by Cholesky (LU as fallback) and the
//! prediction is `β · x_query + mean(y)`.
//!
//! Accumulation runs in `f64`; only the final prediction is narrowed to `f32`.
use super::{
    require_non_negative, require_positive, window_radius, DepthPredictor, Window,
    MIN_KNOWN_SAMPLES,
};
use crate::error::InpaintError;
use crate::image::{ImageF32, ImageRgb8};
use log::warn;
use nalgebra::{Matrix4, Vector4};
use serde::{Deserialize, Serialize};

/// Floor for the per-channel standard deviation and the constant feature.
const STD_FLOOR: f64 = 1e-5;

/// Tunables of the regression predictor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionParams {
    /// Ridge regularisation added to the Gram diagonal; must be positive.
    pub epsilon: f32,
    /// Value of the constant feature column.
    pub constant: f32,
    /// Fraction of the window's depth range allowed beyond its min/max when
    /// `clamp_to_truncation` is set.
    pub truncation: f32,
    /// Clamp predictions to `[min - range·truncation, max + range·truncation]`.
    pub clamp_to_truncation: bool,
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self {
            epsilon: 1e-3,
            constant: 1.0,
            truncation: 0.5,
            clamp_to_truncation: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RegressionPredictor {
    radius: usize,
    epsilon: f64,
    constant: f64,
    truncation: f64,
    clamp_to_truncation: bool,
}

impl RegressionPredictor {
    pub fn new(window_size: usize, params: &RegressionParams) -> Result<Self, InpaintError> {
        let radius = window_radius(window_size)?;
        let epsilon = require_positive("epsilon", params.epsilon)?;
        let truncation = require_non_negative("truncation", params.truncation)?;
        if !params.constant.is_finite() {
            return Err(InpaintError::InvalidParameter {
                name: "constant",
                value: params.constant,
                reason: "must be finite",
            });
        }
        Ok(Self {
            radius,
            epsilon: epsilon as f64,
            constant: (params.constant as f64).max(STD_FLOOR),
            truncation: truncation as f64,
            clamp_to_truncation: params.clamp_to_truncation,
        })
    }

    pub fn radius(&self) -> usize {
        self.radius
    }
}

struct Sample {
    rgb: [f64; 3],
    depth: f64,
}

impl DepthPredictor for RegressionPredictor {
    fn name(&self) -> &'static str {
        "regression"
    }

    fn predict(&self, depth: &ImageF32, color: &ImageRgb8, x: usize, y: usize) -> Option<f32> {
        let window = Window::around(x, y, self.radius, depth.w, depth.h);
        let samples: Vec<Sample> = window
            .known(depth)
            .map(|(m, n, d)| {
                let px = color.get(m, n);
                Sample {
                    rgb: [px[0] as f64, px[1] as f64, px[2] as f64],
                    depth: d as f64,
                }
            })
            .collect();
        if samples.len() < MIN_KNOWN_SAMPLES {
            return None;
        }

        let count = samples.len() as f64;
        let mut mean_rgb = [0.0f64; 3];
        let mut mean_depth = 0.0f64;
        for s in &samples {
            for c in 0..3 {
                mean_rgb[c] += s.rgb[c];
            }
            mean_depth += s.depth;
        }
        mean_rgb.iter_mut().for_each(|m| *m /= count);
        mean_depth /= count;

        let mut std_rgb = [0.0f64; 3];
        for s in &samples {
            for c in 0..3 {
                let d = s.rgb[c] - mean_rgb[c];
                std_rgb[c] += d * d;
            }
        }
        std_rgb
            .iter_mut()
            .for_each(|v| *v = (*v / count).sqrt().max(STD_FLOOR));

        let features = |rgb: &[f64; 3]| -> Vector4<f64> {
            Vector4::new(
                (rgb[0] - mean_rgb[0]) / std_rgb[0],
                (rgb[1] - mean_rgb[1]) / std_rgb[1],
                (rgb[2] - mean_rgb[2]) / std_rgb[2],
                self.constant,
            )
        };

        let mut gram = Matrix4::<f64>::identity() * self.epsilon;
        let mut rhs = Vector4::<f64>::zeros();
        for s in &samples {
            let f = features(&s.rgb);
            gram += f * f.transpose();
            rhs += f * (s.depth - mean_depth);
        }

        let beta = solve_spd(&gram, &rhs)?;
        let query = color.get(x, y);
        let query = features(&[query[0] as f64, query[1] as f64, query[2] as f64]);
        let mut prediction = beta.dot(&query) + mean_depth;

        if self.clamp_to_truncation {
            let (lo, hi) = samples
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                    (lo.min(s.depth), hi.max(s.depth))
                });
            let slack = (hi - lo) * self.truncation;
            prediction = prediction.clamp(lo - slack, hi + slack);
        }

        if !prediction.is_finite() {
            warn!("regression predictor produced a non-finite value at ({x}, {y})");
            return None;
        }
        Some(prediction as f32)
    }
}

fn solve_spd(gram: &Matrix4<f64>, rhs: &Vector4<f64>) -> Option<Vector4<f64>> {
    if let Some(chol) = gram.cholesky() {
        return Some(chol.solve(rhs));
    }
    warn!("regression Gram matrix not positive definite, falling back to LU");
    gram.lu().solve(rhs)
}
