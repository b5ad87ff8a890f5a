#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod inpaint;

// Building blocks, public for experiments and custom predictors.
pub mod config;
pub mod filters;
pub mod frontier;
pub mod gradient;
pub mod kernel;
pub mod predict;
pub mod speed;

// --- High-level re-exports -------------------------------------------------

pub use crate::diagnostics::InpaintReport;
pub use crate::error::{ErrorKind, InpaintError};
pub use crate::inpaint::{FillResult, InpaintParams, Inpainter, PredictorChoice, RegressionParams};
pub use crate::predict::{BilateralPredictor, DepthPredictor, RegressionPredictor};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use gdfmm::prelude::*;
///
/// # fn main() -> Result<(), InpaintError> {
/// let (w, h) = (64usize, 48usize);
/// let mut depth = ImageF32::new(w, h);
/// depth.set(w / 2, h / 2, 1500.0);
/// let color = ImageRgb8::new(w, h);
///
/// let inpainter = Inpainter::new(InpaintParams::default())?;
/// let filled = inpainter.inpaint(&depth, &color, None)?;
/// println!("{}x{}", filled.w, filled.h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageRgb8, ImageU16};
    pub use crate::{InpaintError, InpaintParams, Inpainter, RegressionParams};
}
