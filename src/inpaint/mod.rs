//! Guided depth inpainting driven by a color-aware wavefront.
//!
//! Overview
//! - Derives a per-pixel priority from the color guide's edge energy
//!   ([`crate::speed`]).
//! - Seeds a max-priority frontier with every known depth and expands it one
//!   4-neighbour at a time ([`propagate()`]), asking a
//!   [`DepthPredictor`](crate::predict::DepthPredictor) for each unknown pixel.
//! - Failed predictions defer the source pixel; a bounded retry budget turns
//!   inputs that are too sparse into [`InpaintError::InsufficientData`]
//!   instead of an endless loop.
//!
//! Modules
//! - [`params`] – configuration types.
//! - `pipeline` – the [`Inpainter`] entry points.
//! - [`propagate`] – the frontier expansion itself.
//!
//! [`InpaintError::InsufficientData`]: crate::InpaintError::InsufficientData

pub mod params;
mod pipeline;
pub mod propagate;

pub use params::{InpaintParams, PredictorChoice, RegressionParams, DEFAULT_MAX_DEFERRALS};
pub use pipeline::{FillResult, Inpainter};
pub use propagate::propagate;
