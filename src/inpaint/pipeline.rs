//! Public inpainting entry points.
//!
//! [`Inpainter`] validates its configuration once and can then be reused for
//! any number of depth/color pairs; it holds no per-run state.
//!
//! ```no_run
//! use gdfmm::image::{ImageF32, ImageRgb8};
//! use gdfmm::{InpaintParams, Inpainter};
//!
//! # fn example(depth: ImageF32, color: ImageRgb8) -> Result<(), gdfmm::InpaintError> {
//! let inpainter = Inpainter::new(InpaintParams::default())?;
//! let filled = inpainter.inpaint(&depth, &color, None)?;
//! println!("{}x{}", filled.w, filled.h);
//! # Ok(())
//! # }
//! ```
use super::params::{InpaintParams, PredictorChoice, RegressionParams};
use super::propagate::propagate;
use crate::diagnostics::{InpaintReport, TimingBreakdown};
use crate::error::InpaintError;
use crate::image::{ImageF32, ImageRgb8, ImageU16, ImageView};
use crate::predict::{
    require_non_negative, BilateralPredictor, DepthPredictor, RegressionPredictor,
};
use crate::speed::SpeedField;
use log::debug;
use std::time::Instant;

/// Filled float depth map and the statistics of the run that produced it.
#[derive(Clone, Debug)]
pub struct FillResult {
    pub depth: ImageF32,
    pub report: InpaintReport,
}

/// Guided depth inpainter.
#[derive(Clone, Debug)]
pub struct Inpainter {
    params: InpaintParams,
    bilateral: BilateralPredictor,
}

impl Inpainter {
    /// Validate `params` and build the bilateral weight caches.
    pub fn new(params: InpaintParams) -> Result<Self, InpaintError> {
        require_non_negative("blur_sigma", params.blur_sigma)?;
        let bilateral =
            BilateralPredictor::new(params.window_size, params.sigma_distance, params.sigma_color)?
                .with_gradient_correction(params.gradient_correction);
        Ok(Self { params, bilateral })
    }

    pub fn params(&self) -> &InpaintParams {
        &self.params
    }

    pub fn bilateral(&self) -> &BilateralPredictor {
        &self.bilateral
    }

    /// Regression predictor over this inpainter's window.
    pub fn regression(&self, params: &RegressionParams) -> Result<RegressionPredictor, InpaintError> {
        RegressionPredictor::new(self.params.window_size, params)
    }

    /// Fill with the bilateral predictor and convert to 16 bits.
    ///
    /// The result is also copied into `output` when one is supplied.
    pub fn inpaint(
        &self,
        depth: &ImageF32,
        color: &ImageRgb8,
        output: Option<&mut ImageU16>,
    ) -> Result<ImageU16, InpaintError> {
        let result = self.fill(depth, color, &self.bilateral)?;
        Ok(export(&result.depth, output))
    }

    /// Fill with the regression predictor and convert to 16 bits.
    pub fn inpaint_regression(
        &self,
        depth: &ImageF32,
        color: &ImageRgb8,
        regression: &RegressionParams,
        output: Option<&mut ImageU16>,
    ) -> Result<ImageU16, InpaintError> {
        let predictor = self.regression(regression)?;
        let result = self.fill(depth, color, &predictor)?;
        Ok(export(&result.depth, output))
    }

    /// Fill with the predictor named by `choice`.
    pub fn fill_with(
        &self,
        depth: &ImageF32,
        color: &ImageRgb8,
        choice: &PredictorChoice,
    ) -> Result<FillResult, InpaintError> {
        match choice {
            PredictorChoice::Bilateral => self.fill(depth, color, &self.bilateral),
            PredictorChoice::Regression(params) => {
                let predictor = self.regression(params)?;
                self.fill(depth, color, &predictor)
            }
        }
    }

    /// Run the propagation with any predictor on a copy of `depth`.
    pub fn fill<P: DepthPredictor + ?Sized>(
        &self,
        depth: &ImageF32,
        color: &ImageRgb8,
        predictor: &P,
    ) -> Result<FillResult, InpaintError> {
        check_shapes(depth, color)?;
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let speed_start = Instant::now();
        let speed = SpeedField::from_color(color, self.params.blur_sigma);
        timing.push("speed_field", elapsed_ms(speed_start));

        let propagate_start = Instant::now();
        let mut filled = depth.clone();
        let stats = propagate(
            &mut filled,
            color,
            &speed,
            predictor,
            self.params.max_deferrals,
        )?;
        timing.push("propagate", elapsed_ms(propagate_start));
        timing.total_ms = elapsed_ms(total_start);

        debug!(
            "Inpainter::fill done predictor={} filled={} total_ms={:.3}",
            predictor.name(),
            stats.filled,
            timing.total_ms
        );
        let report = InpaintReport {
            width: depth.w,
            height: depth.h,
            predictor: predictor.name().to_string(),
            stats,
            timing,
        };
        Ok(FillResult {
            depth: filled,
            report,
        })
    }
}

fn check_shapes(depth: &ImageF32, color: &ImageRgb8) -> Result<(), InpaintError> {
    let (depth_w, depth_h) = depth.dims();
    let (color_w, color_h) = color.dims();
    if (depth_w, depth_h) != (color_w, color_h) {
        return Err(InpaintError::SizeMismatch {
            depth_w,
            depth_h,
            color_w,
            color_h,
        });
    }
    Ok(())
}

fn export(depth: &ImageF32, output: Option<&mut ImageU16>) -> ImageU16 {
    let out = depth.to_u16();
    if let Some(buffer) = output {
        buffer.clone_from(&out);
    }
    out
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn construction_rejects_invalid_configuration() {
        for params in [
            InpaintParams {
                window_size: 4,
                ..Default::default()
            },
            InpaintParams {
                window_size: 1,
                ..Default::default()
            },
            InpaintParams {
                blur_sigma: -1.0,
                ..Default::default()
            },
            InpaintParams {
                sigma_color: 0.0,
                ..Default::default()
            },
        ] {
            let err = Inpainter::new(params).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }
    }

    #[test]
    fn size_mismatch_is_reported_before_filling() {
        let inpainter = Inpainter::new(InpaintParams::default()).unwrap();
        let depth = ImageF32::new(4, 4);
        let color = ImageRgb8::new(4, 5);
        let err = inpainter.inpaint(&depth, &color, None).unwrap_err();
        assert_eq!(
            err,
            InpaintError::SizeMismatch {
                depth_w: 4,
                depth_h: 4,
                color_w: 4,
                color_h: 5
            }
        );
    }

    #[test]
    fn output_buffer_receives_the_result() {
        let inpainter = Inpainter::new(InpaintParams::default()).unwrap();
        let mut depth = ImageF32::new(4, 4);
        for y in 0..2 {
            for x in 0..2 {
                depth.set(x, y, 1000.0);
            }
        }
        let color = ImageRgb8::new(4, 4);
        let mut buffer = ImageU16::new(1, 1);
        let out = inpainter.inpaint(&depth, &color, Some(&mut buffer)).unwrap();
        assert_eq!(out, buffer);
        assert!(out.data.iter().all(|&v| v == 1000));
    }

    #[test]
    fn report_names_predictor_and_stages() {
        let inpainter = Inpainter::new(InpaintParams::default()).unwrap();
        let mut depth = ImageF32::new(3, 3);
        depth.data.iter_mut().for_each(|v| *v = 5.0);
        let result = inpainter
            .fill_with(
                &depth,
                &ImageRgb8::new(3, 3),
                &PredictorChoice::Regression(RegressionParams::default()),
            )
            .unwrap();
        assert_eq!(result.report.predictor, "regression");
        assert_eq!(result.report.stats.seeds, 9);
        let labels: Vec<&str> = result
            .report
            .timing
            .stages
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["speed_field", "propagate"]);
    }
}
