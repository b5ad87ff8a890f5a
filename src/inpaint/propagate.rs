//! Greedy wavefront propagation over the depth map.
//!
//! Every known pixel is queued at priority `0`. The highest-priority entry is
//! popped and each unknown 4-neighbour is handed to the predictor:
//!
//! - success: the value is written (the pixel becomes known) and the
//!   neighbour is queued with its speed-field priority;
//! - failure: the popped pixel is queued again one priority step lower so
//!   other pixels can fill in around the neighbour first. One retry is queued
//!   per pop no matter how many neighbours failed, which keeps the number of
//!   queued retries linear in the deferral depth.
//!
//! A failure on an entry whose priority has dropped below `-max_deferrals`
//! aborts the run. Seeds start at `0` and get `max_deferrals + 1` retries;
//! filled pixels start in `[-1, 0)` and get one fewer. Pixels with no
//! 4-connected path to a seed are never reached and stay unknown.
use crate::diagnostics::PropagationStats;
use crate::error::InpaintError;
use crate::frontier::Frontier;
use crate::image::{ImageF32, ImageRgb8};
use crate::predict::DepthPredictor;
use crate::speed::SpeedField;
use log::{debug, trace};

const NEIGHBOURS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// Fill `depth` in place. Known samples are never modified.
pub fn propagate<P: DepthPredictor + ?Sized>(
    depth: &mut ImageF32,
    color: &ImageRgb8,
    speed: &SpeedField,
    predictor: &P,
    max_deferrals: u32,
) -> Result<PropagationStats, InpaintError> {
    let (w, h) = (depth.w, depth.h);
    let mut stats = PropagationStats::default();
    let mut frontier = Frontier::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            if depth.is_known(x, y) {
                frontier.push(0.0, x, y);
                stats.seeds += 1;
            }
        }
    }
    debug!(
        "propagate start w={} h={} seeds={} predictor={}",
        w,
        h,
        stats.seeds,
        predictor.name()
    );

    while let Some(entry) = frontier.pop() {
        stats.pops += 1;
        let mut deferred = false;

        for (dx, dy) in NEIGHBOURS {
            let Some((nx, ny)) = neighbour(entry.x, entry.y, dx, dy, w, h) else {
                continue;
            };
            if depth.is_known(nx, ny) {
                continue;
            }

            let prediction = predictor
                .predict(depth, color, nx, ny)
                .filter(|v| *v != 0.0 && v.is_finite());
            if let Some(value) = prediction {
                depth.set(nx, ny, value);
                frontier.push(speed.priority(nx, ny), nx, ny);
                stats.filled += 1;
                continue;
            }

            stats.failed_predictions += 1;
            if entry.priority < -(max_deferrals as f32) {
                debug!(
                    "propagate abort at ({}, {}) after {} deferrals",
                    entry.x, entry.y, entry.deferrals
                );
                return Err(InpaintError::InsufficientData {
                    x: entry.x,
                    y: entry.y,
                    deferrals: entry.deferrals,
                });
            }
            if !deferred {
                trace!(
                    "defer ({}, {}) priority={:.3} neighbour=({}, {})",
                    entry.x,
                    entry.y,
                    entry.priority,
                    nx,
                    ny
                );
                frontier.defer(&entry);
                stats.deferrals += 1;
                stats.deepest_deferral = stats.deepest_deferral.max(entry.deferrals + 1);
                deferred = true;
            }
        }
    }

    stats.unreachable = w * h - depth.count_known();
    debug!(
        "propagate done filled={} unreachable={} pops={} deferrals={}",
        stats.filled, stats.unreachable, stats.pops, stats.deferrals
    );
    Ok(stats)
}

#[inline]
fn neighbour(x: usize, y: usize, dx: isize, dy: isize, w: usize, h: usize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < w && ny < h).then_some((nx, ny))
}
