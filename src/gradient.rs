//! Validity-aware finite differences on a partially filled depth map.
//!
//! Sobel cannot be used on depth because unknown samples (`0.0`) would inject
//! false gradients at the border of filled regions. Only neighbour pairs whose
//! two samples are both known contribute.
use crate::image::ImageF32;

/// Depth gradient `(gx, gy)` at (x, y).
///
/// Each axis averages the available one-sided differences (backward and
/// forward); an axis with no valid pair reports `0.0`.
pub fn depth_gradient(depth: &ImageF32, x: usize, y: usize) -> (f32, f32) {
    let center = depth.get(x, y);
    if center == 0.0 {
        return (0.0, 0.0);
    }

    let mut dx = 0.0;
    let mut wx = 0u32;
    if x > 0 {
        let left = depth.get(x - 1, y);
        if left != 0.0 {
            dx += center - left;
            wx += 1;
        }
    }
    if x + 1 < depth.w {
        let right = depth.get(x + 1, y);
        if right != 0.0 {
            dx += right - center;
            wx += 1;
        }
    }

    let mut dy = 0.0;
    let mut wy = 0u32;
    if y > 0 {
        let up = depth.get(x, y - 1);
        if up != 0.0 {
            dy += center - up;
            wy += 1;
        }
    }
    if y + 1 < depth.h {
        let down = depth.get(x, y + 1);
        if down != 0.0 {
            dy += down - center;
            wy += 1;
        }
    }

    (average(dx, wx), average(dy, wy))
}

#[inline]
fn average(sum: f32, count: u32) -> f32 {
    if count > 0 {
        sum / count as f32
    } else {
        0.0
    }
}
