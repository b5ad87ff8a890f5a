//! 3×3 Sobel derivatives with a mirrored (reflect 101) border.
//!
//! Only the two derivative planes are kept; the speed field squares and sums
//! them itself, so no magnitude or orientation buffers are produced here.
use super::reflect_index;
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel first derivatives.
#[derive(Clone, Debug)]
pub struct Gradients {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
}

impl Gradients {
    /// Squared gradient magnitude `gx² + gy²` at (x, y).
    #[inline]
    pub fn energy(&self, x: usize, y: usize) -> f32 {
        let gx = self.gx.get(x, y);
        let gy = self.gy.get(x, y);
        gx * gx + gy * gy
    }
}

/// Compute Sobel gradients on a single-channel float image.
///
/// The first and last columns see mirrored neighbours on both sides, so their
/// `gx` is zero; likewise `gy` on the first and last rows.
pub fn sobel_gradients(l: &ImageF32) -> Gradients {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Gradients { gx, gy };
    }

    for y in 0..h {
        let y_idx = [
            reflect_index(y as isize - 1, h),
            y,
            reflect_index(y as isize + 1, h),
        ];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let x_idx = [
                reflect_index(x as isize - 1, w),
                x,
                reflect_index(x as isize + 1, w),
            ];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
        }
    }

    Gradients { gx, gy }
}
