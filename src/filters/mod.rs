//! Generic filtering primitives used to pre-process the color guide.
//!
//! - [`gaussian`]: separable Gaussian smoothing with a sampled, normalised
//!   kernel built from σ.
//! - [`sobel`]: 3×3 Sobel first derivatives along x and y.
//!
//! Both primitives mirror the image at its border without repeating the edge
//! sample (`dcb|abcd|cba`, "reflect 101"), so a derivative taken across the
//! first or last column is zero.

pub mod gaussian;
pub mod sobel;

pub use gaussian::{apply_separable, GaussianFilter, SeparableFilter};
pub use sobel::{sobel_gradients, Gradients};

/// Map a possibly out-of-range index onto `[0, upper)` by mirroring about the
/// first and last sample.
#[inline]
pub(crate) fn reflect_index(idx: isize, upper: usize) -> usize {
    if upper <= 1 {
        return 0;
    }
    let last = upper as isize - 1;
    let period = 2 * last;
    let i = idx.rem_euclid(period);
    (if i > last { period - i } else { i }) as usize
}
