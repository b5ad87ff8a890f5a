//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used as the depth working buffer during propagation and for the float
//! planes produced by filtering. A depth value of exactly `0.0` marks an
//! unknown sample.
use super::u16::ImageU16;
use crate::error::InpaintError;
use num_traits::AsPrimitive;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Convert a tightly packed buffer of any primitive numeric sample type
    /// (`u8`, `u16`, `u32`, `i32`, `f64`, ...) to `f32`.
    ///
    /// `channels` is the number of interleaved samples per pixel in `data`;
    /// depth maps must be single-channel.
    pub fn from_samples<P>(
        w: usize,
        h: usize,
        channels: usize,
        data: &[P],
    ) -> Result<Self, InpaintError>
    where
        P: AsPrimitive<f32>,
    {
        if channels != 1 {
            return Err(InpaintError::ChannelCount {
                expected: 1,
                actual: channels,
            });
        }
        let expected = w * h;
        if data.len() != expected {
            return Err(InpaintError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data: data.iter().map(|&v| v.as_()).collect(),
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
    #[inline]
    /// True when (x, y) holds a valid (non-zero) depth.
    pub fn is_known(&self, x: usize, y: usize) -> bool {
        self.get(x, y) != 0.0
    }

    /// Number of pixels holding a valid depth.
    pub fn count_known(&self) -> usize {
        use super::traits::ImageView;
        self.rows().flatten().filter(|&&v| v != 0.0).count()
    }

    /// Round to the nearest integer and saturate into the 16-bit range.
    ///
    /// Non-finite samples become `0` (unknown).
    pub fn to_u16(&self) -> ImageU16 {
        let mut out = ImageU16::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                out.set(x, y, saturate_u16(self.get(x, y)));
            }
        }
        out
    }
}

#[inline]
fn saturate_u16(v: f32) -> u16 {
    if !v.is_finite() {
        return 0;
    }
    v.round().clamp(0.0, u16::MAX as f32) as u16
}

impl From<&ImageU16> for ImageF32 {
    fn from(img: &ImageU16) -> Self {
        let mut out = ImageF32::new(img.w, img.h);
        for y in 0..img.h {
            for x in 0..img.w {
                out.set(x, y, img.get(x, y) as f32);
            }
        }
        out
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn from_samples_rejects_multichannel_depth() {
        let data = vec![1u16; 2 * 2 * 3];
        let err = ImageF32::from_samples(2, 2, 3, &data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputShape);
    }

    #[test]
    fn from_samples_rejects_short_buffer() {
        let data = vec![1u8; 3];
        let err = ImageF32::from_samples(2, 2, 1, &data).unwrap_err();
        assert_eq!(
            err,
            InpaintError::BufferLength {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn from_samples_accepts_wide_and_float_types() {
        let from_u32 = ImageF32::from_samples(2, 1, 1, &[70_000u32, 0]).unwrap();
        assert_eq!(from_u32.data, vec![70_000.0, 0.0]);
        let from_i32 = ImageF32::from_samples(2, 1, 1, &[-3i32, 12]).unwrap();
        assert_eq!(from_i32.data, vec![-3.0, 12.0]);
        let from_f64 = ImageF32::from_samples(1, 2, 1, &[1.5f64, 2500.25]).unwrap();
        assert_eq!(from_f64.data, vec![1.5, 2500.25]);
    }

    #[test]
    fn to_u16_rounds_and_saturates() {
        let img = ImageF32::from_samples(4, 1, 1, &[1.4f32, 2.6, -5.0, 70_000.0]).unwrap();
        let out = img.to_u16();
        assert_eq!(out.data, vec![1, 3, 0, u16::MAX]);

        let mut nan = ImageF32::new(1, 1);
        nan.set(0, 0, f32::NAN);
        assert_eq!(nan.to_u16().get(0, 0), 0);
    }

    #[test]
    fn count_known_skips_zero() {
        let img = ImageF32::from_samples(3, 1, 1, &[0.0f32, 2.0, 3.0]).unwrap();
        assert_eq!(img.count_known(), 2);
        assert!(!img.is_known(0, 0));
        assert!(img.is_known(2, 0));
    }
}
