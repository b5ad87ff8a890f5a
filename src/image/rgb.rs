//! Owned interleaved 8-bit RGB image.
//!
//! The color guide is read-only for a whole run; predictors sample it per
//! pixel and the speed field splits it into float planes once.
use super::f32::ImageF32;
use crate::error::InpaintError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: Vec<[u8; 3]>,
}

impl ImageRgb8 {
    pub const CHANNELS: usize = 3;

    /// Construct a black image of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![[0; 3]; w * h],
        }
    }

    /// Build from a tightly packed interleaved buffer with `channels` samples
    /// per pixel. Only 3-channel input is accepted.
    pub fn from_interleaved(
        w: usize,
        h: usize,
        channels: usize,
        raw: &[u8],
    ) -> Result<Self, InpaintError> {
        if channels != Self::CHANNELS {
            return Err(InpaintError::ChannelCount {
                expected: Self::CHANNELS,
                actual: channels,
            });
        }
        let expected = w * h * Self::CHANNELS;
        if raw.len() != expected {
            return Err(InpaintError::BufferLength {
                expected,
                actual: raw.len(),
            });
        }
        let data = raw
            .chunks_exact(Self::CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        self.data[y * self.stride + x] = px;
    }

    /// Extract channel `c` as a float plane in the 0..255 range.
    pub fn channel_f32(&self, c: usize) -> ImageF32 {
        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                out.set(x, y, self.get(x, y)[c] as f32);
            }
        }
        out
    }
}

impl crate::image::traits::ImageView for ImageRgb8 {
    type Pixel = [u8; 3];

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
    fn row(&self, y: usize) -> &[[u8; 3]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[[u8; 3]]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
