/// Owned 16-bit single-channel image, the external depth representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageU16 {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: Vec<u16>,
}

impl ImageU16 {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u16 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u16) {
        self.data[y * self.stride + x] = v;
    }
}

impl crate::image::traits::ImageView for ImageU16 {
    type Pixel = u16;

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
    fn row(&self, y: usize) -> &[u16] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u16]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
