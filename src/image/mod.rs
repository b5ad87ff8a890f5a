//! Image containers used by the inpainting pipeline.
//!
//! - [`ImageF32`]: depth working buffer and float planes (`0.0` = unknown depth).
//! - [`ImageU16`]: external 16-bit depth representation.
//! - [`ImageRgb8`]: interleaved 8-bit color guide.
pub mod f32;
pub mod io;
pub mod rgb;
pub mod traits;
pub mod u16;

pub use self::f32::ImageF32;
pub use self::rgb::ImageRgb8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u16::ImageU16;
