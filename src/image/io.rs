//! I/O helpers for depth maps, color guides and JSON.
//!
//! - `load_depth_image`: read a single-channel PNG (8- or 16-bit) as `ImageU16`.
//! - `load_color_image`: read a 3-channel image as `ImageRgb8`.
//! - `save_depth_u16`: write an `ImageU16` to a 16-bit grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgb8, ImageU16, ImageView};
use crate::error::InpaintError;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a single-channel depth image. 8-bit samples keep their raw value.
pub fn load_depth_image(path: &Path) -> Result<ImageU16, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let channels = img.color().channel_count() as usize;
    if channels != 1 {
        let err = InpaintError::ChannelCount {
            expected: 1,
            actual: channels,
        };
        return Err(format!("Depth image {}: {err}", path.display()));
    }
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = match img {
        DynamicImage::ImageLuma8(buf) => buf.into_raw().into_iter().map(u16::from).collect(),
        other => other.into_luma16().into_raw(),
    };
    Ok(ImageU16 {
        w,
        h,
        stride: w,
        data,
    })
}

/// Load a 3-channel color guide, reducing 16-bit input to 8 bits.
pub fn load_color_image(path: &Path) -> Result<ImageRgb8, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let channels = img.color().channel_count() as usize;
    let (w, h) = (img.width() as usize, img.height() as usize);
    if channels != ImageRgb8::CHANNELS {
        let err = InpaintError::ChannelCount {
            expected: ImageRgb8::CHANNELS,
            actual: channels,
        };
        return Err(format!("Color image {}: {err}", path.display()));
    }
    let rgb = img.into_rgb8();
    ImageRgb8::from_interleaved(w, h, ImageRgb8::CHANNELS, rgb.as_raw())
        .map_err(|e| format!("Color image {}: {e}", path.display()))
}

/// Save a 16-bit depth buffer to a grayscale PNG.
pub fn save_depth_u16(depth: &ImageU16, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let data = match depth.as_slice() {
        Some(slice) => slice.to_vec(),
        None => depth.rows().flatten().copied().collect(),
    };
    let buffer: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(depth.w as u32, depth.h as u32, data)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma16(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
