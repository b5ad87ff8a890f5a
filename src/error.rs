//! Error types surfaced by the inpainting pipeline.
//!
//! Every failure is fatal for the run that produced it: configuration problems
//! are caught when an [`Inpainter`](crate::Inpainter) is built, shape problems
//! before the first pixel is touched, and [`InpaintError::InsufficientData`]
//! aborts propagation once a frontier pixel exhausts its retry budget.
use thiserror::Error;

/// Coarse classification of an [`InpaintError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid parameters, rejected at construction.
    Configuration,
    /// Inputs of the wrong size, channel count or buffer length.
    InputShape,
    /// The depth input is too sparse for the configured window.
    InsufficientData,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InpaintError {
    #[error("window size must be odd and at least 3, got {size}")]
    InvalidWindowSize { size: usize },

    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error(
        "color and depth images must have the same size \
         (depth {depth_w}x{depth_h}, color {color_w}x{color_h})"
    )]
    SizeMismatch {
        depth_w: usize,
        depth_h: usize,
        color_w: usize,
        color_h: usize,
    },

    #[error("expected {expected} channel(s), got {actual}")]
    ChannelCount { expected: usize, actual: usize },

    #[error("buffer holds {actual} samples, {expected} required for the given shape")]
    BufferLength { expected: usize, actual: usize },

    #[error(
        "too few known values around ({x}, {y}) after {deferrals} deferrals; \
         try densifying your depth image first, or increasing the window size"
    )]
    InsufficientData { x: usize, y: usize, deferrals: u32 },
}

impl InpaintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWindowSize { .. } | Self::InvalidParameter { .. } => {
                ErrorKind::Configuration
            }
            Self::SizeMismatch { .. } | Self::ChannelCount { .. } | Self::BufferLength { .. } => {
                ErrorKind::InputShape
            }
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            InpaintError::InvalidWindowSize { size: 4 }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            InpaintError::ChannelCount {
                expected: 3,
                actual: 4
            }
            .kind(),
            ErrorKind::InputShape
        );
        assert_eq!(
            InpaintError::InsufficientData {
                x: 1,
                y: 2,
                deferrals: 21
            }
            .kind(),
            ErrorKind::InsufficientData
        );
    }

    #[test]
    fn insufficient_data_message_guides_caller() {
        let msg = InpaintError::InsufficientData {
            x: 3,
            y: 4,
            deferrals: 21,
        }
        .to_string();
        assert!(msg.contains("(3, 4)"));
        assert!(msg.contains("densifying"));
        assert!(msg.contains("window size"));
    }
}
