//! Synthetic color guides and depth maps with known ground truth.

pub const LEFT_COLOR: [u8; 3] = [30, 60, 90];
pub const RIGHT_COLOR: [u8; 3] = [200, 170, 40];

/// Interleaved RGB buffer split vertically at `split_x` into two flat colors.
pub fn split_color_rgb(width: usize, height: usize, split_x: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut rgb = Vec::with_capacity(width * height * 3);
    for _y in 0..height {
        for x in 0..width {
            let px = if x < split_x { LEFT_COLOR } else { RIGHT_COLOR };
            rgb.extend_from_slice(&px);
        }
    }
    rgb
}

/// Depth that steps from `near` to `far` at the same column as the color split.
pub fn split_depth(width: usize, height: usize, split_x: usize, near: u16, far: u16) -> Vec<u16> {
    let mut depth = vec![0u16; width * height];
    for y in 0..height {
        for x in 0..width {
            depth[y * width + x] = if x < split_x { near } else { far };
        }
    }
    depth
}

/// Smoothly varying, non-collinear color channels.
pub fn gradient_color(x: usize, y: usize) -> [u8; 3] {
    [
        (8 * x + 10) as u8,
        (5 * y + 20) as u8,
        ((3 * x + 7 * y) % 256) as u8,
    ]
}

pub fn gradient_color_rgb(width: usize, height: usize) -> Vec<u8> {
    assert!(8 * width + 10 <= 256 && 5 * height + 20 <= 256, "gradient overflows u8");
    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            rgb.extend_from_slice(&gradient_color(x, y));
        }
    }
    rgb
}

/// Depth that is an exact affine function of [`gradient_color`].
pub fn linear_depth_from_color(px: [u8; 3]) -> f32 {
    500.0 + 2.0 * px[0] as f32 + 3.0 * px[1] as f32 - px[2] as f32
}

/// Zero out the axis-aligned rectangle `[x0, x1) × [y0, y1)`.
pub fn punch_hole(
    depth: &mut [f32],
    width: usize,
    (x0, y0): (usize, usize),
    (x1, y1): (usize, usize),
) {
    for y in y0..y1 {
        for x in x0..x1 {
            depth[y * width + x] = 0.0;
        }
    }
}
