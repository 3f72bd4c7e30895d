/// Scalar color math for the mono transform
///
/// This module holds the per-pixel math the filter is built from:
/// - Rec. 709 luma (relative luminance of an sRGB pixel)
/// - A fixed S-shaped tone curve that gives the mono output its
///   slightly punchy, film-like contrast

/// Rec. 709 luma weights for R, G, B
/// Source: ITU-R BT.709-6, also used by sRGB for relative luminance
pub const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Compute the weighted luma of an 8-bit RGB pixel
///
/// Returns a value in 0.0..=1.0 for weights summing to 1.0. Alpha is
/// not part of luminance and is handled by the caller.
pub fn weighted_luma(weights: &[f32; 3], r: u8, g: u8, b: u8) -> f32 {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;
    weights[0] * r + weights[1] * g + weights[2] * b
}

/// Apply the tone curve to a normalized luma value
///
/// `strength` in 0.0..=1.0 blends between the identity curve (0.0) and
/// a smoothstep S-curve (1.0). The curve is monotonic and maps the
/// endpoints to themselves, so pure black stays black and pure white
/// stays white at any strength.
pub fn tone_curve(luma: f32, strength: f32) -> f32 {
    let x = luma.clamp(0.0, 1.0);
    let s = strength.clamp(0.0, 1.0);
    // smoothstep: 3x^2 - 2x^3
    let curved = x * x * (3.0 - 2.0 * x);
    x + (curved - x) * s
}

/// Convert a normalized value back to an 8-bit channel
pub fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
