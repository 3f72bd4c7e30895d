/// The mono filter: parameters and transform
///
/// The editor ships exactly one filter. Its parameters are still kept in
/// a struct that serializes to JSON, so each catalog entry records the
/// transform that produced the saved image.

use image::{DynamicImage, Rgba};
use serde::{Deserialize, Serialize};

use crate::color;

/// Parameters of the mono transform
///
/// Defaults describe the one built-in filter: Rec. 709 luma weights with
/// a moderate tone-curve strength. Stored as JSON in the catalog with
/// every saved photo.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MonoFilter {
    /// Per-channel luma weights (R, G, B), expected to sum to ~1.0
    pub weights: [f32; 3],
    /// Tone curve strength (0.0 = flat luma, 1.0 = full S-curve)
    pub tone_strength: f32,
}

impl Default for MonoFilter {
    fn default() -> Self {
        MonoFilter {
            weights: color::LUMA_WEIGHTS,
            tone_strength: 0.35,
        }
    }
}

impl MonoFilter {
    /// Apply the transform, producing a new image
    ///
    /// Returns `None` when no output can be produced (an image with a
    /// zero dimension has no pixels to transform).
    pub fn apply(&self, image: &DynamicImage) -> Option<DynamicImage> {
        if image.width() == 0 || image.height() == 0 {
            return None;
        }

        let mut rgba = image.to_rgba8();
        for pixel in rgba.pixels_mut() {
            let Rgba([r, g, b, a]) = *pixel;
            let luma = color::weighted_luma(&self.weights, r, g, b);
            let toned = color::tone_curve(luma, self.tone_strength);
            let value = color::to_channel(toned);
            *pixel = Rgba([value, value, value, a]);
        }

        Some(DynamicImage::ImageRgba8(rgba))
    }

    /// Convert to JSON string for catalog storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string (from the catalog)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
