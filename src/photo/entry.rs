/// The immutable photo value the editor operates on
///
/// A `PhotoEntry` is never mutated in place: every edit produces a new
/// entry with a fresh identity token. The controller owns at most one
/// entry at a time.

use std::sync::atomic::{AtomicU64, Ordering};

use image::DynamicImage;

use crate::state::edit::MonoFilter;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token for a photo value
///
/// Fresh per construction; two entries are never the same photo even if
/// their pixels happen to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(u64);

impl PhotoId {
    fn next() -> Self {
        PhotoId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded photo plus the filter that produced it (if any)
#[derive(Debug, Clone)]
pub struct PhotoEntry {
    /// Identity token, fresh per construction
    id: PhotoId,
    /// Decoded pixel data
    image: DynamicImage,
    /// The filter applied to produce this entry, None for a fresh pick
    filter: Option<MonoFilter>,
}

impl PhotoEntry {
    /// Wrap a freshly decoded image
    pub fn new(image: DynamicImage) -> Self {
        PhotoEntry {
            id: PhotoId::next(),
            image,
            filter: None,
        }
    }

    /// Wrap a filter output, recording the filter that produced it
    pub fn edited(image: DynamicImage, filter: MonoFilter) -> Self {
        PhotoEntry {
            id: PhotoId::next(),
            image,
            filter: Some(filter),
        }
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn filter(&self) -> Option<&MonoFilter> {
        self.filter.as_ref()
    }

    /// Pixel data for the preview widget: (width, height, RGBA bytes)
    pub fn rgba_bytes(&self) -> (u32, u32, Vec<u8>) {
        let rgba = self.image.to_rgba8();
        let (width, height) = rgba.dimensions();
        (width, height, rgba.into_raw())
    }
}
