/// Picked-file loading and decoding
///
/// Reads the bytes of a picked file and decodes them into a `PhotoEntry`.
/// Decoding runs on a blocking task so large files never stall the UI
/// loop; the result comes back as a message.

use std::path::PathBuf;

use tokio::task;

use crate::error::PhotoError;
use crate::photo::PhotoEntry;

/// Load and decode a picked file
///
/// Any read or decode failure surfaces as `InvalidFormat`; a failure to
/// join the blocking task is coerced to `Unknown`.
pub async fn load_photo(path: PathBuf) -> Result<PhotoEntry, PhotoError> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || {
        let bytes = std::fs::read(&path).map_err(|e| {
            eprintln!("⚠️  Failed to read {}: {}", path.display(), e);
            PhotoError::InvalidFormat
        })?;
        decode_photo(&bytes)
    })
    .await
    .map_err(|_| PhotoError::Unknown)?
}

/// Decode raw image bytes into a fresh `PhotoEntry`
pub fn decode_photo(bytes: &[u8]) -> Result<PhotoEntry, PhotoError> {
    let image = image::load_from_memory(bytes).map_err(|e| {
        eprintln!("⚠️  Failed to decode image: {}", e);
        PhotoError::InvalidFormat
    })?;

    println!("📷 Decoded photo: {}x{}", image.width(), image.height());

    Ok(PhotoEntry::new(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::new_rgba8(width, height);
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_garbage_is_invalid_format() {
        let result = decode_photo(b"definitely not an image");
        assert_eq!(result.unwrap_err(), PhotoError::InvalidFormat);
    }

    #[test]
    fn test_decode_empty_is_invalid_format() {
        let result = decode_photo(&[]);
        assert_eq!(result.unwrap_err(), PhotoError::InvalidFormat);
    }

    #[test]
    fn test_decode_valid_png() {
        let entry = decode_photo(&png_bytes(4, 3)).unwrap();
        assert_eq!(entry.image().width(), 4);
        assert_eq!(entry.image().height(), 3);
    }

    #[test]
    fn test_decoded_entries_have_distinct_ids() {
        let bytes = png_bytes(2, 2);
        let a = decode_photo(&bytes).unwrap();
        let b = decode_photo(&bytes).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn test_load_missing_file_is_invalid_format() {
        let result = load_photo(PathBuf::from("/nonexistent/photo.png")).await;
        assert_eq!(result.unwrap_err(), PhotoError::InvalidFormat);
    }
}
