//! Image decoding
//!
//! The format is sniffed from the file content, so a PNG saved as `.jpg`
//! still decodes. Only the PNG, JPEG and GIF decoders are compiled in.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::{AsciiError, Result};

/// Load an image from disk and convert it to 8-bit RGBA
///
/// # Errors
/// `AsciiError::Io` if the file cannot be opened or read,
/// `AsciiError::Decode` if no decoder accepts the content.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let file = File::open(path).map_err(|source| AsciiError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| AsciiError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let decoded = reader.decode().map_err(|source| AsciiError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), width, height);

    Ok(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage, Rgba};

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.png");
        let img = RgbaImage::from_pixel(12, 7, Rgba([10, 20, 30, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (12, 7));
        assert_eq!(*loaded.get_pixel(3, 3), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_load_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.jpg");
        // The JPEG encoder takes no alpha channel
        let img = RgbImage::from_pixel(16, 8, Rgb([90, 150, 210]));
        img.save_with_format(&path, ImageFormat::Jpeg).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (16, 8));
        let pixel = loaded.get_pixel(8, 4);
        for (got, want) in pixel.0.iter().zip([90u8, 150, 210, 255]) {
            assert!(got.abs_diff(want) <= 4, "{:?}", pixel);
        }
    }

    #[test]
    fn test_load_gif() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.gif");
        let img = RgbaImage::from_pixel(5, 9, Rgba([255, 0, 0, 255]));
        img.save_with_format(&path, ImageFormat::Gif).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (5, 9));
        assert_eq!(*loaded.get_pixel(2, 4), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_load_sniffs_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually-png.jpg");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();

        assert_eq!(load_image(&path).unwrap().dimensions(), (4, 4));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(AsciiError::Io { .. })));
    }

    #[test]
    fn test_load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = load_image(&path);
        assert!(matches!(result, Err(AsciiError::Decode { .. })));
    }
}
