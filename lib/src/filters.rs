use image::{Rgba, RgbaImage};

use crate::config::AsciiConfig;

/// Apply a pixel's alpha to its color channels
///
/// Returns the color as it would appear composited over black, so a fully
/// transparent pixel reads as black.
pub fn premultiplied_rgb(pixel: &Rgba<u8>) -> [u8; 3] {
    let a = pixel[3] as u32;
    [
        (pixel[0] as u32 * a / 255) as u8,
        (pixel[1] as u32 * a / 255) as u8,
        (pixel[2] as u32 * a / 255) as u8,
    ]
}

/// Check whether a color is close enough to white to count as background
///
/// Euclidean distance from (255, 255, 255) must be strictly below `radius`.
pub fn is_background(rgb: [u8; 3], radius: f64) -> bool {
    let dr = 255.0 - rgb[0] as f64;
    let dg = 255.0 - rgb[1] as f64;
    let db = 255.0 - rgb[2] as f64;

    let dist = (dr * dr + dg * dg + db * db).sqrt();
    dist < radius
}

/// Replace near-white pixels with an opaque gray
///
/// Every other pixel keeps its (alpha-applied) color. All output pixels are
/// opaque and the dimensions are unchanged.
///
/// # Arguments
/// * `img` - Input RGBA image
/// * `config` - Supplies the background radius and the replacement gray
///
/// # Returns
/// A new image with the background normalized
pub fn replace_background(img: &RgbaImage, config: &AsciiConfig) -> RgbaImage {
    let (width, height) = img.dimensions();
    let radius = config.background_radius();
    let [gr, gg, gb] = config.background_gray;
    let gray = Rgba([gr, gg, gb, 255]);

    let mut output = RgbaImage::new(width, height);
    let mut replaced = 0usize;

    for (x, y, pixel) in img.enumerate_pixels() {
        let rgb = premultiplied_rgb(pixel);
        if is_background(rgb, radius) {
            output.put_pixel(x, y, gray);
            replaced += 1;
        } else {
            output.put_pixel(x, y, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        }
    }

    log::debug!(
        "Background: replaced {} of {} pixels",
        replaced,
        width as usize * height as usize
    );

    output
}
