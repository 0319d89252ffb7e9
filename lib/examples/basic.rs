/// Basic example: convert a generated test image to ASCII art
///
/// Draws a dark disc on a white background, prints the character grid and
/// writes the rendered PNG under output/.
use img2ascii::{AsciiConfig, convert_file, process_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("img2ascii - Basic Example");
    println!("=========================\n");

    let width = 240;
    let height = 160;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    // Shaded disc in the center, darker toward the middle
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 60.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                let shade = (dist / radius * 220.0) as u8;
                img.put_pixel(x, y, Rgba([shade, shade, shade, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig::default();
    let grid = process_image(&img, &config).expect("Failed to convert image");
    println!("Character grid: {}x{}\n", grid.width(), grid.height());
    println!("{}\n", grid);

    img.save("basic_input.png").expect("Failed to save input");
    let written = convert_file("basic_input.png".as_ref(), &config).expect("Failed to render");

    println!("✓ Saved input to:  basic_input.png");
    println!("✓ Saved output to: {}", written.display());
}
