use img2ascii::processor::fit_dimensions;
use img2ascii::{AsciiConfig, process_image};
use image::{Rgba, RgbaImage};

fn main() {
    println!("img2ascii - Bounding Box Demo");
    println!("=============================\n");

    let test_cases = vec![
        (200, 100, "200x100 (wide)"),
        (100, 200, "100x200 (tall)"),
        (1920, 1080, "1920x1080 (Full HD)"),
        (64, 64, "64x64 (square, upscaled)"),
    ];

    let config = AsciiConfig::default();

    for (width, height, description) in test_cases {
        println!("Testing: {}", description);

        // Gradient so every ramp region shows up
        let mut img = RgbaImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let gray = ((x + y) % 256) as u8;
                img.put_pixel(x, y, Rgba([gray, gray, gray, 255]));
            }
        }

        let (fit_w, fit_h) =
            fit_dimensions(width, height, config.max_size).expect("non-empty image");
        let grid = process_image(&img, &config).expect("Failed to convert image");

        println!("  Input:   {}x{}", width, height);
        println!("  Resized: {}x{}", fit_w, fit_h);
        println!("  Grid:    {} columns x {} lines", grid.width(), grid.height());
        println!(
            "  Output:  {}x{} px\n",
            grid.width() as u32 * config.cell_width,
            grid.height() as u32 * config.cell_height
        );
    }

    println!("Images are scaled so the longer side is {} pixels,", config.max_size);
    println!("then every second row is sampled to match the 7x13 glyph cell.");
}
