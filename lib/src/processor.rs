use std::path::{Path, PathBuf};

use crate::ascii::{CharacterGrid, image_to_grid};
use crate::config::AsciiConfig;
use crate::error::{AsciiError, Result};
use crate::filters::replace_background;
use crate::loader::load_image;
use crate::output::{available_output_path, output_path_for, save_png};
use crate::render::{GlyphFace, render_grid};
use image::{RgbaImage, imageops};

/// Compute dimensions that fit inside a `max_size` square, keeping aspect ratio
///
/// The longer side becomes `max_size` (height wins on a tie, which gives the
/// same result for a square) and the other side is scaled with truncation.
/// A side that truncates to zero is raised to one pixel.
///
/// # Errors
/// `AsciiError::InvalidDimensions` if either input side is zero.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(AsciiError::InvalidDimensions { width, height });
    }

    let scale = |side: u32, longest: u32| {
        let scaled = side as u64 * max_size as u64 / longest as u64;
        (scaled as u32).max(1)
    };

    if width > height {
        Ok((max_size, scale(height, width)))
    } else {
        Ok((scale(width, height), max_size))
    }
}

/// Resize an image to fit the configured bounding box
///
/// Uses Lanczos3 filtering so the brightness of small features survives the
/// downscale.
///
/// # Arguments
/// * `input` - The background-normalized image
/// * `config` - Supplies the bounding box size
///
/// # Returns
/// The resized image
pub fn resize_to_fit(input: &RgbaImage, config: &AsciiConfig) -> Result<RgbaImage> {
    let (width, height) = input.dimensions();
    let (target_width, target_height) = fit_dimensions(width, height, config.max_size)?;

    log::debug!(
        "Resizing {}x{} -> {}x{}",
        width,
        height,
        target_width,
        target_height
    );

    Ok(imageops::resize(
        input,
        target_width,
        target_height,
        imageops::FilterType::Lanczos3,
    ))
}

/// Converts an image to a character grid
///
/// 1. Replace near-white background with gray
/// 2. Resize into the bounding box (Lanczos3)
/// 3. Map every sampled pixel's brightness to a ramp character
///
/// # Arguments
/// * `input` - The decoded RGBA image
/// * `config` - Configuration parameters for the conversion
///
/// # Returns
/// The character grid, `ceil(resized_height / row_step)` lines tall
pub fn process_image(input: &RgbaImage, config: &AsciiConfig) -> Result<CharacterGrid> {
    config.validate()?;

    let (width, height) = input.dimensions();
    if width == 0 || height == 0 {
        return Err(AsciiError::InvalidDimensions { width, height });
    }

    let normalized = replace_background(input, config);
    let resized = resize_to_fit(&normalized, config)?;
    let grid = image_to_grid(&resized, config);

    log::debug!("Character grid: {}x{}", grid.width(), grid.height());
    Ok(grid)
}

/// Runs the whole conversion for one file and returns the path written
///
/// The output goes to `<output_dir>/<prefix><input file name>`, with a
/// numeric suffix if that name is taken. It is always PNG-encoded.
///
/// # Errors
/// Any stage failure aborts the run: I/O, decode, encode, degenerate
/// dimensions or invalid configuration.
pub fn convert_file(input: &Path, config: &AsciiConfig) -> Result<PathBuf> {
    config.validate()?;

    let image = load_image(input)?;
    let grid = process_image(&image, config)?;

    let face = GlyphFace::new(config)?;
    let rendered = render_grid(&grid, &face);

    let output = available_output_path(&output_path_for(input, config));
    save_png(&rendered, &output)?;

    let (width, height) = rendered.dimensions();
    log::info!("Wrote {} ({}x{})", output.display(), width, height);

    Ok(output)
}
