use std::fmt;

use crate::config::AsciiConfig;
use crate::lut::char_for_brightness;
use image::{Rgba, RgbaImage};

/// A rectangular grid of characters, one line per sampled image row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterGrid {
    lines: Vec<Vec<char>>,
}

impl CharacterGrid {
    /// Build a grid from lines of equal length
    ///
    /// # Panics
    /// Panics if the lines differ in length.
    pub fn from_lines(lines: Vec<Vec<char>>) -> Self {
        if let Some(first) = lines.first() {
            let width = first.len();
            assert!(
                lines.iter().all(|line| line.len() == width),
                "All grid lines must have the same length"
            );
        }
        Self { lines }
    }

    /// Characters per line
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, Vec::len)
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    /// Character at column `col` of line `row`
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        self.lines.get(row).and_then(|line| line.get(col)).copied()
    }
}

impl fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for ch in line {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Brightness of a pixel: the integer mean of its three color channels
pub fn brightness(pixel: &Rgba<u8>) -> u8 {
    let sum = pixel[0] as u32 + pixel[1] as u32 + pixel[2] as u32;
    (sum / 3) as u8
}

/// Convert an image into a character grid
///
/// Rows are sampled every `config.row_step` pixels (0, 2, 4, ... by default)
/// because a glyph cell is about twice as tall as it is wide. Every column is
/// sampled.
///
/// # Panics
/// Panics if `config.row_step` is zero; `AsciiConfig::validate` rejects that.
///
/// # Arguments
/// * `img` - The resized, background-normalized image
/// * `config` - Supplies the row stride
///
/// # Returns
/// A grid of `ceil(height / row_step)` lines, each `width` characters long
pub fn image_to_grid(img: &RgbaImage, config: &AsciiConfig) -> CharacterGrid {
    let (width, height) = img.dimensions();
    let step = config.row_step as usize;

    let lines = (0..height)
        .step_by(step)
        .map(|y| {
            (0..width)
                .map(|x| char_for_brightness(brightness(img.get_pixel(x, y))))
                .collect()
        })
        .collect();

    CharacterGrid::from_lines(lines)
}
