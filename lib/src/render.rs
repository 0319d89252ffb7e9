//! Rasterizing a character grid back into pixels
//!
//! Glyphs come from an embedded monospace face rasterized once at a fixed
//! pixel scale into binary masks, one fixed-size cell per character. Every
//! output pixel is either ink or paper.

use std::collections::HashMap;

use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};

use crate::ascii::CharacterGrid;
use crate::config::AsciiConfig;
use crate::error::Result;

/// DejaVu Sans Mono, see assets/LICENSE-DejaVu.txt
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Coverage at or above which a pixel is inked
const INK_COVERAGE: f32 = 0.4;

/// A font face rasterized into ink masks for a fixed cell size
pub struct GlyphFace {
    cell_width: u32,
    cell_height: u32,
    /// Rows per mask: the cell plus the descender that hangs below the baseline
    mask_height: u32,
    /// Maps a char to its ink mask (size = cell_width * mask_height)
    glyph_cache: HashMap<char, Vec<bool>>,
    ink: Rgba<u8>,
    paper: Rgba<u8>,
}

impl GlyphFace {
    /// Parse the embedded font and rasterize printable ASCII for the configured cell
    ///
    /// # Errors
    /// `AsciiError::Font` if the embedded font data is invalid.
    pub fn new(config: &AsciiConfig) -> Result<Self> {
        let font = FontRef::try_from_slice(FONT_DATA)?;
        let scale = PxScale::from(config.font_scale);
        let descent = -font.as_scaled(scale).descent();

        let [ir, ig, ib] = config.ink_color;
        let [pr, pg, pb] = config.paper_color;

        let mut face = Self {
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            mask_height: config.cell_height + descent.max(0.0).ceil() as u32,
            glyph_cache: HashMap::new(),
            ink: Rgba([ir, ig, ib, 255]),
            paper: Rgba([pr, pg, pb, 255]),
        };

        for ch in (0x20u8..=0x7e).map(char::from) {
            let mask = face.rasterize(&font, scale, ch);
            face.glyph_cache.insert(ch, mask);
        }

        Ok(face)
    }

    /// Rasterize one glyph with its baseline on the bottom edge of the cell
    fn rasterize(&self, font: &FontRef<'_>, scale: PxScale, ch: char) -> Vec<bool> {
        let width = self.cell_width as i32;
        let height = self.mask_height as i32;
        let mut mask = vec![false; (self.cell_width * self.mask_height) as usize];

        let glyph = font
            .glyph_id(ch)
            .with_scale_and_position(scale, point(0.0, self.cell_height as f32));

        if let Some(outline) = font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            outline.draw(|x, y, coverage| {
                let px = x as i32 + bounds.min.x as i32;
                let py = y as i32 + bounds.min.y as i32;
                if coverage >= INK_COVERAGE && (0..width).contains(&px) && (0..height).contains(&py)
                {
                    mask[(py * width + px) as usize] = true;
                }
            });
        }

        mask
    }

    /// Canvas size needed for a grid of `cols` x `rows` characters
    pub fn canvas_size(&self, cols: usize, rows: usize) -> (u32, u32) {
        (
            cols as u32 * self.cell_width,
            rows as u32 * self.cell_height,
        )
    }
}

/// Render a character grid to an image
///
/// The canvas is `width * cell_width` by `height * cell_height`, filled with
/// the paper color. Each character is inked with its left edge at
/// `col * cell_width` and its baseline at `(row + 1) * cell_height`, so
/// descenders reach into the next line. Ink past the canvas edge is clipped.
///
/// # Arguments
/// * `grid` - Characters to draw
/// * `face` - Glyph masks, cell size and colors
///
/// # Returns
/// Opaque RGBA image with rendered ASCII art
pub fn render_grid(grid: &CharacterGrid, face: &GlyphFace) -> RgbaImage {
    let (width, height) = face.canvas_size(grid.width(), grid.height());
    let mut canvas = RgbaImage::from_pixel(width, height, face.paper);

    for (row, line) in grid.lines().iter().enumerate() {
        let top = row as u32 * face.cell_height;

        for (col, ch) in line.iter().enumerate() {
            let Some(mask) = face.glyph_cache.get(ch) else {
                continue;
            };
            let left = col as u32 * face.cell_width;

            for my in 0..face.mask_height {
                let y = top + my;
                if y >= height {
                    break;
                }
                for mx in 0..face.cell_width {
                    if mask[(my * face.cell_width + mx) as usize] {
                        canvas.put_pixel(left + mx, y, face.ink);
                    }
                }
            }
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::ASCII_RAMP;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn face() -> GlyphFace {
        GlyphFace::new(&AsciiConfig::default()).unwrap()
    }

    #[test]
    fn test_embedded_font_covers_ramp() {
        let face = face();
        assert!(face.mask_height > 13);
        assert!(ASCII_RAMP.chars().all(|c| face.glyph_cache.contains_key(&c)));
    }

    #[test]
    fn test_render_dimensions() {
        let grid = CharacterGrid::from_lines(vec![vec!['@'; 5]; 3]);
        let img = render_grid(&grid, &face());

        assert_eq!(img.dimensions(), (35, 39));
    }

    #[test]
    fn test_render_spaces_stay_blank() {
        let grid = CharacterGrid::from_lines(vec![vec![' '; 4]; 2]);
        let img = render_grid(&grid, &face());

        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn test_render_dense_glyph_leaves_ink() {
        let grid = CharacterGrid::from_lines(vec![vec!['@']]);
        let img = render_grid(&grid, &face());

        assert_eq!(img.dimensions(), (7, 13));
        assert!(img.pixels().filter(|p| **p == BLACK).count() >= 8);
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_render_pixels_are_solid() {
        let grid = CharacterGrid::from_lines(vec![vec!['@', '/', 'M', '.', '#', '$']]);
        let img = render_grid(&grid, &face());

        assert!(img.pixels().all(|p| *p == BLACK || *p == WHITE));
        let black = img.pixels().filter(|p| **p == BLACK).count();
        assert!(black >= 30, "only {} ink pixels", black);
    }

    #[test]
    fn test_render_draws_in_own_cell() {
        let grid = CharacterGrid::from_lines(vec![vec![' ', '#', ' ']]);
        let img = render_grid(&grid, &face());

        let inked = |x0: u32, x1: u32| {
            (x0..x1).any(|x| (0..13).any(|y| *img.get_pixel(x, y) == BLACK))
        };
        assert!(!inked(0, 7));
        assert!(inked(7, 14));
        assert!(!inked(14, 21));
    }

    #[test]
    fn test_render_custom_colors() {
        let config = AsciiConfig {
            ink_color: [200, 0, 0],
            paper_color: [0, 0, 40],
            ..Default::default()
        };
        let face = GlyphFace::new(&config).unwrap();
        let img = render_grid(&CharacterGrid::from_lines(vec![vec!['@']]), &face);

        assert!(img.pixels().any(|p| *p == Rgba([200, 0, 0, 255])));
        assert!(img.pixels().all(|p| *p == Rgba([200, 0, 0, 255]) || *p == Rgba([0, 0, 40, 255])));
    }
}
