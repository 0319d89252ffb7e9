//! ASCII character lookup table
//!
//! The ramp runs from the densest glyph to the sparsest one, so dark pixels
//! pick characters near the start and bright pixels characters near the end.

/// Brightness ramp, darkest first. The last entry is a space.
pub const ASCII_RAMP: &str =
    "@$#%&MW8BZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,.\"^`' ";

/// Map a brightness value to its ramp index
///
/// index = floor(brightness / 255 * (len - 1)); 255 lands exactly on the
/// last index.
pub fn ramp_index(brightness: u8) -> usize {
    let last = (ASCII_RAMP.len() - 1) as f64;
    let scale = brightness as f64 / 255.0;
    (scale * last) as usize
}

/// Get the ramp character for a brightness value in 0-255
pub fn char_for_brightness(brightness: u8) -> char {
    // The ramp is pure ASCII, so byte indexing is char indexing
    ASCII_RAMP.as_bytes()[ramp_index(brightness)] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_is_ascii() {
        assert!(ASCII_RAMP.is_ascii());
        assert_eq!(ASCII_RAMP.len(), 59);
    }

    #[test]
    fn test_char_for_brightness_darkest() {
        assert_eq!(char_for_brightness(0), '@');
    }

    #[test]
    fn test_char_for_brightness_brightest() {
        assert_eq!(ramp_index(255), ASCII_RAMP.len() - 1);
        assert_eq!(char_for_brightness(255), ' ');
    }

    #[test]
    fn test_char_for_brightness_mid_gray() {
        assert_eq!(ramp_index(128), 29);
        assert_eq!(char_for_brightness(128), '/');
        assert_eq!(char_for_brightness(127), 't');
    }

    #[test]
    fn test_ramp_index_monotonic() {
        let mut previous = 0;
        for b in 0..=255u8 {
            let index = ramp_index(b);
            assert!(index >= previous, "index dropped at brightness {}", b);
            assert!(index < ASCII_RAMP.len());
            previous = index;
        }
    }
}
