//! The 4-color palettes that 2bpp tile data indexes into.
//!
//! Tile data doesn't store any colors, only 2-bit indices. A [`Palette`] gives each index a
//! color: the color at position 0 is index 0, and so on. The order of a palette therefore matters
//! just as much as its colors, the same image encoded with a reordered palette gives different
//! bytes.

use image::Rgba;

/// An RGBA color. Two colors are only the same if all four channels match exactly.
pub type Color = Rgba<u8>;

/// The amount of colors a 2bpp palette holds.
pub const PALETTE_SIZE: usize = 4;

const WHITE: Color = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
const BLACK: Color = Rgba([0x00, 0x00, 0x00, 0xFF]);
const GREY: Color = Rgba([0x55, 0x55, 0x55, 0xFF]);
const GRAY: Color = Rgba([0xAA, 0xAA, 0xAA, 0xFF]);

/// Greyscale colors used to fill up palettes that have less than 4 colors, in the order they are
/// appended.
pub const GREYSCALE_RAMP: [Color; PALETTE_SIZE] = [WHITE, BLACK, GREY, GRAY];

/// The palette used when none is given: [`GREYSCALE_RAMP`] from the brightest to the darkest
/// color.
pub const DEFAULT_PALETTE: [Color; PALETTE_SIZE] = [WHITE, GRAY, GREY, BLACK];

/// Exactly four colors, indexed by their position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([Color; PALETTE_SIZE]);

impl Palette {
    /// Builds a palette out of up to 4 colors.
    ///
    /// Without any colors this is [`DEFAULT_PALETTE`]. Otherwise the colors keep their order and
    /// the colors of [`GREYSCALE_RAMP`] that aren't in there yet are appended until there are 4.
    /// Colors past the 4th can't be addressed by a 2-bit index and are left out.
    pub fn normalize(colors: Option<&[Color]>) -> Self {
        let colors = match colors {
            Some(colors) if !colors.is_empty() => colors,
            _ => return Self::default(),
        };

        let mut padded: Vec<Color> = colors.iter().take(PALETTE_SIZE).copied().collect();
        for hue in GREYSCALE_RAMP {
            if padded.len() >= PALETTE_SIZE {
                break;
            }
            if !padded.contains(&hue) {
                padded.push(hue);
            }
        }

        // The ramp has 4 distinct colors, so a short palette always ends up full.
        let mut entries = DEFAULT_PALETTE;
        entries.copy_from_slice(&padded[..PALETTE_SIZE]);
        Self(entries)
    }

    /// Returns the index of `color` in this palette, if present.
    pub fn index_of(&self, color: &Color) -> Option<u8> {
        self.0.iter().position(|c| c == color).map(|i| i as u8)
    }

    /// Returns the color for a 2-bit index. Only the lowest two bits of `index` are used.
    pub fn color(&self, index: u8) -> Color {
        self.0[usize::from(index & 0x3)]
    }

    /// The four colors, in index order.
    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE)
    }
}
