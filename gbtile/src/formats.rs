//! Contains the bit depths tile data can be stored in.
//!
//! Game Boy tiles are normally stored with 2 bits per pixel, which allows for 4 colors. Fonts and
//! other graphics that only use 2 colors are often stored with 1 bit per pixel instead, which
//! halves their size. The hardware only reads 2bpp tiles, so 1bpp data is expanded by the game
//! before it gets copied into video memory.
//!
//! See [`crate::TileEncoder`] and [`crate::TileDecoder`] for where these are used.

use crate::error::TileEncodeError;
use crate::planar::{BYTES_PER_TILE_1BPP, BYTES_PER_TILE_2BPP};

/// The amount of bits each pixel takes up in tile data.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BitDepth {
    /// One bit per pixel, only a single plane per tile row. Every set bit is decoded as palette
    /// index 3, every cleared bit as index 0. Encoding to this depth keeps just the lowest bit of
    /// every index, so images should only use palette indices 0 and 1.
    Bpp1 = 1,
    /// Two bits per pixel, a low and a high plane per tile row.
    #[default]
    Bpp2 = 2,
}

impl BitDepth {
    /// The amount of bytes one 8x8 tile takes up.
    pub fn bytes_per_tile(self) -> usize {
        match self {
            Self::Bpp1 => BYTES_PER_TILE_1BPP,
            Self::Bpp2 => BYTES_PER_TILE_2BPP,
        }
    }

    /// The file extension used for tile data of this depth, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Bpp1 => "1bpp",
            Self::Bpp2 => "2bpp",
        }
    }

    /// Returns the bit depth belonging to a file extension, if it is one of ours.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "1bpp" => Some(Self::Bpp1),
            "2bpp" => Some(Self::Bpp2),
            _ => None,
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(value: BitDepth) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = TileEncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Bpp1),
            2 => Ok(Self::Bpp2),
            _ => Err(TileEncodeError::Format),
        }
    }
}
