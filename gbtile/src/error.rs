//! Error types returned while encoding images into tile data and decoding tile data into
//! images.

use crate::palette::Color;
use image::ImageError;
use std::error::Error;
use std::fmt;

/// Errors that can occur while turning an image into planar tile data.
#[derive(Debug)]
pub enum TileEncodeError {
    /// Reading or decoding the source image failed.
    Encode(ImageError),
    /// The PNG palette of the source image couldn't be read.
    Png(png::DecodingError),
    /// A pixel's color isn't one of the four palette entries.
    UnsupportedColor {
        /// The color that couldn't be matched.
        color: Color,
        /// Column of the pixel in the source image.
        x: u32,
        /// Row of the pixel in the source image.
        y: u32,
    },
    /// The requested bit depth isn't supported.
    Format,
    /// The image is smaller than a single tile: `(width, height, tile_width, tile_height)`.
    SmallDimensions(u32, u32, u32, u32),
    /// The padded image isn't made of whole tiles: `(width, height, tile_size)`.
    InvalidDimensions(u32, u32, u32),
    /// A map of palette indices doesn't hold one index per pixel.
    IndexCount {
        /// Amount of indices given.
        len: usize,
        /// Amount of pixels in the map.
        expected: usize,
    },
}

impl Error for TileEncodeError {}

impl fmt::Display for TileEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "{err}"),
            Self::Png(err) => write!(f, "{err}"),
            Self::UnsupportedColor { color, x, y } => {
                let [r, g, b, a] = color.0;
                write!(f, "The color #{r:02x}{g:02x}{b:02x}{a:02x} at ({x}, {y}) is not in the palette.")
            }
            Self::Format => write!(f, "Unsupported bit depth supplied for tile encoding."),
            Self::SmallDimensions(width, height, tile_width, tile_height) => write!(f, "The dimensions for the input image ({width}x{height}) are too small! Dimensions have to be at least {tile_width}x{tile_height}."),
            Self::InvalidDimensions(width, height, tile_size) => write!(f, "The dimensions for the input image ({width}x{height}) are invalid! Dimensions have to be a multiple of {tile_size}."),
            Self::IndexCount { len, expected } => write!(f, "Got {len} palette indices for {expected} pixels."),
        }
    }
}

impl From<ImageError> for TileEncodeError {
    fn from(value: ImageError) -> Self {
        Self::Encode(value)
    }
}

impl From<png::DecodingError> for TileEncodeError {
    fn from(value: png::DecodingError) -> Self {
        Self::Png(value)
    }
}

impl From<std::io::Error> for TileEncodeError {
    fn from(value: std::io::Error) -> Self {
        Self::Encode(ImageError::IoError(value))
    }
}

/// Errors that can occur while turning planar tile data into an image.
#[derive(Debug)]
pub enum TileDecodeError {
    /// The buffer doesn't hold a whole number of tiles.
    MalformedBuffer {
        /// Length of the buffer in bytes.
        len: usize,
        /// Size of one tile in bytes.
        tile_bytes: usize,
    },
    /// The requested dimensions need more tiles than the buffer holds.
    IndexOutOfRange {
        /// Tiles covered by the image.
        needed: usize,
        /// Tiles in the buffer.
        available: usize,
    },
    /// The given or inferred dimensions can't describe a tile grid: `(width, height)`.
    InvalidDimensions(u32, u32),
    /// The decoded image was requested before decoding succeeded.
    Undecoded,
    /// The image couldn't be written in the requested form.
    Parsing(&'static str),
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// Saving the image in a non-PNG format failed.
    Image(ImageError),
    /// Writing the indexed PNG failed.
    Png(png::EncodingError),
}

impl Error for TileDecodeError {}

impl fmt::Display for TileDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBuffer { len, tile_bytes } => write!(
                f,
                "The tile data is {len} bytes long, which is not a multiple of {tile_bytes}."
            ),
            Self::IndexOutOfRange { needed, available } => write!(
                f,
                "The image needs {needed} tiles, but the tile data only holds {available}."
            ),
            Self::InvalidDimensions(width, height) => write!(
                f,
                "The dimensions {width}x{height} are invalid! Width has to be a non-zero multiple of 8 and height non-zero."
            ),
            Self::Undecoded => write!(f, "This tile data has not been decoded successfully."),
            Self::Parsing(msg) => write!(f, "{msg}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Image(err) => write!(f, "{err}"),
            Self::Png(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for TileDecodeError {
    fn from(value: std::io::Error) -> Self {
        TileDecodeError::Io(value)
    }
}

impl From<&'static str> for TileDecodeError {
    fn from(value: &'static str) -> Self {
        TileDecodeError::Parsing(value)
    }
}

impl From<ImageError> for TileDecodeError {
    fn from(value: ImageError) -> Self {
        TileDecodeError::Image(value)
    }
}

impl From<png::EncodingError> for TileDecodeError {
    fn from(value: png::EncodingError) -> Self {
        TileDecodeError::Png(value)
    }
}
