//! gbtile is a Rust library for converting images to and from the planar tile format used for
//! graphics on the Game Boy.
//!
//! Game Boy graphics are made of 8x8 pixel tiles. Each pixel is a 2-bit index into a palette of 4
//! colors, and the indices of a tile row are split over two bytes: one holding the lowest bit of
//! every index, one holding the highest bit. The data itself has no header, so it carries neither
//! its dimensions nor its colors.
//!
//! # Examples
//!
//! Here's a few examples on how to encode and decode tile data.
//!
//! Encoding an image into 2bpp tile data:
//!
//! ```no_run
//! use gbtile::error::TileEncodeError;
//! use gbtile::formats::BitDepth;
//! use gbtile::TileEncoder;
//!
//! # fn main() -> Result<(), TileEncodeError> {
//! # let img_path: &str = "";
//! let encoder = TileEncoder::new(BitDepth::Bpp2);
//! let tile_data = encoder.encode(img_path)?;
//! # Ok(())
//! # }
//! ```
//!
//! Decoding 2bpp tile data:
//!
//! ```no_run
//! use gbtile::error::TileDecodeError;
//! use gbtile::TileDecoder;
//!
//! # fn main() -> Result<(), TileDecodeError> {
//! # let tiles_path: &str = "";
//! # let save_path: &str = "";
//! // Reads the contents of the file in tiles_path, but doesn't decode it yet. Tile data doesn't
//! // know its own width, so it is given here.
//! let mut decoder = TileDecoder::new(tiles_path)?.with_width(128);
//!
//! // Decode file, saving the result in the decoder
//! decoder.decode()?;
//!
//! // Save the decoded image to the given path. PNG files are written with the palette included.
//! decoder.save(save_path)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Hints
//!
//! Easiest place to start off is to look at [`TileEncoder`] for encoding tile data and
//! [`TileDecoder`] for decoding it.

#![warn(missing_docs)]

use crate::codec::{TileCodecDecoder, TileCodecEncoder, TileEncoderBase};
use crate::error::*;
use crate::formats::BitDepth;
use crate::palette::{Color, Palette};
use crate::pixel_codecs::*;
use image::RgbaImage;
use log::debug;
use std::path::Path;

mod codec;
pub mod error;
pub mod formats;
mod iter;
pub mod padding;
pub mod palette;
mod pixel_codecs;
pub mod planar;
mod png_file;
pub mod quantize;
pub mod reconstruct;

pub use png_file::{read_image, write_indexed_png};

/// An RGBA image, together with the palette it was stored with, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PalettedImage {
    /// The pixels of the image.
    pub pixels: RgbaImage,
    /// The colors of the image in index order, up to 4 of them.
    pub palette: Option<Vec<Color>>,
}

impl PalettedImage {
    /// Wraps an image that has no palette of its own.
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            palette: None,
        }
    }

    /// Attaches the colors the image should be indexed with.
    pub fn with_palette(mut self, palette: &[Color]) -> Self {
        self.palette = Some(palette.to_vec());
        self
    }
}

/// Provides all the functionality needed to encode an image into planar tile data.
///
/// The encoder doesn't inherently provide a method to save the tile data into a file, you will be
/// given a [`Vec`] of bytes from [`Self::encode()`], which you can use and save all the bytes to a
/// file yourself.
///
/// Every color in the image has to be in the palette exactly. The palette is the one given with
/// [`Self::with_palette()`], otherwise the one the image was stored with, otherwise the greyscale
/// [`palette::DEFAULT_PALETTE`]. Palettes with less than 4 colors are filled up with greys, see
/// [`Palette::normalize()`].
///
/// For examples, see the documentation on the root of the [`crate`]
#[derive(Default)]
pub struct TileEncoder {
    bit_depth: BitDepth,
    palette: Option<Vec<Color>>,
}

impl TileEncoder {
    /// Creates a new encoder, that encodes tile data with the given `bit_depth`.
    pub fn new(bit_depth: BitDepth) -> Self {
        Self {
            bit_depth,
            ..Default::default()
        }
    }

    /// Sets the palette to index the image with, overriding the image's own palette.
    pub fn with_palette(mut self, palette: &[Color]) -> Self {
        self.palette = Some(palette.to_vec());
        self
    }

    /// Encodes the image file given in `img_path` into tile data.
    ///
    /// This method returns an in-memory representation of the tile data as a [`Vec`] of bytes.
    ///
    /// # Errors
    ///
    /// If anything goes wrong in the encoding process, a [`TileEncodeError`] is returned
    /// instead.
    pub fn encode(&self, img_path: impl AsRef<Path>) -> Result<Vec<u8>, TileEncodeError> {
        let image = read_image(img_path.as_ref())?;
        self.encode_image(&image)
    }

    /// Encodes an in-memory image into tile data.
    ///
    /// # Errors
    ///
    /// A [`TileEncodeError::UnsupportedColor`] is returned if a pixel's color isn't in the
    /// palette, and [`TileEncodeError::SmallDimensions`] if the image is smaller than a tile.
    pub fn encode_image(&self, image: &PalettedImage) -> Result<Vec<u8>, TileEncodeError> {
        let colors = self.palette.as_deref().or(image.palette.as_deref());
        let palette = Palette::normalize(colors);

        let pixels = &image.pixels;
        let encoder = create_new_encoder(self.bit_depth);
        encoder.validate_input(pixels.width(), pixels.height())?;
        let encoded = encoder.encode(pixels, &palette)?;

        debug!(
            "Encoded {}x{} image into {} bytes of {} tile data",
            pixels.width(),
            pixels.height(),
            encoded.len(),
            self.bit_depth.extension()
        );

        Ok(encoded)
    }
}

/// Provides all the functionality needed to decode planar tile data.
///
/// When the data is decoded using [`Self::decode()`], the image is not given to you from that
/// method. You can retrieve it via [`Self::as_decoded()`] or [`Self::into_decoded()`], or if you
/// don't want an in-memory representation of the image, you can immediately save it via
/// [`Self::save()`].
///
/// Tile data doesn't store its dimensions, so they should be given with [`Self::with_width()`]
/// and/or [`Self::with_height()`]. Without them the tiles are laid out as the largest square they
/// fill, see [`reconstruct::infer_dimensions()`].
///
/// For examples, see the documentation on the root of the [`crate`]
#[derive(Default)]
pub struct TileDecoder {
    data: Vec<u8>,
    bit_depth: BitDepth,
    width: Option<u32>,
    height: Option<u32>,
    palette: Option<Vec<Color>>,
    image: Option<PalettedImage>,
}

impl TileDecoder {
    /// Instantiate a new [`TileDecoder`], that can decode the file in the given `tiles_path`,
    /// reading the file's contents.
    ///
    /// This function doesn't decode the file by itself, [`Self::decode()`] must be called.
    ///
    /// # Errors
    ///
    /// An IO error will be returned if the given `tiles_path` is invalid in any way.
    pub fn new(tiles_path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        Ok(Self::new_from_buffer(std::fs::read(tiles_path)?))
    }

    /// Instantiate a new [`TileDecoder`] for tile data that is already in memory.
    pub fn new_from_buffer(buffer: Vec<u8>) -> Self {
        Self {
            data: buffer,
            ..Default::default()
        }
    }

    /// Sets the bit depth the data is stored with. Defaults to [`BitDepth::Bpp2`].
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Sets the width of the decoded image, in pixels. Has to be a multiple of 8.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height of the decoded image, in pixels.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the colors to give the palette indices. Defaults to [`palette::DEFAULT_PALETTE`].
    pub fn with_palette(mut self, palette: &[Color]) -> Self {
        self.palette = Some(palette.to_vec());
        self
    }

    /// Decodes the tile data given in [`Self::new()`] or [`Self::new_from_buffer()`].
    ///
    /// # Errors
    ///
    /// If the data isn't made of whole tiles, or doesn't have enough tiles for the requested
    /// dimensions, a [`TileDecodeError`] is returned.
    pub fn decode(&mut self) -> Result<(), TileDecodeError> {
        let palette = Palette::normalize(self.palette.as_deref());
        let decoder = create_new_decoder(self.bit_depth);
        let pixels = decoder.decode(&self.data, self.width, self.height, &palette)?;

        debug!(
            "Decoded {} bytes of {} tile data into a {}x{} image",
            self.data.len(),
            self.bit_depth.extension(),
            pixels.width(),
            pixels.height()
        );

        self.image = Some(PalettedImage::new(pixels).with_palette(palette.colors()));
        Ok(())
    }

    /// Checks if the decode process has concluded successfully.
    pub fn is_decoded(&self) -> bool {
        self.image.is_some()
    }

    /// Borrows the decoded image, if [`Self::decode()`] has ran successfully.
    pub fn as_decoded(&self) -> &Option<PalettedImage> {
        &self.image
    }

    /// Returns the decoded image, if [`Self::decode()`] has ran successfully, consuming `self`.
    ///
    /// # Errors
    ///
    /// If the image hasn't been decoded yet, a [`TileDecodeError::Undecoded`] is returned.
    pub fn into_decoded(self) -> Result<PalettedImage, TileDecodeError> {
        self.image.ok_or(TileDecodeError::Undecoded)
    }

    /// Saves the currently decoded image into a file, with a format of your choice.
    /// The format the file is saved in is derived from the file extension (.png, .bmp, etc.)
    /// in the given `path`. PNG files are saved as indexed images that keep the palette.
    ///
    /// This does not consume the decoder, so you can save the same image file as many times as you
    /// want.
    ///
    /// # Errors
    ///
    /// If the image hasn't been decoded yet, a [`TileDecodeError::Undecoded`] is returned.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TileDecodeError> {
        let Some(image) = &self.image else {
            return Err(TileDecodeError::Undecoded);
        };
        let path = path.as_ref();

        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            let palette = Palette::normalize(image.palette.as_deref());
            write_indexed_png(path, &image.pixels, &palette)
        } else {
            image.pixels.save(path)?;
            Ok(())
        }
    }
}
