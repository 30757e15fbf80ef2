//! Mapping of image colors to palette indices.

use crate::error::TileEncodeError;
use crate::padding::Padding;
use crate::palette::Palette;
use crate::planar::TILE_SIZE;
use image::RgbaImage;

/// 2-bit palette indices of a padded image, stored row by row. Both dimensions are always a
/// multiple of the tile size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedMap {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl QuantizedMap {
    /// Wraps already quantized indices, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`TileEncodeError::InvalidDimensions`] if `width` or `height` isn't a multiple of
    /// the tile size, and [`TileEncodeError::IndexCount`] if `indices` doesn't hold
    /// `width * height` entries.
    pub fn new(width: u32, height: u32, indices: Vec<u8>) -> Result<Self, TileEncodeError> {
        if width % TILE_SIZE != 0 || height % TILE_SIZE != 0 {
            return Err(TileEncodeError::InvalidDimensions(width, height, TILE_SIZE));
        }

        let expected = (width as usize).checked_mul(height as usize);
        if expected != Some(indices.len()) {
            return Err(TileEncodeError::IndexCount {
                len: indices.len(),
                expected: expected.unwrap_or(usize::MAX),
            });
        }

        Ok(Self {
            width,
            height,
            indices,
        })
    }

    /// Width of the map in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the map in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the index at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the map.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }

    /// All indices, row by row.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}

/// Maps every pixel of `image` to the index of its color in `palette`, surrounding the result
/// with `padding` cells of index 0.
///
/// Colors are matched exactly. The first pixel (in row order) whose color isn't in the palette
/// aborts quantization with [`TileEncodeError::UnsupportedColor`]. If the padded image isn't made
/// of whole tiles, [`TileEncodeError::InvalidDimensions`] is returned.
pub fn quantize(
    image: &RgbaImage,
    palette: &Palette,
    padding: &Padding,
) -> Result<QuantizedMap, TileEncodeError> {
    let width = padding.padded_width(image.width());
    let height = padding.padded_height(image.height());
    let mut indices = vec![0u8; (width * height) as usize];

    for (x, y, pixel) in image.enumerate_pixels() {
        let Some(index) = palette.index_of(pixel) else {
            return Err(TileEncodeError::UnsupportedColor {
                color: *pixel,
                x,
                y,
            });
        };

        let dest_x = x + padding.left;
        let dest_y = y + padding.top;
        indices[(dest_y * width + dest_x) as usize] = index;
    }

    QuantizedMap::new(width, height, indices)
}
