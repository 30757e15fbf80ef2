//! Assembling decoded tiles back into an image.

use crate::error::TileDecodeError;
use crate::palette::Palette;
use crate::planar::{Tile, TILE_SIZE};
use image::RgbaImage;
use log::debug;

/// Works out the dimensions of an image made of `tile_count` tiles, given none, one or both of
/// its dimensions.
///
/// Tile data doesn't store its dimensions. Without any, the image becomes the largest square
/// that fits in the tiles. With only one, the other is the amount of whole tile rows (or columns)
/// the tiles fill, times 8.
///
/// # Errors
///
/// Returns [`TileDecodeError::InvalidDimensions`] if a given or inferred dimension is 0, or if the
/// width isn't a multiple of 8.
pub fn infer_dimensions(
    tile_count: usize,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<(u32, u32), TileDecodeError> {
    let invalid = || {
        TileDecodeError::InvalidDimensions(width.unwrap_or_default(), height.unwrap_or_default())
    };
    if width == Some(0) || height == Some(0) {
        return Err(invalid());
    }

    let tile_count = u32::try_from(tile_count).map_err(|_| invalid())?;
    let dimensions = match (width, height) {
        (Some(width), Some(height)) => (width, height),
        (None, None) => {
            let side = (f64::from(tile_count).sqrt() as u32) * TILE_SIZE;
            (side, side)
        }
        (None, Some(height)) => (tile_span(tile_count, height).ok_or_else(invalid)?, height),
        (Some(width), None) => (width, tile_span(tile_count, width).ok_or_else(invalid)?),
    };

    let (width, height) = dimensions;
    if width == 0 || height == 0 || width % TILE_SIZE != 0 {
        return Err(TileDecodeError::InvalidDimensions(width, height));
    }

    Ok(dimensions)
}

/// Length in pixels of the other side of a grid of `tile_count` tiles, one side of which is
/// `known` pixels long. Only whole rows (or columns) of tiles count.
fn tile_span(tile_count: u32, known: u32) -> Option<u32> {
    tile_count
        .checked_mul(TILE_SIZE)
        .map(|pixels| pixels / known)?
        .checked_mul(TILE_SIZE)
}

/// Lays out `tiles` left to right, top to bottom, in an image of the given dimensions, giving
/// every pixel the color its index has in `palette`.
///
/// A height that isn't a multiple of 8 cuts the last row of tiles short. Tiles past the end of
/// the image are ignored.
///
/// # Errors
///
/// Besides the errors of [`infer_dimensions()`], this returns
/// [`TileDecodeError::IndexOutOfRange`] if the image needs more tiles than given.
pub fn reconstruct(
    tiles: &[Tile],
    width: Option<u32>,
    height: Option<u32>,
    palette: &Palette,
) -> Result<RgbaImage, TileDecodeError> {
    let (width, height) = infer_dimensions(tiles.len(), width, height)?;

    let tiles_per_row = (width / TILE_SIZE) as usize;
    let tile_rows = height.div_ceil(TILE_SIZE) as usize;
    let needed = tiles_per_row * tile_rows;
    if needed > tiles.len() {
        return Err(TileDecodeError::IndexOutOfRange {
            needed,
            available: tiles.len(),
        });
    }

    debug!(
        "Reconstructing {width}x{height} image from {needed} of {} tiles",
        tiles.len()
    );

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let tile = &tiles[(y / TILE_SIZE) as usize * tiles_per_row + (x / TILE_SIZE) as usize];
        let strip = (y % TILE_SIZE) * TILE_SIZE;
        palette.color(tile[(strip + x % TILE_SIZE) as usize])
    }))
}
