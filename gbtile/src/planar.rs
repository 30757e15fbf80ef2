//! Conversion between 2-bit palette indices and planar tile data.
//!
//! Every 8x8 tile is stored in 16 bytes, two bytes per pixel row. The first byte of a row holds
//! bit 0 of every pixel's index, the second byte holds bit 1, with the leftmost pixel in the most
//! significant bit. Read as a little-endian `u16`, a row therefore has the low plane in its low
//! byte and the high plane in its high byte.

use crate::error::TileDecodeError;
use crate::iter::PixelBlockIterator;
use crate::quantize::QuantizedMap;
use byteorder::{ByteOrder, LittleEndian};

/// Width and height of a tile, in pixels.
pub const TILE_SIZE: u32 = 8;

/// The amount of pixels in a tile.
pub const TILE_PIXELS: usize = (TILE_SIZE * TILE_SIZE) as usize;

/// Bytes used by one tile of 2bpp data.
pub const BYTES_PER_TILE_2BPP: usize = 16;

/// Bytes used by one tile of 1bpp data.
pub const BYTES_PER_TILE_1BPP: usize = 8;

/// The palette indices of an 8x8 tile, row by row.
pub type Tile = [u8; TILE_PIXELS];

/// Packs a tile-aligned map of palette indices into 2bpp planar tile data, tile by tile.
///
/// The result is always 16 bytes per tile. A [`QuantizedMap`] is always tile-aligned, so every
/// tile is complete.
pub fn pack_tiles(qmap: &QuantizedMap) -> Vec<u8> {
    let width = qmap.width();
    let height = qmap.height();
    let tile_count = ((width / TILE_SIZE) * (height / TILE_SIZE)) as usize;
    let mut dest = vec![0u8; tile_count * BYTES_PER_TILE_2BPP];

    let mut dest_idx = 0;
    let mut row: u16 = 0;

    for (x, y) in PixelBlockIterator::new(width, height, (TILE_SIZE, TILE_SIZE)) {
        let index = u16::from(qmap.get(x, y));
        let col = x % TILE_SIZE;
        let bit = 7 - col;

        row |= (index & 0x1) << bit;
        row |= ((index >> 1) & 0x1) << (bit + 8);

        if col == TILE_SIZE - 1 {
            LittleEndian::write_u16(&mut dest[dest_idx..dest_idx + 2], row);
            dest_idx += 2;
            row = 0;
        }
    }

    dest
}

/// Unpacks 2bpp planar tile data into tiles of palette indices.
///
/// # Errors
///
/// Returns [`TileDecodeError::MalformedBuffer`] if `data` doesn't consist of whole tiles. No tile
/// is unpacked in that case.
pub fn unpack_tiles(data: &[u8]) -> Result<Vec<Tile>, TileDecodeError> {
    if data.len() % BYTES_PER_TILE_2BPP != 0 {
        return Err(TileDecodeError::MalformedBuffer {
            len: data.len(),
            tile_bytes: BYTES_PER_TILE_2BPP,
        });
    }

    let tiles = data
        .chunks_exact(BYTES_PER_TILE_2BPP)
        .map(|tile_data| {
            let mut tile = [0u8; TILE_PIXELS];
            let strips = tile.chunks_exact_mut(TILE_SIZE as usize);
            for (strip, row_data) in strips.zip(tile_data.chunks_exact(2)) {
                let row = LittleEndian::read_u16(row_data);
                for (col, index) in strip.iter_mut().enumerate() {
                    let bit = 7 - col;
                    let low = (row >> bit) & 0x1;
                    let high = (row >> (bit + 8)) & 0x1;
                    *index = (low | (high << 1)) as u8;
                }
            }
            tile
        })
        .collect();

    Ok(tiles)
}

/// Reduces 2bpp tile data to 1bpp by keeping only the low plane of every row.
///
/// This is only lossless if every index in the data is 0 or 1. That isn't checked, indices 2 and
/// 3 silently turn into 0 and 1.
pub fn narrow(data: &[u8]) -> Vec<u8> {
    data.iter().step_by(2).copied().collect()
}

/// Expands 1bpp tile data to 2bpp by using every byte for both planes, so set bits become index
/// 3 and cleared bits index 0.
pub fn widen(data: &[u8]) -> Vec<u8> {
    data.iter().flat_map(|&byte| [byte, byte]).collect()
}
