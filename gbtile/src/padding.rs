//! Padding of images whose dimensions aren't a multiple of the tile size.

/// Amount of pixels to add on each side of an image so that its dimensions become multiples of the
/// tile size. Padded pixels always get palette index 0.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    /// Columns added before the image.
    pub left: u32,
    /// Columns added after the image.
    pub right: u32,
    /// Rows added above the image.
    pub top: u32,
    /// Rows added below the image.
    pub bottom: u32,
}

impl Padding {
    /// Computes the padding for an image of `width` by `height` pixels, split into tiles of
    /// `tile_size`.
    ///
    /// The padding on each axis is split in half, with the odd pixel going before the image.
    /// An axis that is at most one tile long is never padded, even when it isn't a whole tile,
    /// so such images still have to be rejected by the encoder.
    pub fn new(width: u32, height: u32, tile_size: (u32, u32)) -> Self {
        let (tile_width, tile_height) = tile_size;
        let (left, right) = Self::axis(width, tile_width);
        let (top, bottom) = Self::axis(height, tile_height);

        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    fn axis(size: u32, tile_size: u32) -> (u32, u32) {
        let rem = size % tile_size;
        if rem == 0 || size <= tile_size {
            return (0, 0);
        }

        let missing = tile_size - rem;
        (missing.div_ceil(2), missing / 2)
    }

    /// Width of an image of `width` pixels once padded.
    pub fn padded_width(&self, width: u32) -> u32 {
        self.left + width + self.right
    }

    /// Height of an image of `height` pixels once padded.
    pub fn padded_height(&self, height: u32) -> u32 {
        self.top + height + self.bottom
    }

    /// Returns true if no side gets any padding.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TILE: (u32, u32) = (8, 8);

    #[rstest]
    #[case::aligned(16, 24, Padding::default())]
    #[case::half_tile(12, 8, Padding { left: 2, right: 2, ..Default::default() })]
    #[case::odd_remainder(10, 21, Padding { left: 3, right: 3, top: 2, bottom: 1 })]
    #[case::one_short(15, 8, Padding { left: 1, right: 0, ..Default::default() })]
    #[case::sub_tile_left_alone(5, 7, Padding::default())]
    #[case::single_tile(8, 8, Padding::default())]
    fn computes_padding(#[case] width: u32, #[case] height: u32, #[case] expected: Padding) {
        assert_eq!(Padding::new(width, height, TILE), expected);
    }

    #[rstest]
    #[case(9, 9)]
    #[case(12, 30)]
    #[case(33, 17)]
    fn padding_is_idempotent(#[case] width: u32, #[case] height: u32) {
        let padding = Padding::new(width, height, TILE);
        let padded_width = padding.padded_width(width);
        let padded_height = padding.padded_height(height);

        assert_eq!(padded_width % 8, 0);
        assert_eq!(padded_height % 8, 0);
        assert!(Padding::new(padded_width, padded_height, TILE).is_empty());
    }
}
