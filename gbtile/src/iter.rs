/// Iterates through an image of the given width and height tile by tile instead of row by row.
/// The iterator returns the x and y coordinate of a pixel as a tuple on each iteration.
///
/// It works by iterating through a tile row by row, before moving on to the tile to its right,
/// and to the first tile of the next tile row once the right edge of the image is reached. This
/// is the order pixels are stored in planar tile data.
///
/// The width and height are expected to be multiples of the tile size.
pub struct PixelBlockIterator {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,

    x_tile: u32,
    y_tile: u32,
    x: u32,
    y: u32,
}

impl PixelBlockIterator {
    pub fn new(width: u32, height: u32, tile_size: (u32, u32)) -> Self {
        let (tile_width, tile_height) = tile_size;

        Self {
            width,
            height,
            tile_width,
            tile_height,

            x_tile: 0,
            y_tile: 0,
            x: 0,
            y: 0,
        }
    }
}

impl Iterator for PixelBlockIterator {
    type Item = (u32, u32);

    /// Returns the x and y coordinate of the next pixel as a tuple.
    fn next(&mut self) -> Option<Self::Item> {
        if self.y_tile >= self.height || self.width == 0 {
            return None;
        }

        let next_point = (self.x_tile + self.x, self.y_tile + self.y);

        self.x += 1;
        if self.x < self.tile_width {
            return Some(next_point);
        }
        self.x = 0;
        self.y += 1;
        if self.y < self.tile_height {
            return Some(next_point);
        }
        self.y = 0;

        self.x_tile += self.tile_width;
        if self.x_tile >= self.width {
            self.x_tile = 0;
            self.y_tile += self.tile_height;
        }

        Some(next_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_tiles_row_by_row() {
        let points: Vec<(u32, u32)> = PixelBlockIterator::new(4, 4, (2, 2)).collect();
        assert_eq!(
            points,
            vec![
                (0, 0), (1, 0), (0, 1), (1, 1),
                (2, 0), (3, 0), (2, 1), (3, 1),
                (0, 2), (1, 2), (0, 3), (1, 3),
                (2, 2), (3, 2), (2, 3), (3, 3),
            ]
        );
    }

    #[test]
    fn covers_every_pixel_once() {
        let mut points: Vec<(u32, u32)> = PixelBlockIterator::new(24, 16, (8, 8)).collect();
        assert_eq!(points.len(), 24 * 16);
        points.sort();
        points.dedup();
        assert_eq!(points.len(), 24 * 16);
    }

    #[test]
    fn empty_image_yields_nothing() {
        assert_eq!(PixelBlockIterator::new(0, 8, (8, 8)).count(), 0);
        assert_eq!(PixelBlockIterator::new(8, 0, (8, 8)).count(), 0);
    }
}
