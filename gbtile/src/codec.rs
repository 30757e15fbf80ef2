use crate::error::{TileDecodeError, TileEncodeError};
use crate::padding::Padding;
use crate::palette::Palette;
use image::RgbaImage;

pub trait TileBase {
    fn get_tile_size(&self) -> (u32, u32);
}

pub trait TileEncoderBase: TileBase {
    fn get_padding(&self, width: u32, height: u32) -> Padding {
        Padding::new(width, height, self.get_tile_size())
    }

    fn validate_input(&self, width: u32, height: u32) -> Result<(), TileEncodeError> {
        let (tile_width, tile_height) = self.get_tile_size();

        if width < tile_width || height < tile_height {
            return Err(TileEncodeError::SmallDimensions(
                width,
                height,
                tile_width,
                tile_height,
            ));
        }

        Ok(())
    }
}

pub trait TileCodecEncoder: TileEncoderBase {
    fn encode(&self, image: &RgbaImage, palette: &Palette) -> Result<Vec<u8>, TileEncodeError>;
}

pub trait TileCodecDecoder: TileBase {
    fn decode(
        &self,
        data: &[u8],
        width: Option<u32>,
        height: Option<u32>,
        palette: &Palette,
    ) -> Result<RgbaImage, TileDecodeError>;
}
