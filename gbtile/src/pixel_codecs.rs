use crate::codec::{TileBase, TileCodecDecoder, TileCodecEncoder, TileEncoderBase};
use crate::error::{TileDecodeError, TileEncodeError};
use crate::formats::BitDepth;
use crate::palette::Palette;
use crate::planar::{narrow, pack_tiles, unpack_tiles, widen};
use crate::quantize::quantize;
use crate::reconstruct::reconstruct;
use gbtile_macros::{tile_decoder_base, tile_encoder_base};
use image::RgbaImage;
use log::debug;

pub fn create_new_encoder(bit_depth: BitDepth) -> Box<dyn TileCodecEncoder> {
    match bit_depth {
        BitDepth::Bpp1 => Box::new(Planar1bppEncoder),
        BitDepth::Bpp2 => Box::new(Planar2bppEncoder),
    }
}

pub fn create_new_decoder(bit_depth: BitDepth) -> Box<dyn TileCodecDecoder> {
    match bit_depth {
        BitDepth::Bpp1 => Box::new(Planar1bppDecoder),
        BitDepth::Bpp2 => Box::new(Planar2bppDecoder),
    }
}

#[tile_encoder_base(8, 8)]
pub struct Planar2bppEncoder;

impl TileCodecEncoder for Planar2bppEncoder {
    fn encode(&self, image: &RgbaImage, palette: &Palette) -> Result<Vec<u8>, TileEncodeError> {
        let padding = self.get_padding(image.width(), image.height());
        if !padding.is_empty() {
            debug!("Padding {}x{} image by {padding:?}", image.width(), image.height());
        }

        let qmap = quantize(image, palette, &padding)?;
        Ok(pack_tiles(&qmap))
    }
}

#[tile_encoder_base(8, 8)]
pub struct Planar1bppEncoder;

impl TileCodecEncoder for Planar1bppEncoder {
    fn encode(&self, image: &RgbaImage, palette: &Palette) -> Result<Vec<u8>, TileEncodeError> {
        let planar = Planar2bppEncoder.encode(image, palette)?;
        Ok(narrow(&planar))
    }
}

#[tile_decoder_base(8, 8)]
pub struct Planar2bppDecoder;

impl TileCodecDecoder for Planar2bppDecoder {
    fn decode(
        &self,
        data: &[u8],
        width: Option<u32>,
        height: Option<u32>,
        palette: &Palette,
    ) -> Result<RgbaImage, TileDecodeError> {
        let tiles = unpack_tiles(data)?;
        reconstruct(&tiles, width, height, palette)
    }
}

#[tile_decoder_base(8, 8)]
pub struct Planar1bppDecoder;

impl TileCodecDecoder for Planar1bppDecoder {
    fn decode(
        &self,
        data: &[u8],
        width: Option<u32>,
        height: Option<u32>,
        palette: &Palette,
    ) -> Result<RgbaImage, TileDecodeError> {
        let tile_bytes = BitDepth::Bpp1.bytes_per_tile();
        if data.len() % tile_bytes != 0 {
            return Err(TileDecodeError::MalformedBuffer {
                len: data.len(),
                tile_bytes,
            });
        }

        Planar2bppDecoder.decode(&widen(data), width, height, palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::DEFAULT_PALETTE;

    #[test]
    fn codecs_use_eight_pixel_tiles() {
        for bit_depth in [BitDepth::Bpp1, BitDepth::Bpp2] {
            assert_eq!(create_new_encoder(bit_depth).get_tile_size(), (8, 8));
            assert_eq!(create_new_decoder(bit_depth).get_tile_size(), (8, 8));
        }
    }

    #[test]
    fn validation_rejects_images_smaller_than_a_tile() {
        let encoder = create_new_encoder(BitDepth::Bpp2);
        assert!(matches!(
            encoder.validate_input(5, 12),
            Err(TileEncodeError::SmallDimensions(5, 12, 8, 8))
        ));
        assert!(encoder.validate_input(8, 8).is_ok());
        assert!(encoder.validate_input(13, 30).is_ok());
    }

    #[test]
    fn one_bit_round_trip() {
        let mono: Vec<u8> = vec![0x3C, 0x42, 0x81, 0x81, 0xFF, 0x81, 0x81, 0x00];
        let palette = Palette::default();

        let image = create_new_decoder(BitDepth::Bpp1)
            .decode(&mono, None, None, &palette)
            .unwrap();
        assert_eq!(*image.get_pixel(0, 0), DEFAULT_PALETTE[0]);
        assert_eq!(*image.get_pixel(2, 0), DEFAULT_PALETTE[3]);

        let encoded = create_new_encoder(BitDepth::Bpp1)
            .encode(&image, &palette)
            .unwrap();
        assert_eq!(encoded, mono);
    }

    #[test]
    fn one_bit_data_must_be_whole_tiles() {
        let result = create_new_decoder(BitDepth::Bpp1).decode(&[0; 12], None, None, &Palette::default());
        assert!(matches!(
            result,
            Err(TileDecodeError::MalformedBuffer { len: 12, tile_bytes: 8 })
        ));
    }

    #[test]
    fn unvalidated_sub_tile_image_is_not_encoded() {
        let image = RgbaImage::from_pixel(5, 5, DEFAULT_PALETTE[0]);
        let result = Planar2bppEncoder.encode(&image, &Palette::default());
        assert!(matches!(
            result,
            Err(TileEncodeError::InvalidDimensions(5, 5, 8))
        ));
    }

    #[test]
    fn padded_image_encodes_to_whole_tiles() {
        let image = RgbaImage::from_pixel(12, 20, DEFAULT_PALETTE[3]);
        let encoded = create_new_encoder(BitDepth::Bpp2)
            .encode(&image, &Palette::default())
            .unwrap();
        // 16x24 after padding
        assert_eq!(encoded.len(), 6 * 16);
    }
}
