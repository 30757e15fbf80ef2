use gbtile::error::{TileDecodeError, TileEncodeError};
use gbtile::formats::BitDepth;
use gbtile::palette::{Color, DEFAULT_PALETTE};
use gbtile::{PalettedImage, TileDecoder, TileEncoder};
use image::{Rgba, RgbaImage};

const SAMPLE: [u8; 16] = [
    0x28, 0x28, 0x00, 0x00, 0x00, 0x08, 0x04, 0x04, 0x00, 0x08, 0x00, 0x00, 0x82, 0x82, 0xFC, 0x7C,
];

fn decode(data: &[u8]) -> PalettedImage {
    let mut decoder = TileDecoder::new_from_buffer(data.to_vec());
    decoder.decode().unwrap();
    decoder.into_decoded().unwrap()
}

#[test]
fn sample_tile_survives_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("sample.png");

    let mut decoder = TileDecoder::new_from_buffer(SAMPLE.to_vec());
    decoder.decode().unwrap();
    decoder.save(&png_path).unwrap();

    let image = decoder.into_decoded().unwrap();
    assert_eq!(image.pixels.dimensions(), (8, 8));
    assert_eq!(image.palette.as_deref(), Some(&DEFAULT_PALETTE[..]));

    let encoded = TileEncoder::new(BitDepth::Bpp2).encode(&png_path).unwrap();
    assert_eq!(encoded, SAMPLE);
}

#[test]
fn sample_tile_survives_in_memory_round_trip_without_palette() {
    let image = decode(&SAMPLE);
    let without_palette = PalettedImage::new(image.pixels);

    let encoded = TileEncoder::new(BitDepth::Bpp2)
        .encode_image(&without_palette)
        .unwrap();
    assert_eq!(encoded, SAMPLE);
}

#[test]
fn tile_data_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let tiles_path = dir.path().join("sample.2bpp");
    std::fs::write(&tiles_path, SAMPLE.repeat(4)).unwrap();

    let mut decoder = TileDecoder::new(&tiles_path).unwrap().with_height(8);
    decoder.decode().unwrap();
    let image = decoder.into_decoded().unwrap();
    assert_eq!(image.pixels.dimensions(), (32, 8));

    let encoded = TileEncoder::new(BitDepth::Bpp2).encode_image(&image).unwrap();
    assert_eq!(encoded.len(), 4 * 16);
    assert_eq!(encoded, SAMPLE.repeat(4));
}

#[test]
fn custom_palette_order_is_kept_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("custom.png");

    let palette: [Color; 4] = [
        Rgba([0x9B, 0xBC, 0x0F, 0xFF]),
        Rgba([0x0F, 0x38, 0x0F, 0xFF]),
        Rgba([0x8B, 0xAC, 0x0F, 0xFF]),
        Rgba([0x30, 0x62, 0x30, 0xFF]),
    ];

    let mut decoder = TileDecoder::new_from_buffer(SAMPLE.to_vec()).with_palette(&palette);
    decoder.decode().unwrap();
    decoder.save(&png_path).unwrap();

    let default_image = decode(&SAMPLE);
    assert_ne!(decoder.as_decoded().as_ref().unwrap().pixels, default_image.pixels);

    let encoded = TileEncoder::new(BitDepth::Bpp2).encode(&png_path).unwrap();
    assert_eq!(encoded, SAMPLE);
}

#[test]
fn reordered_palette_changes_the_bytes() {
    let image = decode(&SAMPLE);
    let reordered = [
        DEFAULT_PALETTE[3],
        DEFAULT_PALETTE[2],
        DEFAULT_PALETTE[1],
        DEFAULT_PALETTE[0],
    ];

    let encoded = TileEncoder::new(BitDepth::Bpp2)
        .with_palette(&reordered)
        .encode_image(&image)
        .unwrap();
    assert_ne!(encoded, SAMPLE);
    // every index is flipped, so both planes are inverted
    let inverted: Vec<u8> = SAMPLE.iter().map(|byte| !byte).collect();
    assert_eq!(encoded, inverted);
}

#[test]
fn unaligned_image_is_padded_with_index_zero() {
    let black = DEFAULT_PALETTE[3];
    let image = PalettedImage::new(RgbaImage::from_pixel(12, 8, black));

    let encoded = TileEncoder::new(BitDepth::Bpp2).encode_image(&image).unwrap();
    assert_eq!(encoded.len(), 2 * 16);
    // two padding columns on the left of the first tile, two on the right of the second
    assert!(encoded[..16].iter().all(|&byte| byte == 0x3F));
    assert!(encoded[16..].iter().all(|&byte| byte == 0xFC));
}

#[test]
fn image_with_too_many_colors_is_rejected() {
    let image = RgbaImage::from_fn(8, 8, |x, y| {
        Rgba([(x * 30 + 1) as u8, (y * 30 + 1) as u8, 0, 0xFF])
    });

    let result = TileEncoder::new(BitDepth::Bpp2).encode_image(&PalettedImage::new(image));
    assert!(matches!(
        result,
        Err(TileEncodeError::UnsupportedColor { x: 0, y: 0, .. })
    ));
}

#[test]
fn image_smaller_than_a_tile_is_rejected() {
    let image = PalettedImage::new(RgbaImage::from_pixel(5, 5, DEFAULT_PALETTE[0]));

    let result = TileEncoder::new(BitDepth::Bpp2).encode_image(&image);
    assert!(matches!(
        result,
        Err(TileEncodeError::SmallDimensions(5, 5, 8, 8))
    ));
}

#[test]
fn partial_tile_is_rejected() {
    let mut decoder = TileDecoder::new_from_buffer(SAMPLE[..15].to_vec());
    assert!(matches!(
        decoder.decode(),
        Err(TileDecodeError::MalformedBuffer { len: 15, tile_bytes: 16 })
    ));
    assert!(!decoder.is_decoded());
    assert!(matches!(decoder.save("unused.png"), Err(TileDecodeError::Undecoded)));
}

#[test]
fn one_bit_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let png_path = dir.path().join("font.png");
    let font: Vec<u8> = (0u8..32).map(|i| i.wrapping_mul(37)).collect();

    let mut decoder = TileDecoder::new_from_buffer(font.clone())
        .with_bit_depth(BitDepth::Bpp1)
        .with_width(16);
    decoder.decode().unwrap();
    decoder.save(&png_path).unwrap();

    let encoded = TileEncoder::new(BitDepth::Bpp1).encode(&png_path).unwrap();
    assert_eq!(encoded, font);
}
