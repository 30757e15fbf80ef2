use crate::error::{TileDecodeError, TileEncodeError};
use crate::palette::{Color, Palette, PALETTE_SIZE};
use crate::PalettedImage;
use image::{ImageFormat, ImageReader, Rgba, RgbaImage};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Reads the image file in `path` as RGBA.
///
/// Indexed PNG files additionally have their palette read, so that the colors keep the indices
/// they had in the file. Palettes with more than 4 colors can't be used for 2bpp data and are left
/// out.
pub fn read_image(path: &Path) -> Result<PalettedImage, TileEncodeError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let is_png = reader.format() == Some(ImageFormat::Png);
    let pixels = reader.decode()?.into_rgba8();

    let palette = if is_png { read_png_palette(path)? } else { None };

    Ok(PalettedImage { pixels, palette })
}

fn read_png_palette(path: &Path) -> Result<Option<Vec<Color>>, TileEncodeError> {
    let decoder = png::Decoder::new(BufReader::new(File::open(path)?));
    let reader = decoder.read_info()?;
    let info = reader.info();

    if info.color_type != png::ColorType::Indexed {
        return Ok(None);
    }
    let Some(plte) = info.palette.as_deref() else {
        return Ok(None);
    };

    let trns = info.trns.as_deref().unwrap_or_default();
    let colors: Vec<Color> = plte
        .chunks_exact(3)
        .enumerate()
        .map(|(i, rgb)| Rgba([rgb[0], rgb[1], rgb[2], trns.get(i).copied().unwrap_or(0xFF)]))
        .collect();

    if colors.len() > PALETTE_SIZE {
        warn!(
            "Ignoring the {}-color palette of {}, only up to {PALETTE_SIZE} colors can be used",
            colors.len(),
            path.display()
        );
        return Ok(None);
    }

    debug!("Using the {}-color palette of {}", colors.len(), path.display());
    Ok(Some(colors))
}

/// Writes `image` to `path` as a 2-bit indexed PNG, with `palette` as its color table.
///
/// # Errors
///
/// Every pixel of `image` has to have a color of `palette`, otherwise a
/// [`TileDecodeError::Parsing`] is returned and nothing is written.
pub fn write_indexed_png(
    path: &Path,
    image: &RgbaImage,
    palette: &Palette,
) -> Result<(), TileDecodeError> {
    let width = image.width() as usize;
    let row_bytes = width.div_ceil(4);
    let mut packed = vec![0u8; row_bytes * image.height() as usize];

    for (x, y, pixel) in image.enumerate_pixels() {
        let index = palette
            .index_of(pixel)
            .ok_or("The image has a color that isn't in its palette.")?;
        let x = x as usize;
        let bit_pos = 3 - (x % 4);
        packed[y as usize * row_bytes + x / 4] |= index << (bit_pos * 2);
    }

    let colors = palette.colors();
    let rgb: Vec<u8> = colors.iter().flat_map(|c| [c.0[0], c.0[1], c.0[2]]).collect();

    let file = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(file, image.width(), image.height());
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Two);
    encoder.set_compression(png::Compression::Best);
    encoder.set_palette(rgb);
    if colors.iter().any(|c| c.0[3] != 0xFF) {
        let alpha: Vec<u8> = colors.iter().map(|c| c.0[3]).collect();
        encoder.set_trns(alpha);
    }

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&packed)?;
    writer.finish()?;

    Ok(())
}
