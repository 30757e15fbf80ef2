use anyhow::{Context, Result};
use clap::Parser;
use gbtile::formats::BitDepth;
use gbtile::{TileDecoder, TileEncoder};
use log::info;
use std::path::{Path, PathBuf};

/// Converts images to Game Boy tile data, or tile data (.2bpp, .1bpp) back to PNG images.
///
/// The converted file is written next to the input, with the extension of the target format.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image or tile data file to convert
    filename: PathBuf,

    /// Width of the decoded image in pixels, a multiple of 8
    #[arg(long)]
    width: Option<u32>,

    /// Height of the decoded image in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Bits per pixel of the tile data written for an image
    #[arg(long, default_value = "2", value_parser = parse_bit_depth)]
    depth: BitDepth,
}

fn parse_bit_depth(value: &str) -> Result<BitDepth, String> {
    let bits: u8 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    BitDepth::try_from(bits)
        .map_err(|_| format!("{bits} bits per pixel is not supported, use 1 or 2"))
}

fn tiles_to_png(args: &Args, bit_depth: BitDepth) -> Result<PathBuf> {
    let mut decoder = TileDecoder::new(&args.filename)
        .with_context(|| format!("Failed to read {}", args.filename.display()))?
        .with_bit_depth(bit_depth);
    if let Some(width) = args.width {
        decoder = decoder.with_width(width);
    }
    if let Some(height) = args.height {
        decoder = decoder.with_height(height);
    }

    decoder
        .decode()
        .with_context(|| format!("Failed to decode {}", args.filename.display()))?;

    let output = args.filename.with_extension("png");
    decoder
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(output)
}

fn image_to_tiles(args: &Args) -> Result<PathBuf> {
    let encoded = TileEncoder::new(args.depth)
        .encode(&args.filename)
        .with_context(|| format!("Failed to convert {}", args.filename.display()))?;

    let output = args.filename.with_extension(args.depth.extension());
    std::fs::write(&output, encoded)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(output)
}

fn tile_data_depth(path: &Path) -> Option<BitDepth> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(BitDepth::from_extension)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let output = match tile_data_depth(&args.filename) {
        Some(bit_depth) => tiles_to_png(&args, bit_depth)?,
        None => image_to_tiles(&args)?,
    };

    info!("Wrote {}", output.display());
    Ok(())
}
