use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, GrayImage, ImageEncoder};

use crate::error::IoError;

/// Read a PGM image with a single 8-bit channel.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
///
/// # Errors
///
/// Fails if the file does not exist, does not carry the `pgm` extension, or
/// does not decode to an 8-bit grayscale raster.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if file_path.extension().map_or(true, |ext| {
        ext.to_ascii_lowercase() != "pgm"
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let decoder = PnmDecoder::new(BufReader::new(file))?;
    let img = DynamicImage::from_decoder(decoder)?;

    match img {
        DynamicImage::ImageLuma8(img) => Ok(img),
        _ => Err(IoError::UnsupportedImageFormat),
    }
}

/// Writes the given grayscale image to the given file path as a binary PGM.
///
/// An existing file at `file_path` is overwritten.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM image.
/// * `image` - The grayscale image to write.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    let file = File::create(file_path)?;
    let encoder = PnmEncoder::new(BufWriter::new(file))
        .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary));

    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::L8,
    )?;

    Ok(())
}
