use image::GrayImage;
use unlens_image::{Image, ImageSize};

use crate::error::IoError;

/// Convert a [`GrayImage`] buffer into a mono8 [`Image`].
///
/// The pixel data is copied, so the returned image owns an independent
/// buffer with the same 8-bit samples.
///
/// # Arguments
///
/// * `src` - The grayscale buffer to convert.
///
/// # Returns
///
/// A grayscale image with a single channel (mono8).
pub fn gray_image_to_mono8(src: &GrayImage) -> Result<Image<u8, 1>, IoError> {
    let size = ImageSize {
        width: src.width() as usize,
        height: src.height() as usize,
    };

    Ok(Image::new(size, src.as_raw().clone())?)
}

/// Convert a mono8 [`Image`] into a [`GrayImage`] buffer.
///
/// The pixel data is copied, so the returned buffer is independent of the
/// input image.
///
/// # Arguments
///
/// * `src` - The mono8 image to convert.
///
/// # Returns
///
/// A grayscale buffer with the same 8-bit samples.
pub fn mono8_to_gray_image(src: &Image<u8, 1>) -> Result<GrayImage, IoError> {
    let [width, height]: [u32; 2] = src.size().into();

    GrayImage::from_raw(width, height, src.as_slice().to_vec())
        .ok_or(IoError::InvalidImageBuffer)
}

#[cfg(test)]
mod tests {
    use super::{gray_image_to_mono8, mono8_to_gray_image};
    use crate::error::IoError;
    use image::GrayImage;

    #[test]
    fn round_trip_is_pixel_identical() -> Result<(), IoError> {
        let src = GrayImage::from_fn(7, 5, |x, y| image::Luma([(3 * x + y) as u8]));

        let mono8 = gray_image_to_mono8(&src)?;
        assert_eq!(mono8.size().width, 7);
        assert_eq!(mono8.size().height, 5);

        let back = mono8_to_gray_image(&mono8)?;
        assert_eq!(back.dimensions(), src.dimensions());
        assert_eq!(back.as_raw(), src.as_raw());

        Ok(())
    }

    #[test]
    fn conversion_copies_the_buffer() -> Result<(), IoError> {
        let mut src = GrayImage::from_pixel(2, 2, image::Luma([10]));

        let mono8 = gray_image_to_mono8(&src)?;

        // mutating the source must not affect the converted image
        src.put_pixel(0, 0, image::Luma([99]));
        assert_eq!(mono8.get([0, 0, 0]), Some(&10));

        Ok(())
    }
}
