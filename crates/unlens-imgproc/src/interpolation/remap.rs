use crate::parallel;

use super::interpolate::interpolate_pixel;
use super::InterpolationMode;
use ndarray::Array2;
use unlens_image::{Image, ImageError};

/// Apply generic geometric transformation to an image.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `dst` - The output image container with shape (height, width, C).
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
/// * `interpolation` - The interpolation mode to use.
///
/// # Errors
///
/// * The mapx and mapy must have the same size.
/// * The output image must have the same size as the mapx and mapy.
pub fn remap<const C: usize>(
    src: &Image<f32, C>,
    dst: &mut Image<f32, C>,
    map_x: &Array2<f32>,
    map_y: &Array2<f32>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    if map_x.dim() != map_y.dim() {
        return Err(ImageError::InvalidImageSize(
            map_x.dim().1,
            map_x.dim().0,
            map_y.dim().1,
            map_y.dim().0,
        ));
    }

    if (dst.rows(), dst.cols()) != map_x.dim() {
        return Err(ImageError::InvalidImageSize(
            map_x.dim().1,
            map_x.dim().0,
            dst.cols(),
            dst.rows(),
        ));
    }

    let map_x_slice = map_x.as_slice().ok_or(ImageError::ImageDataNotContiguous)?;
    let map_y_slice = map_y.as_slice().ok_or(ImageError::ImageDataNotContiguous)?;

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(dst, map_x_slice, map_y_slice, |&x, &y, dst_pixel| {
        // interpolate the pixel value
        let pixel = interpolate_pixel(src, x, y, interpolation);
        dst_pixel.copy_from_slice(&pixel);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use unlens_image::{Image, ImageError, ImageSize};

    #[test]
    fn remap_smoke() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 3,
                height: 3,
            },
            vec![0f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        )?;

        let map_x = Array2::from_shape_vec((2, 2), vec![0.0, 2.0, 0.0, 2.0])?;
        let map_y = Array2::from_shape_vec((2, 2), vec![0.0, 0.0, 2.0, 2.0])?;

        let expected = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 2.0, 6.0, 8.0],
        )?;

        let mut image_transformed = Image::<_, 1>::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            0.0,
        )?;

        super::remap(
            &image,
            &mut image_transformed,
            &map_x,
            &map_y,
            super::InterpolationMode::Bilinear,
        )?;

        assert_eq!(image_transformed.num_channels(), 1);
        assert_eq!(image_transformed.size().width, 2);
        assert_eq!(image_transformed.size().height, 2);

        for (a, b) in image_transformed
            .as_slice()
            .iter()
            .zip(expected.as_slice().iter())
        {
            assert!((a - b).abs() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn remap_size_mismatch() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0.0,
        )?;

        let map_x = Array2::from_shape_vec((2, 2), vec![0.0; 4])?;
        let map_y = Array2::from_shape_vec((2, 2), vec![0.0; 4])?;

        // destination does not match the map shape
        let mut dst = Image::<f32, 1>::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0.0,
        )?;

        let res = super::remap(
            &image,
            &mut dst,
            &map_x,
            &map_y,
            super::InterpolationMode::Nearest,
        );
        assert!(matches!(res, Err(ImageError::InvalidImageSize(2, 2, 3, 3))));

        Ok(())
    }
}
