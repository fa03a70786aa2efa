use unlens_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The pixel values of the nearest neighbor.
pub(crate) fn nearest_neighbor_interpolation<const C: usize>(
    image: &Image<f32, C>,
    u: f32,
    v: f32,
) -> [f32; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = (u.round() as usize).min(cols - 1);
    let iv = (v.round() as usize).min(rows - 1);

    let base = (iv * cols + iu) * C;

    let data = image.as_slice();
    let p = unsafe { data.get_unchecked(base..base + C) };

    let mut pixel = [0.0; C];
    pixel.copy_from_slice(p);

    pixel
}

#[cfg(test)]
mod tests {
    use unlens_image::{Image, ImageError, ImageSize};

    #[test]
    fn nearest_rounds_to_closest() -> Result<(), ImageError> {
        let image = Image::<f32, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 3.0],
        )?;

        let pixel = super::nearest_neighbor_interpolation(&image, 0.9, 0.1);
        assert!((pixel[0] - 1.0).abs() < 1e-6);

        Ok(())
    }
}
