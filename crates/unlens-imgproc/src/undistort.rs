use ndarray::{Array1, Array2};

use crate::calibration::distortion::{generate_correction_map, RadialTangentialDistortion};
use crate::interpolation::{remap, InterpolationMode};
use unlens_image::{ops, Image, ImageDtype, ImageError};

/// Errors that can occur during undistortion.
#[derive(thiserror::Error, Debug)]
pub enum UndistortError {
    /// The camera matrix does not have the expected 3x3 shape.
    #[error("Camera matrix must be a 3x3 array, got {0}x{1}")]
    InvalidCameraMatrix(usize, usize),

    /// The input points do not have the expected Nx2 shape.
    #[error("Input points must be an Nx2 array, got {0}x{1}")]
    InvalidPointsShape(usize, usize),

    /// Error to operate on the underlying images.
    #[error("Failed to operate on the image. {0}")]
    Image(#[from] ImageError),
}

// number of fixed-point rounds when inverting the forward distortion model
const INVERSION_ITERATIONS: usize = 5;

fn unpack_camera_matrix(camera_matrix: &Array2<f64>) -> Result<(f64, f64, f64, f64), UndistortError> {
    let shape = camera_matrix.shape();
    if shape != [3, 3] {
        return Err(UndistortError::InvalidCameraMatrix(shape[0], shape[1]));
    }

    Ok((
        camera_matrix[[0, 0]],
        camera_matrix[[1, 1]],
        camera_matrix[[0, 2]],
        camera_matrix[[1, 2]],
    ))
}

/// Compensate an image for lens distortion.
///
/// For every pixel of the output image the forward distortion model locates
/// the corresponding pixel in the distorted input, which is then sampled with
/// bilinear interpolation. The output has the same size as the input.
///
/// # Arguments
///
/// * `src` - The distorted input image.
/// * `dst` - The corrected output image, same size as `src`.
/// * `camera_matrix` - The 3x3 camera matrix.
/// * `dist_coeffs` - The distortion coefficients in `[k1, k2, p1, p2]` layout.
pub fn undistort_image<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    camera_matrix: &Array2<f64>,
    dist_coeffs: &Array1<f64>,
) -> Result<(), UndistortError> {
    let (fx, fy, cx, cy) = unpack_camera_matrix(camera_matrix)?;

    if src.size() != dst.size() {
        return Err(UndistortError::Image(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )));
    }

    let distortion = RadialTangentialDistortion::from_coeffs(dist_coeffs);
    let (map_x, map_y) = generate_correction_map(fx, fy, cx, cy, &distortion, &src.size())?;

    let mut src_f32 = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    ops::cast_and_scale(src, &mut src_f32, 1.0)?;

    let mut dst_f32 = Image::<f32, C>::from_size_val(src.size(), 0.0)?;
    remap(
        &src_f32,
        &mut dst_f32,
        &map_x,
        &map_y,
        InterpolationMode::Bilinear,
    )?;

    dst.as_slice_mut()
        .iter_mut()
        .zip(dst_f32.as_slice().iter())
        .for_each(|(out, &val)| *out = u8::from_f32(val));

    Ok(())
}

/// Compute the ideal pixel coordinates of observed (distorted) points.
///
/// The forward distortion model is inverted with a fixed number of
/// fixed-point iterations; the result is reprojected through the same camera
/// matrix, so distorted pixel coordinates map to ideal pixel coordinates.
///
/// # Arguments
///
/// * `src_points` - The observed points as an Nx2 array of pixel coordinates.
/// * `camera_matrix` - The 3x3 camera matrix.
/// * `dist_coeffs` - The distortion coefficients in `[k1, k2, p1, p2]` layout.
///
/// # Returns
///
/// An Nx2 array with the ideal pixel coordinates of the input points.
pub fn undistort_points(
    src_points: &Array2<f64>,
    camera_matrix: &Array2<f64>,
    dist_coeffs: &Array1<f64>,
) -> Result<Array2<f64>, UndistortError> {
    let shape = src_points.shape();
    if shape[1] != 2 {
        return Err(UndistortError::InvalidPointsShape(shape[0], shape[1]));
    }

    let (fx, fy, cx, cy) = unpack_camera_matrix(camera_matrix)?;
    let distortion = RadialTangentialDistortion::from_coeffs(dist_coeffs);
    let (k1, k2, p1, p2) = (distortion.k1, distortion.k2, distortion.p1, distortion.p2);

    let mut dst_points = Array2::zeros((src_points.nrows(), 2));

    for (src_row, mut dst_row) in src_points
        .rows()
        .into_iter()
        .zip(dst_points.rows_mut().into_iter())
    {
        // normalize the observed coordinates
        let x0 = (src_row[0] - cx) / fx;
        let y0 = (src_row[1] - cy) / fy;

        // iteratively solve for (x, y) such that distort(x, y) ~ (x0, y0)
        let mut x = x0;
        let mut y = y0;
        for _ in 0..INVERSION_ITERATIONS {
            let r2 = x * x + y * y;
            let kr = 1.0 + k1 * r2 + k2 * r2 * r2;

            let d_tan_x = 2.0 * p1 * x * y + p2 * (r2 + 2.0 * x * x);
            let d_tan_y = p1 * (r2 + 2.0 * y * y) + 2.0 * p2 * x * y;

            x = (x0 - d_tan_x) / kr;
            y = (y0 - d_tan_y) / kr;
        }

        // project back to pixel coordinates
        dst_row[0] = fx * x + cx;
        dst_row[1] = fy * y + cy;
    }

    Ok(dst_points)
}
