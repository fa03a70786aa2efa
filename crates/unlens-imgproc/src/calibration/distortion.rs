use crate::interpolation::grid::meshgrid_from_fn;
use ndarray::{Array1, Array2};
use unlens_image::{ImageError, ImageSize};

/// Represents the radial-tangential distortion parameters of a camera.
///
/// The coefficients describe the forward model, mapping ideal (undistorted)
/// pixel coordinates to their observed (distorted) locations.
///
/// # Fields
///
/// * `k1` - The first radial distortion coefficient
/// * `k2` - The second radial distortion coefficient
/// * `p1` - The first tangential distortion coefficient
/// * `p2` - The second tangential distortion coefficient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialTangentialDistortion {
    /// The first radial distortion coefficient
    pub k1: f64,
    /// The second radial distortion coefficient
    pub k2: f64,
    /// The first tangential distortion coefficient
    pub p1: f64,
    /// The second tangential distortion coefficient
    pub p2: f64,
}

impl RadialTangentialDistortion {
    /// Build the distortion parameters from a coefficient vector.
    ///
    /// The vector is read in the `[k1, k2, p1, p2]` layout; missing trailing
    /// coefficients are treated as zero.
    pub fn from_coeffs(dist_coeffs: &Array1<f64>) -> Self {
        Self {
            k1: dist_coeffs.get(0).copied().unwrap_or(0.0),
            k2: dist_coeffs.get(1).copied().unwrap_or(0.0),
            p1: dist_coeffs.get(2).copied().unwrap_or(0.0),
            p2: dist_coeffs.get(3).copied().unwrap_or(0.0),
        }
    }
}

/// Distort a point using the radial-tangential model.
///
/// # Arguments
///
/// * `x` - The x coordinate of the point in pixels
/// * `y` - The y coordinate of the point in pixels
/// * `fx` - The focal length in the x direction
/// * `fy` - The focal length in the y direction
/// * `cx` - The x coordinate of the principal point
/// * `cy` - The y coordinate of the principal point
/// * `distortion` - The distortion parameters of the camera
///
/// # Returns
///
/// The pixel coordinates of the distorted point.
pub fn distort_point(
    x: f64,
    y: f64,
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    distortion: &RadialTangentialDistortion,
) -> (f64, f64) {
    let (k1, k2, p1, p2) = (distortion.k1, distortion.k2, distortion.p1, distortion.p2);

    // normalize the coordinates
    let x = (x - cx) / fx;
    let y = (y - cy) / fy;

    // calculate the radial distance
    let r2 = x * x + y * y;

    // radial distortion
    let kr = 1.0 + k1 * r2 + k2 * r2 * r2;

    // tangential distortion
    let xd = x * kr + 2.0 * p1 * x * y + p2 * (r2 + 2.0 * x * x);
    let yd = y * kr + p1 * (r2 + 2.0 * y * y) + 2.0 * p2 * x * y;

    // denormalize the coordinates
    let xdst = fx * xd + cx;
    let ydst = fy * yd + cy;

    (xdst, ydst)
}

/// Generate the undistortion map for the radial-tangential model.
///
/// For every pixel of the corrected output image the map holds the
/// coordinates of the distorted source pixel to sample from.
///
/// # Arguments
///
/// * `fx` - The focal length in the x direction
/// * `fy` - The focal length in the y direction
/// * `cx` - The x coordinate of the principal point
/// * `cy` - The y coordinate of the principal point
/// * `distortion` - The distortion parameters of the camera
/// * `size` - The size of the image
///
/// # Returns
///
/// * `map_x` - The x map for undistorting the image
/// * `map_y` - The y map for undistorting the image
pub fn generate_correction_map(
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    distortion: &RadialTangentialDistortion,
    size: &ImageSize,
) -> Result<(Array2<f32>, Array2<f32>), ImageError> {
    // create a grid of x and y coordinates for the output image
    // and interpolate the values from the input image.
    let (dst_rows, dst_cols) = (size.height, size.width);
    let (map_x, map_y) = meshgrid_from_fn(dst_cols, dst_rows, |x, y| {
        let (xdst, ydst) = distort_point(x as f64, y as f64, fx, fy, cx, cy, distortion);
        Ok((xdst as f32, ydst as f32))
    })?;

    Ok((map_x, map_y))
}
