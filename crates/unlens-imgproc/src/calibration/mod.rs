/// image distortion module.
pub mod distortion;

use ndarray::{array, Array1, Array2};

/// Represents the intrinsic parameters of a pinhole camera with radial distortion.
///
/// The two radial coefficients describe the same lens in opposite directions:
/// one is applied when going from distorted to undistorted coordinates, the
/// other when going from undistorted to distorted coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParameters {
    /// The focal length in the x direction
    fx: f64,
    /// The focal length in the y direction
    fy: f64,
    /// The x coordinate of the principal point
    cx: f64,
    /// The y coordinate of the principal point
    cy: f64,
    /// The radial coefficient applied in the distorted-to-undistorted direction
    k_undistort: f64,
    /// The radial coefficient applied in the undistorted-to-distorted direction
    k_distort: f64,
}

impl CameraParameters {
    /// Create a new camera parameter set without distortion.
    ///
    /// # Arguments
    ///
    /// * `fx` - The focal length in the x direction
    /// * `fy` - The focal length in the y direction
    /// * `cx` - The x coordinate of the principal point
    /// * `cy` - The y coordinate of the principal point
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            k_undistort: 0.0,
            k_distort: 0.0,
        }
    }

    /// Attach the pair of radial distortion coefficients to the camera.
    ///
    /// # Arguments
    ///
    /// * `k_undistort` - The radial coefficient for the distorted-to-undistorted direction
    /// * `k_distort` - The radial coefficient for the undistorted-to-distorted direction
    pub fn with_distortion(self, k_undistort: f64, k_distort: f64) -> Self {
        Self {
            k_undistort,
            k_distort,
            ..self
        }
    }

    /// The focal length in the x direction.
    pub fn fx(&self) -> f64 {
        self.fx
    }

    /// The focal length in the y direction.
    pub fn fy(&self) -> f64 {
        self.fy
    }

    /// The x coordinate of the principal point.
    pub fn cx(&self) -> f64 {
        self.cx
    }

    /// The y coordinate of the principal point.
    pub fn cy(&self) -> f64 {
        self.cy
    }

    /// The radial coefficient for the distorted-to-undistorted direction.
    pub fn k_undistort(&self) -> f64 {
        self.k_undistort
    }

    /// The radial coefficient for the undistorted-to-distorted direction.
    pub fn k_distort(&self) -> f64 {
        self.k_distort
    }

    /// Build the 3x3 camera matrix from the current parameter values.
    ///
    /// The matrix has the layout
    ///
    /// ```text
    /// [fx  0 cx]
    /// [ 0 fy cy]
    /// [ 0  0  1]
    /// ```
    pub fn camera_matrix(&self) -> Array2<f64> {
        array![
            [self.fx, 0.0, self.cx],
            [0.0, self.fy, self.cy],
            [0.0, 0.0, 1.0]
        ]
    }

    /// Build the 4-element distortion coefficient vector from the current
    /// parameter values.
    ///
    /// The vector is laid out as `[k1, k2, p1, p2]` with the
    /// undistorted-to-distorted radial coefficient in the first slot and the
    /// remaining slots zero.
    pub fn distortion_coeffs(&self) -> Array1<f64> {
        array![self.k_distort, 0.0, 0.0, 0.0]
    }
}
