//! Bridge two image representations around a single lens undistortion call.
//!
//! Reads `chessboard.pgm` from the working directory with the `image` crate,
//! converts it into the unlens container, corrects it for radial lens
//! distortion using hardcoded camera parameters and writes the result to
//! `chessboard-undistorted.pgm`.

#[cfg(feature = "calib")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use unlens_image::Image;
    use unlens_imgproc::calibration::CameraParameters;
    use unlens_imgproc::undistort::undistort_image;
    use unlens_io::{convert, pnm};

    env_logger::init();

    // camera parameters measured for the chessboard sequence
    let cam = CameraParameters::new(582.7, 580.6, 326.6, 215.0).with_distortion(0.3372, -0.3372);

    // re-express the parameters as the matrix/vector pair expected by the
    // undistortion routine
    let camera_matrix = cam.camera_matrix();
    let dist_coeffs = cam.distortion_coeffs();
    log::info!("camera matrix:\n{}", camera_matrix);
    log::info!("distortion coefficients: {}", dist_coeffs);

    // read the distorted image
    let distorted = pnm::read_image_pgm("chessboard.pgm")?;

    // bridge into the unlens representation
    let src = convert::gray_image_to_mono8(&distorted)?;

    // undistort
    let mut corrected = Image::from_size_val(src.size(), 0u8)?;
    undistort_image(&src, &mut corrected, &camera_matrix, &dist_coeffs)?;

    // bridge back and write the corrected image
    let out = convert::mono8_to_gray_image(&corrected)?;
    pnm::write_image_pgm("chessboard-undistorted.pgm", &out)?;

    log::info!("wrote chessboard-undistorted.pgm ({})", corrected.size());

    Ok(())
}

#[cfg(not(feature = "calib"))]
fn main() {
    println!("Camera calibration support was disabled at build time; skipping the undistortion demo.");
}
