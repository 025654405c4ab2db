use crate::error::GeometryError;

/// Compares `width / height` against `expected_ratio` at one-decimal precision.
///
/// Both sides are scaled by 10 and floored, so 1920x1080 (17.7) and
/// 1366x768 (17.7) match 16:9 (17.7) while 1920x1200 (16.0) does not.
/// A zero dimension is reported as an invalid image rather than divided by.
pub fn validate_ratio(width: u32, height: u32, expected_ratio: f64) -> Result<bool, GeometryError> {
    if width == 0 || height == 0 {
        return Err(GeometryError::InvalidImage { width, height });
    }
    let actual = (width as f64 * 10.0 / height as f64).floor();
    let expected = (expected_ratio * 10.0).floor();
    Ok(actual == expected)
}

/// Like [`validate_ratio`], but turns a mismatch into an error.
pub fn ensure_ratio(width: u32, height: u32, expected_ratio: f64) -> Result<(), GeometryError> {
    if validate_ratio(width, height, expected_ratio)? {
        Ok(())
    } else {
        Err(GeometryError::AspectRatio {
            width,
            height,
            expected: expected_ratio,
        })
    }
}
