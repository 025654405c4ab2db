use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::shared::constants::{X_DIVISORS, Y_DIVISORS};

/// Proportional divisors that place the grid lines on each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x_divisors: [f64; 2],
    pub y_divisors: [f64; 2],
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            x_divisors: X_DIVISORS,
            y_divisors: Y_DIVISORS,
        }
    }
}

/// Absolute grid lines for one image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub x: [u32; 2],
    pub y: [u32; 2],
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    /// Resolves the divisors against a concrete image size.
    ///
    /// Each line is `round(dimension / divisor)`, rounding halves away from
    /// zero. Lines must satisfy `0 < c[0] < c[1] <= dimension` on both axes.
    pub fn compute(&self, width: u32, height: u32) -> Result<Grid, GeometryError> {
        let x = axis_lines(width, self.x_divisors, "x")?;
        let y = axis_lines(height, self.y_divisors, "y")?;
        Ok(Grid {
            x,
            y,
            width,
            height,
        })
    }
}

/// Free-function form of [`GridSpec::compute`].
pub fn compute_grid(
    width: u32,
    height: u32,
    x_divisors: [f64; 2],
    y_divisors: [f64; 2],
) -> Result<Grid, GeometryError> {
    GridSpec {
        x_divisors,
        y_divisors,
    }
    .compute(width, height)
}

fn axis_lines(limit: u32, divisors: [f64; 2], axis: &'static str) -> Result<[u32; 2], GeometryError> {
    let mut coords = [0u32; 2];
    for (slot, &d) in coords.iter_mut().zip(divisors.iter()) {
        if !d.is_finite() || d <= 0.0 {
            return Err(GeometryError::InvalidDivisor(d));
        }
        let line = (limit as f64 / d).round();
        // Saturate so an absurd divisor surfaces as out-of-bounds below.
        *slot = if line >= u32::MAX as f64 {
            u32::MAX
        } else {
            line as u32
        };
    }
    if coords[0] == 0 || coords[0] >= coords[1] || coords[1] > limit {
        return Err(GeometryError::GridOutOfBounds {
            axis,
            coords,
            limit,
        });
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_hd_grid() {
        let grid = GridSpec::default().compute(1920, 1080).unwrap();
        // 1080/7.08 = 152.54, 1080/1.58 = 683.54
        assert_eq!(grid.y, [153, 684]);
        // 1920/4.17 = 460.43, 1920/1.36 = 1411.76
        assert_eq!(grid.x, [460, 1412]);
        assert_eq!((grid.width, grid.height), (1920, 1080));
    }

    #[test]
    fn test_free_function_matches_method() {
        let a = compute_grid(2560, 1440, X_DIVISORS, Y_DIVISORS).unwrap();
        let b = GridSpec::default().compute(2560, 1440).unwrap();
        assert_eq!(a, b);
    }

    #[rstest]
    #[case::qhd(2560, 1440, [614, 1882], [203, 911])]
    #[case::hd(1280, 720, [307, 941], [102, 456])]
    fn test_other_resolutions(
        #[case] w: u32,
        #[case] h: u32,
        #[case] x: [u32; 2],
        #[case] y: [u32; 2],
    ) {
        let grid = GridSpec::default().compute(w, h).unwrap();
        assert_eq!(grid.x, x);
        assert_eq!(grid.y, y);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 5 / 2 = 2.5 -> 3, 5 / 1.25 = 4
        let grid = compute_grid(5, 5, [2.0, 1.25], [2.0, 1.25]).unwrap();
        assert_eq!(grid.x, [3, 4]);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.5)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_invalid_divisor_rejected(#[case] d: f64) {
        let err = compute_grid(1920, 1080, [d, 1.36], Y_DIVISORS).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDivisor(_)));
    }

    #[test]
    fn test_divisor_below_one_exceeds_bounds() {
        let err = compute_grid(1920, 1080, [4.17, 0.5], Y_DIVISORS).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::GridOutOfBounds { axis: "x", .. }
        ));
    }

    #[test]
    fn test_non_increasing_lines_rejected() {
        let err = compute_grid(1920, 1080, X_DIVISORS, [1.58, 7.08]).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::GridOutOfBounds { axis: "y", .. }
        ));
    }

    #[test]
    fn test_tiny_image_collapses_grid() {
        // 3/4.17 rounds to 1, 3/1.36 rounds to 2; 2/7.08 rounds to 0.
        let err = GridSpec::default().compute(3, 2).unwrap_err();
        assert!(matches!(err, GeometryError::GridOutOfBounds { .. }));
    }
}
