use crate::classification::domain::color_rule::ColorRule;
use crate::classification::domain::region_kind::SpecialMask;
use crate::shared::constants::{BLACK, WHITE};
use crate::shared::frame::Frame;

/// Maps every pixel of `frame` to pure white (matches `rule`) or pure black.
///
/// Pixels selected by `mask` go black without a color check. Dimensions are
/// unchanged and the frame is modified in place.
pub fn classify(frame: &mut Frame, rule: &ColorRule, mask: Option<&SpecialMask>) {
    let mut pixels = frame.as_ndarray_mut();
    for (y, mut row) in pixels.outer_iter_mut().enumerate() {
        for (x, mut px) in row.outer_iter_mut().enumerate() {
            let masked = mask.is_some_and(|m| m.forces_black(x as u32, y as u32));
            let value = if !masked && rule.matches([px[0], px[1], px[2]]) {
                WHITE
            } else {
                BLACK
            };
            px[0] = value[0];
            px[1] = value[1];
            px[2] = value[2];
        }
    }
}
