use image::error::{ParameterError, ParameterErrorKind};
use image::{DynamicImage, ImageError, RgbImage};

use crate::shared::frame::Frame;

/// Drops any alpha or palette information and keeps packed RGB.
pub fn frame_from_image(image: DynamicImage) -> Frame {
    let rgb = image.into_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::new(rgb.into_raw(), width, height)
}

pub fn image_from_frame(frame: &Frame) -> Result<RgbImage, ImageError> {
    RgbImage::from_raw(frame.width(), frame.height(), frame.data().to_vec()).ok_or_else(|| {
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_rgba_alpha_is_dropped() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        rgba.put_pixel(1, 0, Rgba([40, 50, 60, 255]));
        let frame = frame_from_image(DynamicImage::ImageRgba8(rgba));
        assert_eq!(frame.data().len(), 6);
        assert_eq!(frame.pixel(0, 0), [10, 20, 30]);
        assert_eq!(frame.pixel(1, 0), [40, 50, 60]);
    }

    #[test]
    fn test_frame_to_image_keeps_pixels() {
        let frame = Frame::filled(3, 2, [7, 8, 9]);
        let img = image_from_frame(&frame).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1).0, [7, 8, 9]);
    }
}
