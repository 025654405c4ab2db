use image::imageops::FilterType;

use crate::error::PurifyError;
use crate::imaging::domain::frame_encoder::FrameEncoder;
use crate::shared::frame::Frame;

use super::jpeg_encoder::JpegFrameEncoder;

/// Decodes any supported image, forces RGB, resizes to `size x size` and
/// re-encodes as JPEG. Not part of the classification path.
pub fn convert_thumbnail(bytes: &[u8], size: u32, quality: u8) -> Result<Vec<u8>, PurifyError> {
    let image = image::load_from_memory(bytes).map_err(|source| PurifyError::Load {
        source_name: "thumbnail source".to_string(),
        source,
    })?;
    let rgb = image.into_rgb8();
    let resized = image::imageops::resize(&rgb, size, size, FilterType::CatmullRom);
    let (w, h) = resized.dimensions();
    JpegFrameEncoder::new(quality).encode(&Frame::new(resized.into_raw(), w, h))
}
