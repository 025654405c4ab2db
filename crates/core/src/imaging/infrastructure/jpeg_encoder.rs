use base64::Engine;
use image::codecs::jpeg::JpegEncoder;

use crate::error::PurifyError;
use crate::imaging::domain::frame_encoder::FrameEncoder;
use crate::shared::constants::DEFAULT_JPEG_QUALITY;
use crate::shared::frame::Frame;

use super::rgb_conversion::image_from_frame;

/// Lossy JPEG output; quality is 1-100.
pub struct JpegFrameEncoder {
    quality: u8,
}

impl JpegFrameEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }
}

impl Default for JpegFrameEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_JPEG_QUALITY)
    }
}

impl FrameEncoder for JpegFrameEncoder {
    fn encode(&self, frame: &Frame) -> Result<Vec<u8>, PurifyError> {
        let img = image_from_frame(frame).map_err(PurifyError::Encode)?;
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, self.quality);
        img.write_with_encoder(encoder)
            .map_err(PurifyError::Encode)?;
        Ok(bytes)
    }
}

/// Standard-alphabet, padded base64.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
