use std::path::Path;

use crate::error::PurifyError;
use crate::imaging::domain::frame_reader::FrameReader;
use crate::shared::frame::Frame;

use super::rgb_conversion::frame_from_image;

/// Decodes screenshots with the `image` crate, forcing RGB.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<Frame, PurifyError> {
        let image = image::open(path).map_err(|source| PurifyError::Load {
            source_name: path.display().to_string(),
            source,
        })?;
        Ok(frame_from_image(image))
    }

    fn decode(&self, name: &str, bytes: &[u8]) -> Result<Frame, PurifyError> {
        let image = image::load_from_memory(bytes).map_err(|source| PurifyError::Load {
            source_name: name.to_string(),
            source,
        })?;
        Ok(frame_from_image(image))
    }
}
