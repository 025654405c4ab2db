use std::path::Path;

use image::ImageFormat;

use crate::error::PurifyError;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

use super::rgb_conversion::image_from_frame;

/// Writes a single frame to an image file using the `image` crate.
///
/// The format follows the path's extension. Names without a recognised
/// extension, such as in-memory uploads, are written as JPEG.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), PurifyError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let write_err = |source| PurifyError::Write {
            path: path.to_path_buf(),
            source,
        };
        let img = image_from_frame(frame).map_err(write_err)?;
        let format = ImageFormat::from_path(path).unwrap_or_else(|_| {
            log::debug!("No image extension on {}, writing JPEG", path.display());
            ImageFormat::Jpeg
        });

        img.save_with_format(path, format).map_err(write_err)?;
        Ok(())
    }
}
