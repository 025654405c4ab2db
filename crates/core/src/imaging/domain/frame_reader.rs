use std::path::Path;

use crate::error::PurifyError;
use crate::shared::frame::Frame;

/// Decodes a screenshot into an RGB [`Frame`].
pub trait FrameReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Frame, PurifyError>;

    /// Decodes raw bytes; `name` only labels errors.
    fn decode(&self, name: &str, bytes: &[u8]) -> Result<Frame, PurifyError>;
}
