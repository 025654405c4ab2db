use crate::error::PurifyError;
use crate::shared::frame::Frame;

/// Serializes a frame into a transportable byte stream.
pub trait FrameEncoder: Send + Sync {
    fn encode(&self, frame: &Frame) -> Result<Vec<u8>, PurifyError>;
}
