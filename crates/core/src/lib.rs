//! Binarizes rhythm-game result screenshots region by region so the text
//! survives for OCR or template matching.
//!
//! The screen is cut along a proportional grid into button, title,
//! judge-detail and score regions. Each region is mapped to pure black and
//! white by its own color rule, then the regions are pasted back onto one
//! canvas and encoded as JPEG.

pub mod classification;
pub mod compositing;
pub mod error;
pub mod imaging;
pub mod layout;
pub mod pipeline;
pub mod shared;

pub use error::{GeometryError, PurifyError};
pub use pipeline::purify_image_use_case::{purify_to_base64, PurifyImageUseCase, PurifyOutput};
pub use shared::config::PurifierConfig;
