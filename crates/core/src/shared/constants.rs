/// Result screens are captured at 16:9.
pub const EXPECTED_RATIO: f64 = 16.0 / 9.0;

/// Grid-line divisors along the x axis: `x = round(width / d)`.
pub const X_DIVISORS: [f64; 2] = [4.17, 1.36];
/// Grid-line divisors along the y axis: `y = round(height / d)`.
pub const Y_DIVISORS: [f64; 2] = [7.08, 1.58];

/// The judge-detail corner mask starts below `region_height / JUDGE_MASK_DIVISOR`.
pub const JUDGE_MASK_DIVISOR: f64 = 4.7;

/// Per-channel tolerance used by every color rule.
pub const DEFAULT_TOLERANCE: u8 = 30;

pub const WHITE: [u8; 3] = [255, 255, 255];
pub const BLACK: [u8; 3] = [0, 0, 0];

pub const OUTPUT_PREFIX: &str = "after_";
pub const DEFAULT_OUTPUT_DIR: &str = "after";
pub const DEFAULT_JPEG_QUALITY: u8 = 75;
pub const THUMBNAIL_SIZE: u32 = 80;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
