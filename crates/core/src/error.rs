use std::path::PathBuf;

use thiserror::Error;

/// Geometry failures: the screenshot cannot be partitioned into regions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid image: {width}x{height} has a zero dimension")]
    InvalidImage { width: u32, height: u32 },
    #[error("image aspect ratio {width}x{height} does not match the expected {expected:.3}:1")]
    AspectRatio {
        width: u32,
        height: u32,
        expected: f64,
    },
    #[error("grid divisor must be positive and finite, got {0}")]
    InvalidDivisor(f64),
    #[error("{axis} grid lines {coords:?} are not increasing within 0..={limit}")]
    GridOutOfBounds {
        axis: &'static str,
        coords: [u32; 2],
        limit: u32,
    },
    #[error("region {index} at {x},{y} ({width}x{height}) falls outside the {canvas_width}x{canvas_height} canvas")]
    OutOfCanvas {
        index: usize,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
    #[error("regions {0} and {1} overlap on the canvas")]
    Overlap(usize, usize),
}

#[derive(Error, Debug)]
pub enum PurifyError {
    #[error("cannot load image {source_name}: {source}")]
    Load {
        source_name: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
