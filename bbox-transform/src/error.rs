use std::io;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("box at row {row} is not in {format} format")]
    InvalidBoxFormat { format: &'static str, row: usize },
    #[error("image size must be non-negative integers, but get width={width} height={height}")]
    InvalidImageSize { width: f64, height: f64 },
    #[error("the image size must be known when the crop center is not given")]
    MissingImageDimensions,
    #[error("at least 2 points are required, but get {found}")]
    InsufficientPoints { found: usize },
    #[error("rotation by {angle} degrees has no well-defined intersection")]
    DegenerateRotation { angle: f64 },
    #[error("expect shape {expected}, but get {found:?}")]
    InvalidShape {
        expected: &'static str,
        found: Vec<usize>,
    },
    #[error("unable to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("unable to parse config file: {0}")]
    Config(#[from] json5::Error),
}

impl Error {
    pub(crate) fn shape(expected: &'static str, found: &[usize]) -> Self {
        Self::InvalidShape {
            expected,
            found: found.to_vec(),
        }
    }
}
