use thiserror::Error;

/// An error raised while sampling or encoding a raster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// One of the raster dimensions is zero.
    #[error("Raster must not be empty (got {width}x{height})")]
    EmptyRaster { width: usize, height: usize },
    /// Feature size is zero, negative or not finite.
    #[error("Feature size must be a positive finite number (got {0})")]
    InvalidFeatureSize(f64),
    /// A height map row differs in length from the first row.
    #[error("Height map row {row} has {found} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A dimension does not fit the image crate's `u32` coordinates.
    #[error("Raster dimension {0} exceeds the image size limit")]
    TooLarge(usize),
}
