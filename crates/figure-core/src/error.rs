// File: crates/figure-core/src/error.rs
// Summary: Render error type for the chart backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back {width}x{height} pixel buffer")]
    ReadPixels { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
