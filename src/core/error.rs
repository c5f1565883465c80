use thiserror::Error;

/// Everything that can go wrong while rendering. The escape-time computation
/// itself is total, so all of these come from the edges of the pipeline:
/// reading parameters and writing files.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unable to encode or write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Unable to parse parameter file: {0}")]
    ParameterFile(#[from] serde_json::Error),
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
