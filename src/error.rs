use crate::domain::source::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("base directory error: {0}")]
    Path(#[from] PathError),

    #[error("no image files found under {0}")]
    NoImagesFound(String),
}
