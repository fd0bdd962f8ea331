use thiserror::Error;

/// Every failure a run can end with.
///
/// Variants carry pre-formatted messages so the error prints as a single line.
#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Image not found: {path}")]
    NotFound { path: String },

    #[error("Failed to decode image {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid image: {0}")]
    Validation(String),

    #[error("Recognition engine failed: {0}")]
    RecognitionEngine(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}
