use crate::error::OcrError;
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Load an image file, keeping its original color channels.
///
/// The format is detected from the file content, not its extension.
pub fn load(path: &Path) -> Result<DynamicImage, OcrError> {
    if !path.exists() {
        return Err(OcrError::NotFound {
            path: path.display().to_string(),
        });
    }

    let decode_error = |message: String| OcrError::Decode {
        path: path.display().to_string(),
        message,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    tracing::debug!(
        "Loaded {}: {}x{} {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}
