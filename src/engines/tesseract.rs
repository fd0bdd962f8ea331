//! Tesseract engine implementation
//!
//! Drives an installed tesseract binary as a child process. The preprocessed
//! image is handed over as a temporary PNG and the recognized text is read
//! back from stdout.

use crate::engine::{OcrEngine, RecognitionConfig};
use crate::error::OcrError;
use image::{GrayImage, ImageFormat};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Recognition language; language selection is not exposed
const LANGUAGE: &str = "eng";

/// Tesseract OCR Engine
pub struct TesseractEngine {
    /// Executable to run
    cmd: PathBuf,
    /// Path to tessdata directory, passed through when set
    tessdata_dir: Option<PathBuf>,
}

impl TesseractEngine {
    pub fn new(cmd: PathBuf, tessdata_dir: Option<PathBuf>) -> Self {
        Self { cmd, tessdata_dir }
    }

    pub fn cmd(&self) -> &Path {
        &self.cmd
    }

    fn write_temp_png(&self, image: &GrayImage) -> Result<tempfile::NamedTempFile, OcrError> {
        let mut temp_file = tempfile::Builder::new()
            .prefix("caption-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| {
                OcrError::RecognitionEngine(format!("Failed to create temp file: {}", e))
            })?;

        image
            .write_to(temp_file.as_file_mut(), ImageFormat::Png)
            .map_err(|e| OcrError::RecognitionEngine(format!("Failed to encode PNG: {}", e)))?;
        temp_file
            .flush()
            .map_err(|e| OcrError::RecognitionEngine(format!("Failed to write temp file: {}", e)))?;

        Ok(temp_file)
    }

    fn command(&self, image_path: &Path, config: &RecognitionConfig) -> Command {
        let mut command = Command::new(&self.cmd);
        command
            .arg(image_path)
            .arg("stdout")
            .args(config.to_args())
            .args(["-l", LANGUAGE]);
        if let Some(dir) = &self.tessdata_dir {
            command.arg("--tessdata-dir").arg(dir);
        }
        command
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(
        &self,
        image: &GrayImage,
        config: &RecognitionConfig,
    ) -> Result<String, OcrError> {
        let temp_file = self.write_temp_png(image)?;
        let mut command = self.command(temp_file.path(), config);

        tracing::debug!("Running {:?}", command);

        let output = command.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => OcrError::RecognitionEngine(format!(
                "tesseract not found at {} (is it installed?)",
                self.cmd.display()
            )),
            _ => OcrError::RecognitionEngine(format!(
                "Failed to run {}: {}",
                self.cmd.display(),
                e
            )),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let detail = stderr.trim();
            return Err(OcrError::RecognitionEngine(if detail.is_empty() {
                format!("tesseract exited with {}", output.status)
            } else {
                // Keep the report on one line
                detail.lines().collect::<Vec<_>>().join(" ")
            }));
        }
        if !stderr.trim().is_empty() {
            tracing::warn!("tesseract: {}", stderr.trim());
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::info!("Recognized {} characters", text.chars().count());

        Ok(text)
    }
}
