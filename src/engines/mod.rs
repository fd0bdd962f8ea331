//! OCR engine implementations
//!
//! This module contains the `OcrEngine` implementation backed by an
//! installed tesseract binary, and the host-specific strategies used to find
//! that binary.

pub mod locator;
pub mod tesseract;

use crate::config::Config;
use crate::engine::OcrEngine;

/// Build the engine for this run, locating the tesseract executable
pub fn create_engine(config: &Config) -> Box<dyn OcrEngine> {
    let cmd = locator::resolve(config.tesseract_cmd.as_deref(), &locator::host_locators());
    let engine = tesseract::TesseractEngine::new(cmd, config.tessdata_dir.clone());
    tracing::debug!(
        "Using {} engine at {}",
        engine.name(),
        engine.cmd().display()
    );
    Box::new(engine)
}

