//! Orchestration of a single run: load, preprocess, recognize, emit.

use crate::config::Config;
use crate::engine::{OcrEngine, RecognitionConfig};
use crate::error::OcrError;
use crate::loader;
use crate::output::{self, report, Outcome};
use crate::preprocessing::Pipeline;
use std::io::Write;
use std::path::Path;

/// Recognize the text in the image at `path`
pub fn ocr_image(
    path: &Path,
    engine: &dyn OcrEngine,
    recognition: &RecognitionConfig,
) -> Result<String, OcrError> {
    let image = loader::load(path)?;
    let preprocessed = Pipeline::new().process(image)?;

    let steps: Vec<String> = preprocessed
        .steps
        .iter()
        .map(|s| format!("{} {}ms", s.name, s.time_ms))
        .collect();
    tracing::debug!(
        "Preprocessed to {}x{} in {}ms ({})",
        preprocessed.image.width(),
        preprocessed.image.height(),
        preprocessed.total_time_ms,
        steps.join(", ")
    );

    engine.recognize(&preprocessed.image, recognition)
}

/// Run the whole pipeline for the configured input, reporting to `out`.
///
/// Returns the recognized text (possibly empty). The output file is only
/// written once recognition has fully succeeded.
pub fn run(
    config: &Config,
    engine: &dyn OcrEngine,
    out: &mut dyn Write,
) -> Result<String, OcrError> {
    let path = config.input_path();
    report(out, |out| writeln!(out, "Reading image: {}", path.display()))?;
    tracing::info!("Reading image {} with {}", path.display(), engine.name());

    let text = ocr_image(path, engine, &RecognitionConfig::default())?;
    let output_path = config.output_path.display();
    match output::emit(&text, &config.output_path, out)? {
        Outcome::Saved => tracing::info!("Saved text to {}", output_path),
        Outcome::NoText => tracing::info!("No text detected, {} left untouched", output_path),
    }

    Ok(text)
}
