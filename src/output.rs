use crate::error::OcrError;
use std::io::Write;
use std::path::Path;

const RULE: &str = "------------------------";

/// What the sink did with the recognized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    NoText,
}

/// Print the recognized text and persist it to `output_path`.
///
/// Empty text is reported and leaves any existing output file untouched.
pub fn emit(text: &str, output_path: &Path, out: &mut dyn Write) -> Result<Outcome, OcrError> {
    if text.is_empty() {
        report(out, |out| writeln!(out, "\nNo text detected in image."))?;
        return Ok(Outcome::NoText);
    }

    report(out, |out| {
        writeln!(out, "\nDetected text:")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{}", text)?;
        writeln!(out, "{}", RULE)
    })?;

    std::fs::write(output_path, format!("{}\n", text)).map_err(|e| OcrError::Write {
        path: output_path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!("Wrote {} bytes to {}", text.len() + 1, output_path.display());

    report(out, |out| {
        writeln!(out, "\nSaved extracted text to: {}", output_path.display())
    })?;

    Ok(Outcome::Saved)
}

/// Write to the console, mapping failures to a `Write` error on stdout
pub fn report<F>(out: &mut dyn Write, f: F) -> Result<(), OcrError>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    f(out).map_err(|e| OcrError::Write {
        path: "stdout".to_string(),
        message: e.to_string(),
    })
}
