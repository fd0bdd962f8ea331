use crate::error::OcrError;
use image::GrayImage;

/// Tesseract OCR engine mode (`--oem`)
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    TesseractOnly = 0,
    LstmOnly = 1,
    TesseractLstmCombined = 2,
    /// Whatever the installed engine supports (legacy + neural)
    Default = 3,
}

/// Tesseract page segmentation mode (`--psm`)
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSegMode {
    OsdOnly = 0,
    AutoOsd = 1,
    AutoOnly = 2,
    Auto = 3,
    SingleColumn = 4,
    SingleBlockVertText = 5,
    /// Assume a single uniform block of text
    SingleBlock = 6,
    SingleLine = 7,
    SingleWord = 8,
    CircleWord = 9,
    SingleChar = 10,
    SparseText = 11,
    SparseTextOsd = 12,
    RawLine = 13,
}

/// Engine configuration, fixed for the life of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognitionConfig {
    pub engine_mode: EngineMode,
    pub page_seg_mode: PageSegMode,
}

impl RecognitionConfig {
    pub const fn new(engine_mode: EngineMode, page_seg_mode: PageSegMode) -> Self {
        Self {
            engine_mode,
            page_seg_mode,
        }
    }

    /// Command-line arguments selecting this configuration
    pub fn to_args(&self) -> [String; 4] {
        [
            "--oem".to_string(),
            (self.engine_mode as u8).to_string(),
            "--psm".to_string(),
            (self.page_seg_mode as u8).to_string(),
        ]
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self::new(EngineMode::Default, PageSegMode::SingleBlock)
    }
}

/// Trait that all OCR engines must implement
pub trait OcrEngine {
    /// Returns the engine identifier (e.g., "tesseract")
    fn name(&self) -> &'static str;

    /// Recognize the text in a single-channel image.
    ///
    /// Returns the text trimmed of surrounding whitespace; an empty string
    /// means nothing was detected and is not an error.
    fn recognize(&self, image: &GrayImage, config: &RecognitionConfig)
        -> Result<String, OcrError>;
}
