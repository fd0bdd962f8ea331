use crate::Args;
use std::path::{Path, PathBuf};

/// Image read when no path is given on the command line
pub const DEFAULT_IMAGE_PATH: &str = "image.png";
/// File the recognized text is written to
pub const DEFAULT_OUTPUT_FILE: &str = "caption.txt";

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub default_image_path: PathBuf,
    pub image_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Explicit engine executable; located per host when unset
    pub tesseract_cmd: Option<PathBuf>,
    pub tessdata_dir: Option<PathBuf>,
}

impl Config {
    /// The image this run reads: the explicit path if one was given,
    /// otherwise the default.
    pub fn input_path(&self) -> &Path {
        self.image_path
            .as_deref()
            .unwrap_or(self.default_image_path.as_path())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            image_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            tesseract_cmd: None,
            tessdata_dir: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            image_path: args.image,
            output_path: args.output,
            tesseract_cmd: args.tesseract_cmd,
            tessdata_dir: args.tessdata_dir,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_path_falls_back_to_default() {
        let config = Config {
            default_image_path: PathBuf::from("fallback.png"),
            ..Config::default()
        };
        assert_eq!(config.input_path(), Path::new("fallback.png"));
    }

    #[test]
    fn test_input_path_prefers_explicit_image() {
        let config = Config {
            image_path: Some(PathBuf::from("scan.jpg")),
            ..Config::default()
        };
        assert_eq!(config.input_path(), Path::new("scan.jpg"));
    }
}
