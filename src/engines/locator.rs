//! Engine locators
//!
//! Decide which tesseract executable to run. Some hosts (Windows) do not put
//! tesseract on the search path, so a well-known install location is probed
//! first.

use std::path::{Path, PathBuf};

/// Default Windows install location of the UB-Mannheim tesseract build
pub const WINDOWS_INSTALL_PATH: &str = r"C:\Program Files\Tesseract-OCR\tesseract.exe";

/// Executable name resolved through the host's search path
pub const TESSERACT_BIN: &str = "tesseract";

/// Strategy for finding the engine executable on this host
pub trait EngineLocator {
    /// Returns the executable to run, if this strategy can find one
    fn locate(&self) -> Option<PathBuf>;
}

/// Probes a list of absolute install paths and returns the first existing file
pub struct WellKnownInstallLocator {
    candidates: Vec<PathBuf>,
}

impl WellKnownInstallLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn windows() -> Self {
        Self::new(vec![PathBuf::from(WINDOWS_INSTALL_PATH)])
    }
}

impl EngineLocator for WellKnownInstallLocator {
    fn locate(&self) -> Option<PathBuf> {
        self.candidates.iter().find(|p| p.is_file()).cloned()
    }
}

/// Relies on the bare executable name being resolvable through PATH
pub struct SearchPathLocator;

impl EngineLocator for SearchPathLocator {
    fn locate(&self) -> Option<PathBuf> {
        Some(PathBuf::from(TESSERACT_BIN))
    }
}

/// Locators to try on the current host, in order
pub fn host_locators() -> Vec<Box<dyn EngineLocator>> {
    locators_for(std::env::consts::OS)
}

fn locators_for(os: &str) -> Vec<Box<dyn EngineLocator>> {
    let mut locators: Vec<Box<dyn EngineLocator>> = Vec::new();
    if os == "windows" {
        locators.push(Box::new(WellKnownInstallLocator::windows()));
    }
    locators.push(Box::new(SearchPathLocator));
    locators
}

/// Resolve the executable: an explicit path always wins, then each locator
/// in turn, then the bare name.
pub fn resolve(explicit: Option<&Path>, locators: &[Box<dyn EngineLocator>]) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    locators
        .iter()
        .find_map(|locator| locator.locate())
        .unwrap_or_else(|| PathBuf::from(TESSERACT_BIN))
}
