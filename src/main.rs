use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod engine;
mod engines;
mod error;
mod loader;
mod output;
mod preprocessing;

#[derive(Parser, Debug)]
#[command(name = "caption-ocr")]
#[command(about = "Extract text from an image with Tesseract OCR")]
#[command(version)]
pub struct Args {
    /// Image to read (falls back to the built-in default path)
    pub image: Option<PathBuf>,

    /// File the recognized text is written to
    #[arg(long, env = "OCR_OUTPUT_FILE", default_value = config::DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Path to the tesseract executable (located automatically if not set)
    #[arg(long, env = "TESSERACT_CMD")]
    pub tesseract_cmd: Option<PathBuf>,

    /// Path to tessdata directory (uses TESSDATA_PREFIX env var if not set)
    #[arg(long, env = "TESSDATA_PREFIX")]
    pub tessdata_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr, stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from(args);

    tracing::debug!("Starting caption-ocr v{}", env!("CARGO_PKG_VERSION"));

    let engine = engines::create_engine(&config);
    let mut stdout = std::io::stdout().lock();
    match app::run(&config, engine.as_ref(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // One line per failure, whatever the backtrace settings
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
