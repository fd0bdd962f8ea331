//! Image preprocessing module for OCR enhancement
//!
//! A fixed pipeline (grayscale, auto-contrast, upscale) that prepares a
//! decoded image for recognition.

pub mod pipeline;
pub mod steps;

pub use pipeline::Pipeline;
