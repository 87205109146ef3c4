//! Upload a PDF to an OCR/summarization endpoint and read the summary in the terminal.

pub mod config;
pub mod headless;
pub mod logging;
pub mod ui;
pub mod upload;
