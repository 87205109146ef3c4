use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Endpoint used when neither the config file nor the CLI names one.
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8000/OCR";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote summarization service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL the document is POSTed to (e.g., "http://localhost:8000/OCR").
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

/// File picker behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Directory the picker opens in. Falls back to the working directory.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    /// List every file instead of only PDFs when the picker opens.
    #[serde(default)]
    pub show_all_files: bool,
}

/// Terminal UI timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/spinner tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
