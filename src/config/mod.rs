mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, PickerConfig, UiConfig, DEFAULT_ENDPOINT_URL};
