//! Error types for the folding panel

use thiserror::Error;

/// Main error type for panel operations
#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Element '{0}' not found in document")]
    ElementNotFound(String),

    #[error("No document available - not running in a browser window")]
    NoDocument,

    #[error("Cookie store unavailable: {0}")]
    CookieUnavailable(String),

    #[error("Cookie parse error: {0}")]
    CookieParse(#[from] ::cookie::ParseError),

    #[error("Malformed preference value '{0}' (expected \"true\" or \"false\")")]
    MalformedPreference(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl PanelError {
    /// Wrap an exception thrown by a browser API.
    pub fn from_js(value: wasm_bindgen::JsValue) -> Self {
        match value.as_string() {
            Some(message) => PanelError::Dom(message),
            None => PanelError::Dom(format!("{value:?}")),
        }
    }
}

/// Result type for panel operations
pub type PanelResult<T> = Result<T, PanelError>;
