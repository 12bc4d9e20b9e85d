//! Error type for controller initialization.
//!
//! Nothing here is fatal: `boot` logs init failures and moves on to the next
//! controller, so a missing element or a JS exception degrades a single
//! enhancement instead of the page.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("document has no <body>")]
    NoBody,

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(Error::NoWindow.to_string(), "window is not available");
        assert_eq!(
            Error::Js("boom".to_string()).to_string(),
            "JS error: boom"
        );
    }
}
