//! Failures the viewer can hit at runtime. None of them are fatal: every
//! handler logs its error to the console and leaves the page interactive.

use af2_report::DecodeError;
use af2_report::dom::ElementId;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Runtime error of a viewer handler.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Request could not be sent or its body could not be read.
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    /// Backend answered with a non-success status.
    #[error("backend answered HTTP {0}")]
    Status(u16),
    /// Body did not have the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// A required element is not on the page.
    #[error("element #{0} not found")]
    MissingElement(ElementId),
    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        ViewerError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_id() {
        let err = ViewerError::MissingElement(ElementId::Result);
        assert_eq!(err.to_string(), "element #result not found");
    }

    #[test]
    fn decode_errors_pass_through() {
        let err: ViewerError = af2_report::decode_report("[]").unwrap_err().into();
        assert!(err.to_string().starts_with("unexpected response shape"));
    }

    #[test]
    fn status_is_reported() {
        assert_eq!(ViewerError::Status(502).to_string(), "backend answered HTTP 502");
    }
}
