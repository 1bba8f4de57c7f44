//! Client Errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl ClientError {
    /// Wrap a rejected JS promise or thrown exception
    pub fn transport(value: wasm_bindgen::JsValue) -> Self {
        ClientError::Transport(format!("{:?}", value))
    }

    pub fn dom(value: wasm_bindgen::JsValue) -> Self {
        ClientError::Dom(format!("{:?}", value))
    }
}
