//! Backend Command Wrappers
//!
//! Frontend bindings to the ticket endpoint. Every call uses its own
//! `fetch`, so responses never get mixed up between requests.

mod ticket;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ClientError;

// Re-export all public items
pub use ticket::*;

/// Status and raw body of a backend response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Send `request` and read the whole body as text.
///
/// Any status code counts as a response; only transport failures are errors.
async fn send(request: Request) -> Result<RawResponse, ClientError> {
    let window = web_sys::window().ok_or_else(|| ClientError::Dom("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ClientError::transport)?;
    let response: Response = response.dyn_into().map_err(ClientError::transport)?;

    let text = response.text().map_err(ClientError::transport)?;
    let body = JsFuture::from(text).await.map_err(ClientError::transport)?;
    Ok(RawResponse {
        status: response.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

async fn get(url: &str) -> Result<RawResponse, ClientError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(ClientError::transport)?;
    send(request).await
}

async fn post_form(url: &str, body: String) -> Result<RawResponse, ClientError> {
    let headers = Headers::new().map_err(ClientError::transport)?;
    headers
        .set("Content-Type", "application/x-www-form-urlencoded")
        .map_err(ClientError::transport)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&body.into());
    let request = Request::new_with_str_and_init(url, &init).map_err(ClientError::transport)?;
    send(request).await
}
