//! Server Command Wrappers
//!
//! Frontend bindings to the HTTP endpoints, organized by domain.

mod error;
mod fields;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use error::ApiError;
pub use fields::*;

/// POST to `url`, with `body` encoded as JSON when given.
/// Any non-2xx status is an error.
async fn post<B: Serialize>(url: &str, body: Option<&B>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    if let Some(body) = body {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        opts.set_body(&JsValue::from_str(&json));
    }

    let req = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;
    if body.is_some() {
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(ApiError::from_js)?;
    }

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(ApiError::from_js)?;
    let resp: Response = resp_value.dyn_into().map_err(ApiError::from_js)?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

/// Read the whole response body as text
async fn read_text(resp: &Response) -> Result<String, ApiError> {
    let text = JsFuture::from(resp.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
}
