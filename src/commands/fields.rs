//! Field Commands
//!
//! Loading items/groups and submitting a new order.

use crate::config::ApiConfig;
use crate::models::{LoadFieldsResponse, UpdateOrderRequest};
use super::{post, read_text, ApiError};

/// Parse a `/load-fields` body
pub fn parse_load_fields(body: &str) -> Result<LoadFieldsResponse, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn load_fields(api: &ApiConfig) -> Result<LoadFieldsResponse, ApiError> {
    let resp = post::<()>(api.load_fields_url, None).await?;
    let body = read_text(&resp).await?;
    parse_load_fields(&body)
}

/// Only the status matters; the body is ignored
pub async fn update_order(api: &ApiConfig, request: &UpdateOrderRequest) -> Result<(), ApiError> {
    post(api.update_order_url, Some(request)).await?;
    Ok(())
}
