//! Request extractors

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body whose rejections render as `{"error": ...}` like every other
/// client error
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
