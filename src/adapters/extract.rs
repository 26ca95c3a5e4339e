use axum::extract::{FromRequest, FromRequestParts};

use crate::application::error::ApplicationError;

/// `axum::Json` whose rejections render as [`ApplicationError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApplicationError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` whose rejections render as [`ApplicationError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApplicationError))]
pub struct QueryParams<T>(pub T);
