use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::application::error::ApplicationError;

pub const MEMBER_ID_HEADER: &str = "memberId";

/// The member a request acts on behalf of.
///
/// Taken verbatim from the `memberId` header; nothing here authenticates it.
/// Swap this extractor out to put real authentication in front of handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    pub member_id: i64,
}

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApplicationError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(MEMBER_ID_HEADER)
            .ok_or_else(|| {
                warn!("{} header is missing", MEMBER_ID_HEADER);
                ApplicationError::Unauthorized
            })?
            .to_str()
            .map_err(|_| {
                ApplicationError::BadRequest(format!("{} header is not valid UTF-8", MEMBER_ID_HEADER))
            })?;

        let member_id = raw
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                ApplicationError::BadRequest(format!("Invalid {} header: {}", MEMBER_ID_HEADER, raw))
            })?;

        Ok(CallerIdentity { member_id })
    }
}
