//! Minimal resolved-identity layer.
//!
//! Authentication itself is owned by an external identity collaborator;
//! requests arrive with an `X-User-Id` header naming the acting user. Write
//! operations that record an acting identity (asset assignment) require the
//! header and fail with 401 when it is absent or malformed. There is no
//! fallback identity: an unauthenticated assign is rejected rather than
//! attributed to an arbitrary user.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The acting identity for a request, extracted from `X-User-Id`.
///
/// The referenced user's existence is verified by the service layer inside
/// the same transaction that records the action.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| ApiError::Unauthorized("Missing X-User-Id header".to_string()))?;

        let user_id = header
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .ok_or_else(|| ApiError::Unauthorized("Invalid X-User-Id header".to_string()))?;

        Ok(AuthenticatedUser { user_id })
    }
}
