use crate::ApiError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the id of the league member making the request.
pub const USER_HEADER: &str = "x-user-id";

pub struct CurrentUser(pub u32);

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok())
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized(format!("missing or invalid {} header", USER_HEADER)))
    }
}
