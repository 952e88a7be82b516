use axum::{extract::FromRequestParts, extract::Query, http::request::Parts};

use crate::error::ApiError;

/// Spotify access token taken from the `token` query parameter.
///
/// Rejects the request with [`ApiError::InvalidToken`] when the parameter is
/// absent or blank. Whether Spotify accepts the token is only known once the
/// first upstream call is made.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        // a repeated parameter resolves to its first occurrence
        pairs
            .into_iter()
            .find(|(key, _)| key == "token")
            .map(|(_, value)| value.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(AccessToken)
            .ok_or(ApiError::InvalidToken)
    }
}
