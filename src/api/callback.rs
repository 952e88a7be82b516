use axum::{
    extract::{Query, State},
    response::{Json, Redirect},
};
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::ApiError, info, warning};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    error: Option<String>,
}

/// Returns the Spotify authorization URL the frontend should open.
pub async fn login(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "auth_url": state.gateway.get_auth_url().as_str() }))
}

/// Completes the OAuth flow.
///
/// Spotify redirects here with either `code` or `error`. On success the
/// browser is sent on to `{FRONTEND_URL}/dashboard?access_token=...`.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, ApiError> {
    if let Some(error) = params.error.filter(|e| !e.is_empty()) {
        return Err(ApiError::BadRequest(format!(
            "Authentication error: {error}"
        )));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        return Err(ApiError::BadRequest(
            "No authorization code received".to_string(),
        ));
    };

    let token = state.gateway.exchange_code(&code).await.map_err(|e| {
        warning!("Token exchange failed: {}", e);
        ApiError::from(e)
    })?;

    let mut target = dashboard_url(&state.gateway.config().frontend_url)?;
    target
        .query_pairs_mut()
        .clear()
        .append_pair("access_token", &token.access_token);

    info!("Authorization completed, redirecting to dashboard");
    Ok(Redirect::temporary(target.as_str()))
}

/// `{frontend}/dashboard`, keeping any path prefix of the frontend URL.
fn dashboard_url(frontend: &Url) -> Result<Url, ApiError> {
    let mut base = frontend.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join("dashboard")
        .map_err(|e| ApiError::Upstream(format!("Invalid frontend URL {frontend}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_url_appends_to_root() {
        let url = Url::parse("http://127.0.0.1:3000").unwrap();
        assert_eq!(
            dashboard_url(&url).unwrap().as_str(),
            "http://127.0.0.1:3000/dashboard"
        );
    }

    #[test]
    fn dashboard_url_keeps_path_prefix() {
        for raw in ["https://host/app", "https://host/app/"] {
            let url = Url::parse(raw).unwrap();
            assert_eq!(
                dashboard_url(&url).unwrap().as_str(),
                "https://host/app/dashboard"
            );
        }
    }
}
