use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::{config::Config, types::Token};

use super::SpotifyClient;

#[derive(Debug, Error)]
pub enum AuthExchangeError {
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint rejected the code: {0}")]
    Rejected(String),

    #[error("token response is missing fields: {0}")]
    Malformed(String),
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    #[serde(default)]
    scope: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
    refresh_token: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Owns the OAuth client configuration and hands out authenticated clients.
///
/// The gateway is built once at startup and cloned into every request. It
/// holds no per-user state: tokens are passed in by the caller and never
/// stored.
#[derive(Debug, Clone)]
pub struct TokenGateway {
    config: Arc<Config>,
    http: Client,
}

impl TokenGateway {
    pub fn new(config: Arc<Config>, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the provider authorization URL.
    ///
    /// The URL carries `client_id`, `response_type=code`, `redirect_uri` and
    /// `scope`, all form-encoded. The result only depends on configuration.
    ///
    /// # Example
    ///
    /// ```
    /// let url = gateway.get_auth_url();
    /// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
    /// ```
    pub fn get_auth_url(&self) -> Url {
        let mut url = self.config.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", &self.config.scope);
        url
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the authorization-code flow against the token endpoint. The
    /// client authenticates with HTTP Basic credentials built from the
    /// configured client id and secret.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received on the OAuth callback
    ///
    /// # Errors
    ///
    /// - [`AuthExchangeError::Http`] when the provider is unreachable
    /// - [`AuthExchangeError::Rejected`] for invalid, reused or expired codes
    /// - [`AuthExchangeError::Malformed`] when no access token is returned
    ///
    /// # Security Note
    ///
    /// Authorization codes are single-use and expire quickly (typically 10
    /// minutes), so the exchange must happen right after the callback.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, AuthExchangeError> {
        let credentials = STANDARD.encode(format!(
            "{}:{}",
            self.config.client_id, self.config.client_secret
        ));

        let res = self
            .http
            .post(self.config.token_url.clone())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {credentials}"),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            let reason = serde_json::from_slice::<TokenErrorResponse>(&body)
                .map(|e| match e.error_description {
                    Some(desc) => format!("{}: {}", e.error, desc),
                    None => e.error,
                })
                .unwrap_or_else(|_| status.to_string());
            return Err(AuthExchangeError::Rejected(reason));
        }

        let json: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| AuthExchangeError::Malformed(e.to_string()))?;

        Ok(Token {
            access_token: json.access_token,
            token_type: json.token_type,
            scope: json.scope,
            expires_in: json.expires_in,
            refresh_token: json.refresh_token,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }

    /// Wraps a bare access token into a client for the Web API.
    ///
    /// No request is made here; Spotify validates the token on first use.
    pub fn wrap_token(&self, token: impl Into<String>) -> SpotifyClient {
        SpotifyClient::new(self.http.clone(), self.config.api_url.clone(), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> TokenGateway {
        let config = Config::from_lookup(|key| match key {
            "SPOTIFY_CLIENT_ID" => Some("my-client".to_string()),
            "SPOTIFY_CLIENT_SECRET" => Some("shh".to_string()),
            _ => None,
        })
        .unwrap();
        TokenGateway::new(Arc::new(config), Client::new())
    }

    #[test]
    fn auth_url_contains_encoded_parameters() {
        let url = gateway().get_auth_url();

        assert_eq!(url.host_str(), Some("accounts.spotify.com"));
        assert_eq!(url.path(), "/authorize");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("client_id".into(), "my-client".into())));
        assert!(pairs.contains(&("response_type".into(), "code".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "http://localhost:5000/callback".into()
        )));
        assert!(pairs.contains(&(
            "scope".into(),
            "user-top-read user-read-recently-played user-read-private user-read-email".into()
        )));
    }

    #[test]
    fn auth_url_is_deterministic() {
        let gw = gateway();
        assert_eq!(gw.get_auth_url(), gw.get_auth_url());
    }
}
