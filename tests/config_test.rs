use std::collections::HashMap;

use statify::config::{Config, ConfigError};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const CREDENTIALS: [(&str, &str); 2] = [
    ("SPOTIFY_CLIENT_ID", "client"),
    ("SPOTIFY_CLIENT_SECRET", "secret"),
];

#[test]
fn test_defaults_are_applied() {
    let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();

    assert_eq!(config.client_id, "client");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.redirect_uri, "http://localhost:5000/callback");
    assert_eq!(config.api_url.as_str(), "https://api.spotify.com/v1");
    assert_eq!(
        config.token_url.as_str(),
        "https://accounts.spotify.com/api/token"
    );
    assert_eq!(config.frontend_url.as_str(), "http://127.0.0.1:3000/");
    assert_eq!(config.server_addr.port(), 5000);
    assert!(config.scope.contains("user-top-read"));
}

#[test]
fn test_overrides_are_used() {
    let mut vars = CREDENTIALS.to_vec();
    vars.push(("SPOTIFY_REDIRECT_URI", "https://statify.example/callback"));
    vars.push(("SERVER_ADDRESS", "127.0.0.1:8080"));
    vars.push(("FRONTEND_URL", "https://dash.example"));

    let config = Config::from_lookup(lookup(&vars)).unwrap();

    assert_eq!(config.redirect_uri, "https://statify.example/callback");
    assert_eq!(config.server_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(config.frontend_url.host_str(), Some("dash.example"));
}

#[test]
fn test_missing_credentials() {
    let err = Config::from_lookup(lookup(&[("SPOTIFY_CLIENT_ID", "client")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_SECRET")));

    // blank values count as unset
    let err = Config::from_lookup(lookup(&[
        ("SPOTIFY_CLIENT_ID", "  "),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID")));
}

#[test]
fn test_invalid_values() {
    let mut vars = CREDENTIALS.to_vec();
    vars.push(("SPOTIFY_API_URL", "not a url"));
    let err = Config::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidUrl {
            name: "SPOTIFY_API_URL",
            ..
        }
    ));

    let mut vars = CREDENTIALS.to_vec();
    vars.push(("SERVER_ADDRESS", "localhost"));
    let err = Config::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidAddress { .. }));
}
