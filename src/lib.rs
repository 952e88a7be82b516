//! Statify Artist Dashboard Library
//!
//! This library provides a thin HTTP backend on top of the Spotify Web API. It
//! performs the OAuth 2.0 authorization-code exchange and then proxies artist
//! search, artist metadata, top tracks, albums, related artists and playlists,
//! plus a derived analytics report that aggregates several upstream calls.
//!
//! # Modules
//!
//! - `analytics` - Aggregation of upstream data into an analytics report
//! - `api` - HTTP API endpoints served by the dashboard backend
//! - `cli` - Command-line interface implementations
//! - `config` - Immutable configuration loaded from environment variables
//! - `error` - Error types surfaced to HTTP clients
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client and token gateway
//! - `types` - Response payloads returned by the API
//!
//! # Example
//!
//! ```
//! use statify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> statify::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config, None).await?;
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI and startup code where errors are only reported, never
/// matched on. Request handling uses [`error::ApiError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for unrecoverable startup failures. Request handlers never call it;
/// they return an [`error::ApiError`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as failed upstream calls and the
/// related-artists fallback of the analytics report.
///
/// # Example
///
/// ```
/// warning!("Could not fetch related artists: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
