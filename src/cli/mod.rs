//! # CLI Module
//!
//! Command-line entry points of the `statify` binary. Each function here is
//! one subcommand; argument parsing itself lives in `main.rs`.
//!
//! ## Commands
//!
//! - [`serve`] - runs the HTTP backend
//! - [`auth_url`] - prints (and optionally opens) the Spotify authorization URL
//! - [`analytics`] - builds an artist report against the live API and prints
//!   it as tables
//!
//! ## Usage Patterns
//!
//! ```bash
//! statify serve --addr 127.0.0.1:5000
//! statify auth-url --open
//! statify analytics 4Z8W4fKeB5YxbusRsdQVPb --token BQC...
//! ```
//!
//! ## Error Handling
//!
//! Commands report through the crate's logging macros. Unrecoverable failures
//! use [`crate::error!`], which terminates the process with exit code 1.

mod analytics;
mod auth;
mod serve;

pub use analytics::analytics;
pub use auth::auth_url;
pub use serve::serve;
