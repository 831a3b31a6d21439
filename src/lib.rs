//! # fnping
//!
//! Fetches an OAuth2 bearer token with the client-credentials grant and uses it
//! to call the `/api/ping` health endpoint of a function app.
//!
//! The HTTP client, the logger and the settings store are ports (see [`host`])
//! so the same [`api::Api`] runs inside the CLI or against test doubles.

pub mod api;
pub mod cli;
pub mod error;
pub mod host;

pub static APP_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
