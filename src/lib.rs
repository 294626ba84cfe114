//! Typed HTTP JSON client.
//!
//! The `api-manager` crate provides a single call-site for "fetch JSON, get
//! typed object or typed error": it performs a network request and decodes
//! the response body into a strongly-typed value, reporting success or a
//! classified failure. Callers never see an unclassified error and no
//! failure path panics or goes silent.
//!
//! ## Features
//!
//! - **Typed decoding**: any `serde::Deserialize` type is a valid target
//! - **Closed failure taxonomy**: every failure is one [`ApiError`] variant
//!   carrying its diagnostics
//! - **Two calling conventions**: suspend/resume (`async`/`.await`) and
//!   callback delivery, sharing one classification pipeline
//! - **Async-first HTTP client**: built on `reqwest` with `tokio`
//!
//! ## Example
//!
//! ```rust,ignore
//! use api_manager::{ApiClient, Outcome};
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: u64, name: String }
//!
//! let client = ApiClient::new();
//! match client.get::<User>("https://api.example.com/users/1").await {
//!     Ok(user) => println!("got {}", user.name),
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod method;
pub mod params;

// Re-exports for convenience
pub use client::ApiClient;
pub use error::{ApiError, Outcome};
pub use method::RestMethod;
pub use params::RequestParams;
