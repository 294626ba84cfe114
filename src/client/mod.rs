//! HTTP client module.
//!
//! This module provides the async HTTP client for executing typed JSON
//! requests with tracing instrumentation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use api_manager::{ApiClient, RestMethod};
//!
//! #[derive(serde::Deserialize)]
//! struct User { id: u64, name: String }
//!
//! let client = ApiClient::new();
//!
//! // Suspend/resume convention
//! let user: User = client.get("https://api.example.com/users/1").await?;
//!
//! // Callback convention
//! client.execute_with("https://api.example.com/users/1", RestMethod::Get, None,
//!     |outcome: api_manager::Outcome<User>| match outcome {
//!         Ok(user) => println!("got {}", user.name),
//!         Err(err) => eprintln!("request failed: {err}"),
//!     });
//! ```

mod executor;

pub use executor::ApiClient;
