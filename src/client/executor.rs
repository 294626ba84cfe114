//! Request execution with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct for executing typed JSON
//! requests. Classification of failures happens once, in [`ApiClient::execute`];
//! the callback convention is a thin adapter over it.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{instrument, Span};
use url::Url;

use crate::error::{ApiError, Outcome};
use crate::method::RestMethod;
use crate::params::{self, RequestParams};

/// Async HTTP client for executing typed JSON requests.
///
/// The client wraps `reqwest::Client` and turns every request into an
/// [`Outcome`]: the decoded value or a classified [`ApiError`]. Cloning is
/// cheap (the inner client is reference-counted) and calls are fully
/// independent; no state is shared between them.
///
/// ## Examples
///
/// ```rust,ignore
/// use api_manager::ApiClient;
///
/// #[derive(serde::Deserialize)]
/// struct User { id: u64, name: String }
///
/// let client = ApiClient::new();
/// let user: User = client.get("https://api.example.com/users/1").await?;
/// println!("User: {}", user.name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a client with the default transport configuration.
    ///
    /// No timeout is applied beyond the transport's own defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client on top of an existing `reqwest::Client`.
    ///
    /// Useful for sharing one connection pool across subsystems.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Executes a request and decodes the response body into `T`.
    ///
    /// This is the classification pipeline both calling conventions share.
    /// Every failure maps to exactly one [`ApiError`] variant:
    ///
    /// - the URL string does not parse: [`ApiError::BadUrl`], no request issued
    /// - the exchange fails during send: [`ApiError::Network`]
    /// - the status is anything but 200: [`ApiError::InvalidStatusCode`]
    /// - the body cannot be read: [`ApiError::BadResponse`]
    /// - the body is empty: [`ApiError::DataNotFound`]
    /// - the body does not decode as `T`: [`ApiError::JsonParsing`]
    ///
    /// Parameters attach as query pairs for GET and as the JSON object body
    /// for POST. Nothing is retried.
    #[instrument(
        name = "api_request",
        skip_all,
        fields(
            http.method = %method,
            http.url = url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        )
    )]
    pub async fn execute<T>(
        &self,
        url: &str,
        method: RestMethod,
        params: Option<&RequestParams>,
    ) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        let mut target = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return Err(ApiError::BadUrl(url.to_string())),
        };

        if let Some(params) = params {
            if !method.has_body() {
                params::apply_query(&mut target, params);
            }
        }

        let mut request = self.client.request(method.to_reqwest(), target);
        if let Some(params) = params {
            if method.has_body() {
                request = request.json(params);
            }
        }

        let response = request.send().await.map_err(ApiError::Network)?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);
        if status != 200 {
            return Err(ApiError::InvalidStatusCode(status));
        }

        let body = response.bytes().await.map_err(ApiError::BadResponse)?;
        decode_body(body)
    }

    /// Executes a GET request against `url`.
    pub async fn get<T>(&self, url: &str) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        self.execute(url, RestMethod::Get, None).await
    }

    /// Executes a POST request against `url` with an optional JSON body.
    pub async fn post<T>(&self, url: &str, params: Option<&RequestParams>) -> Outcome<T>
    where
        T: DeserializeOwned,
    {
        self.execute(url, RestMethod::Post, params).await
    }

    /// Executes a request and delivers the outcome through a callback.
    ///
    /// Returns immediately; the request runs on the ambient Tokio runtime and
    /// `on_complete` fires exactly once with the [`Outcome`], on whatever
    /// worker the runtime completes the task on. Callers must not assume
    /// same-thread delivery. URL validation happens inside the spawned task,
    /// so even a malformed URL reaches the callback as [`ApiError::BadUrl`]
    /// rather than being dropped.
    ///
    /// Once issued, a request runs to completion or transport failure; no
    /// cancellation handle is exposed.
    ///
    /// ## Panics
    ///
    /// Panics if called outside a Tokio runtime context.
    pub fn execute_with<T, F>(
        &self,
        url: &str,
        method: RestMethod,
        params: Option<RequestParams>,
        on_complete: F,
    ) where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Outcome<T>) + Send + 'static,
    {
        let client = self.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let outcome = client.execute(&url, method, params.as_ref()).await;
            on_complete(outcome);
        });
    }
}

/// Decodes a response body into `T`.
///
/// An empty body is [`ApiError::DataNotFound`]; a body that does not parse
/// as `T` is [`ApiError::JsonParsing`] with the decode error attached.
fn decode_body<T: DeserializeOwned>(body: Bytes) -> Outcome<T> {
    if body.is_empty() {
        return Err(ApiError::DataNotFound);
    }
    serde_json::from_slice(&body).map_err(ApiError::JsonParsing)
}
