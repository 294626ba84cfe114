//! HTTP method types for typed requests.

use strum::{Display, EnumString};

/// HTTP methods accepted by the request executor.
///
/// Only the methods the executor knows how to attach parameters to are
/// representable. The default is [`Get`](RestMethod::Get).
///
/// ## Examples
///
/// ```rust
/// use api_manager::RestMethod;
///
/// let method = RestMethod::default();
/// assert_eq!(method, RestMethod::Get);
/// assert!(!method.has_body());
///
/// // Parse from string
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    #[default]
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
}

impl RestMethod {
    /// Returns `true` if this method carries a request body.
    ///
    /// Determines where request parameters go: the body for POST,
    /// the query string otherwise.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
