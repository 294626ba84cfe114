//! Per-request parameter mapping.
//!
//! Parameters attach to a request in a method-dependent way: methods without
//! a body get them as query pairs, POST sends them as a JSON object body.

use serde_json::{Map, Value};
use url::Url;

/// Optional parameter mapping attached to a single request.
///
/// A JSON object: string keys, arbitrary JSON values.
pub type RequestParams = Map<String, Value>;

/// Renders a JSON value as a query-string value.
///
/// Strings are used verbatim; every other value keeps its compact JSON form.
pub(crate) fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Appends the mapping to `url` as query pairs, preserving any existing query.
pub(crate) fn apply_query(url: &mut Url, params: &RequestParams) {
    let mut pairs = url.query_pairs_mut();
    for (key, value) in params {
        pairs.append_pair(key, &query_value(value));
    }
}
