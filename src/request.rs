//! Incoming request type, parsed from the per-request environment mapping.

use std::collections::HashMap;

/// One incoming request, built from the environment mapping the serving
/// adapter supplies (see [`App::handle_request`](crate::App::handle_request)).
///
/// Immutable after construction: middleware and handlers read it, never
/// change it. Dropped when the dispatch call returns.
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) query_params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from an environment mapping.
    ///
    /// Recognized keys, all optional:
    ///
    /// | key | default |
    /// |---|---|
    /// | `PATH_INFO` | `"/"` |
    /// | `REQUEST_METHOD` | `"GET"` |
    /// | `QUERY_STRING` | `""` |
    ///
    /// Never fails — anything malformed degrades to defaults or a partial
    /// query map.
    pub(crate) fn from_environ(environ: &HashMap<String, String>) -> Self {
        let path = environ
            .get("PATH_INFO")
            .cloned()
            .unwrap_or_else(|| "/".to_owned());
        let method = environ
            .get("REQUEST_METHOD")
            .cloned()
            .unwrap_or_else(|| "GET".to_owned());
        let query_string = environ.get("QUERY_STRING").map_or("", String::as_str);

        Self {
            method,
            path,
            query_params: parse_query_params(query_string),
        }
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }

    /// The full parsed query map.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Returns a single query parameter.
    ///
    /// For `QUERY_STRING=page=2`, `req.query("page")` returns `Some("2")`.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }
}

/// Naive query-string split, kept bug-for-bug compatible with the systems
/// this layer fronts.
///
/// Each `&`-separated segment is split on `=`; a segment is kept only when
/// that split yields exactly two parts. So `k=` survives as `("k", "")`,
/// while a bare `k` and a `k=1=2` are silently dropped — even though the
/// latter is a legal value containing `=`. Duplicate keys: last write wins.
/// No percent-decoding, no `+`-for-space translation.
fn parse_query_params(query_string: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for segment in query_string.split('&') {
        let parts: Vec<&str> = segment.split('=').collect();
        if let [key, value] = parts[..] {
            params.insert(key.to_owned(), value.to_owned());
        }
    }
    params
}
