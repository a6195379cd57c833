//! Outgoing response container.
//!
//! A [`Response`] is a plain mutable value: middleware and handlers write
//! status, headers, and body into it in place, and the dispatcher hands the
//! finished value back to the serving adapter, which owns serialization.

use std::collections::HashMap;

/// An outgoing response under construction.
///
/// Created by the dispatcher with defaults (200, `Content-Type: text/html`,
/// empty body) before any middleware runs:
///
/// ```rust
/// use plinth::{Request, Response};
///
/// fn home(_req: &Request, res: &mut Response) {
///     res.set_body("<h1>Hello, World!</h1>");
/// }
///
/// fn created(_req: &Request, res: &mut Response) {
///     res.set_status(201);
///     res.add_header("Location", "/users/42");
///     res.set_body("created");
/// }
/// ```
///
/// No validation happens here: the status code is any `u16`, header values
/// are any strings. What ends up on the wire is the adapter's problem.
pub struct Response {
    pub(crate) status_code: u16,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: String,
}

impl Response {
    /// The default response: status 200, `Content-Type: text/html`, no body.
    pub fn new() -> Self {
        Self::with(200, "text/html")
    }

    /// A response with an explicit status code and content type.
    pub fn with(status_code: u16, content_type: &str) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_owned(), content_type.to_owned());
        Self { status_code, headers, body: String::new() }
    }

    /// Replaces the body unconditionally.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Replaces the status code.
    pub fn set_status(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    /// Upserts a header: inserts, or overwrites an existing key.
    pub fn add_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn status_code(&self) -> u16 { self.status_code }
    pub fn body(&self) -> &str { &self.body }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns a header value by exact key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

impl Default for Response {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_200_html_empty_body() {
        let res = Response::new();
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("Content-Type"), Some("text/html"));
        assert_eq!(res.body(), "");
    }

    #[test]
    fn with_seeds_status_and_content_type() {
        let res = Response::with(204, "application/json");
        assert_eq!(res.status_code(), 204);
        assert_eq!(res.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn set_body_replaces() {
        let mut res = Response::new();
        res.set_body("first");
        res.set_body("second");
        assert_eq!(res.body(), "second");
    }

    #[test]
    fn add_header_overwrites_existing_key() {
        let mut res = Response::new();
        res.add_header("X-Trace", "a");
        res.add_header("X-Trace", "b");
        assert_eq!(res.header("X-Trace"), Some("b"));
        assert_eq!(res.headers().len(), 2); // Content-Type + X-Trace
    }

    #[test]
    fn status_code_is_not_validated() {
        let mut res = Response::new();
        res.set_status(999);
        assert_eq!(res.status_code(), 999);
    }
}
