//! Built-in middleware.
//!
//! Middleware intercepts every request before route dispatch and is the
//! right place for cross-cutting concerns: structured tracing, request-id
//! injection, authentication-header inspection. Any function with the
//! handler signature qualifies — register it with
//! [`App::middleware`](crate::App::middleware).

use tracing::info;

use crate::{Request, Response};

/// Per-request trace event with method and path.
///
/// ```rust
/// use plinth::{App, middleware};
///
/// let app = App::new().middleware(middleware::trace);
/// ```
pub fn trace(req: &Request, _res: &mut Response) {
    info!(method = %req.method(), path = %req.path(), "request");
}
