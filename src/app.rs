//! The dispatcher: route table, middleware chain, and the per-request
//! pipeline.
//!
//! Routing is an exact-match `HashMap` lookup. No radix tree, no patterns,
//! no trailing-slash normalization. You register a path, you get a handler.
//! That is all.

use std::collections::HashMap;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

/// The application: a path→handler table and an ordered middleware list.
///
/// Build it once at startup; both tables are append-only and read-only once
/// serving begins, so an `Arc<App>` can be shared across adapter tasks
/// without locking. Each registration call returns `self` so they chain:
///
/// ```rust
/// use plinth::{App, Request, Response, middleware};
///
/// fn home(_req: &Request, res: &mut Response) {
///     res.set_body("<h1>Hello, World!</h1>");
/// }
///
/// let app = App::new()
///     .middleware(middleware::trace)
///     .route("/", home);
/// ```
pub struct App {
    routes: HashMap<String, BoxedHandler>,
    middleware: Vec<BoxedHandler>,
}

impl App {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), middleware: Vec::new() }
    }

    /// Registers a handler for an exact path. Returns `self` for chaining.
    ///
    /// Re-registering the same path silently replaces the earlier handler —
    /// last registration wins.
    pub fn route(mut self, path: &str, handler: impl Handler) -> Self {
        self.routes.insert(path.to_owned(), handler.into_boxed_handler());
        self
    }

    /// Appends a middleware function. Returns `self` for chaining.
    ///
    /// Middleware runs on every request, in registration order, before the
    /// route (or default) handler. There is no removal operation.
    pub fn middleware(mut self, handler: impl Handler) -> Self {
        self.middleware.push(handler.into_boxed_handler());
        self
    }

    /// Dispatches one request: environment mapping in, finished response out.
    ///
    /// The pipeline is linear: parse the [`Request`], create the default
    /// [`Response`] (200, `text/html`, empty body), run every middleware in
    /// registration order, then run exactly one handler — the route table
    /// entry for `request.path` on an exact string match, or the built-in
    /// default (404, body `"404 Not Found"`).
    ///
    /// This layer catches nothing: a panicking middleware or handler unwinds
    /// straight through to the caller. Synchronous start-to-finish, no
    /// suspension points.
    pub fn handle_request(&self, environ: &HashMap<String, String>) -> Response {
        let request = Request::from_environ(environ);
        let mut response = Response::new();

        for middleware in &self.middleware {
            middleware.call(&request, &mut response);
        }

        match self.routes.get(request.path()) {
            Some(handler) => handler.call(&request, &mut response),
            None => default_handler(&request, &mut response),
        }

        response
    }
}

impl Default for App {
    fn default() -> Self { Self::new() }
}

/// Fallback for paths with no registered handler.
fn default_handler(_req: &Request, res: &mut Response) {
    res.set_status(404);
    res.set_body("404 Not Found");
}
