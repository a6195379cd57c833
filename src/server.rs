//! Serving adapter and graceful shutdown.
//!
//! The dispatch core is synchronous and knows nothing about sockets; this
//! module is the boundary that owns them. Per request it builds the
//! environment mapping (`PATH_INFO`, `REQUEST_METHOD`, `QUERY_STRING`) from
//! the hyper request, calls [`App::handle_request`], and converts the
//! finished [`Response`] into wire form. Concurrency lives entirely here:
//! the `App` is shared read-only behind an `Arc`, one `handle_request` call
//! per request, no locking.
//!
//! # Graceful shutdown
//!
//! On SIGTERM or Ctrl-C the server stops accepting, lets every in-flight
//! connection task run to completion, and returns from [`Server::serve`].
//! Under Kubernetes, set `terminationGracePeriodSeconds` longer than your
//! slowest request.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderName, HeaderValue, StatusCode};
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app::App;
use crate::error::Error;
use crate::response::Response;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `app`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve(self, app: App) -> Result<(), Error> {
        let listener = TcpListener::bind(self.addr).await?;

        // Shared across concurrent connection tasks without copying the
        // route table. Registration happened before this point, so the app
        // is read-only from here on.
        let app = Arc::new(app);

        info!(addr = %self.addr, "plinth listening");

        // JoinSet tracks every spawned connection task so we can wait for
        // them all to finish during graceful shutdown.
        let mut tasks = tokio::task::JoinSet::new();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // `biased` checks arms top-to-bottom: a SIGTERM immediately
                // stops accepting, even with connections queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let app = Arc::clone(&app);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // `service_fn` is called once per request on the
                        // connection, not once per connection.
                        let svc = service_fn(move |req| {
                            let app = Arc::clone(&app);
                            async move { dispatch(app, req).await }
                        });

                        // `auto::Builder` handles both HTTP/1.1 and HTTP/2,
                        // whatever the client negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet does not grow
                // without bound on long-running servers.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        // Drain: wait for every in-flight connection to finish.
        while tasks.join_next().await.is_some() {}

        info!("plinth stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Hot path: one hyper request in, one wire response out.
///
/// The error type is [`Infallible`](std::convert::Infallible) — the dispatch
/// core never fails (a routing miss is a 404 response), so hyper never sees
/// an error. A panicking handler aborts this connection task instead; the
/// core deliberately catches nothing.
async fn dispatch(
    app: Arc<App>,
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<Full<Bytes>>, std::convert::Infallible> {
    let environ = environ_from(req.method(), req.uri());
    let response = app.handle_request(&environ);
    Ok(into_http(response))
}

/// Builds the per-request environment mapping the dispatch core consumes.
///
/// `QUERY_STRING` is the raw query, untouched — decoding (or the deliberate
/// lack of it) is the core's business.
fn environ_from(method: &http::Method, uri: &http::Uri) -> HashMap<String, String> {
    let mut environ = HashMap::new();
    environ.insert("PATH_INFO".to_owned(), uri.path().to_owned());
    environ.insert("REQUEST_METHOD".to_owned(), method.as_str().to_owned());
    environ.insert(
        "QUERY_STRING".to_owned(),
        uri.query().unwrap_or("").to_owned(),
    );
    environ
}

/// Converts a finished [`Response`] into hyper's wire type.
///
/// The core does not validate status codes or header contents, so the
/// lossy cases land here: a status outside hyper's representable range
/// becomes 500, and a header pair that is not legal on the wire is skipped.
/// Reason phrases are hyper's, derived from the numeric code.
fn into_http(response: Response) -> http::Response<Full<Bytes>> {
    let status = StatusCode::from_u16(response.status_code)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = http::Response::builder().status(status);
    if let Some(headers) = builder.headers_mut() {
        for (key, value) in &response.headers {
            let (Ok(name), Ok(value)) = (
                HeaderName::try_from(key.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) else {
                continue;
            };
            headers.insert(name, value);
        }
    }

    builder
        .body(Full::new(Bytes::from(response.body)))
        .unwrap_or_else(|_| http::Response::new(Full::new(Bytes::new())))
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives.
///
/// On Unix this listens for both **SIGTERM** (sent by `kubectl` and the
/// Kubernetes control plane) and **SIGINT** (Ctrl-C, for local dev).
/// On Windows only Ctrl-C is available.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
