//! Minimal plinth example — two HTML pages, trace middleware, health checks.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:8000/
//!   curl http://localhost:8000/about
//!   curl -i http://localhost:8000/nope
//!   curl 'http://localhost:8000/?name=world&greet='
//!   curl http://localhost:8000/healthz

use plinth::{App, Request, Response, Server, health, middleware};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = App::new()
        .middleware(middleware::trace)
        .route("/", home)
        .route("/about", about)
        .route("/healthz", health::liveness)
        .route("/readyz", health::readiness);

    Server::bind("127.0.0.1:8000")
        .serve(app)
        .await
        .expect("server error");
}

fn home(req: &Request, res: &mut Response) {
    // Query values arrive verbatim: no percent-decoding happens anywhere.
    match req.query("name") {
        Some(name) => res.set_body(format!("<h1>Hello, {name}!</h1>")),
        None => res.set_body("<h1>Hello, World!</h1>"),
    }
}

fn about(_req: &Request, res: &mut Response) {
    res.set_body("<h1>About Page</h1>");
}
