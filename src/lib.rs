//! # plinth
//!
//! A minimal request-dispatch layer. Nothing more. Nothing less.
//!
//! ## The contract
//!
//! plinth's core is the part of a web framework that is the same everywhere:
//! parse one request's environment mapping into a [`Request`], run an ordered
//! middleware chain, look up a handler by exact path, let it mutate a
//! [`Response`], hand the response back. Routing is a `HashMap` lookup,
//! middleware is a list traversal, and the whole pipeline is synchronous —
//! the serving adapter owns sockets, concurrency, and wire encoding.
//!
//! What the core intentionally does not do:
//!
//! - **Pattern routing** — paths match exactly, or they 404
//! - **Error recovery** — a panicking handler unwinds to the caller
//! - **URL decoding** — query values pass through verbatim
//! - **Anything wire-level** — TLS, framing, streaming belong to the adapter
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use plinth::{App, Request, Response, Server, middleware};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = App::new()
//!         .middleware(middleware::trace)
//!         .route("/", home)
//!         .route("/about", about);
//!
//!     Server::bind("127.0.0.1:8000").serve(app).await.unwrap();
//! }
//!
//! fn home(_req: &Request, res: &mut Response) {
//!     res.set_body("<h1>Hello, World!</h1>");
//! }
//!
//! fn about(_req: &Request, res: &mut Response) {
//!     res.set_body("<h1>About Page</h1>");
//! }
//! ```
//!
//! The core is also usable with no server at all — feed
//! [`App::handle_request`] an environment mapping and inspect the returned
//! [`Response`], which is how the tests drive it.

mod app;
mod error;
mod handler;
mod request;
mod response;
mod server;

pub mod health;
pub mod middleware;

pub use app::App;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::Response;
pub use server::Server;
