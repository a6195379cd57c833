//! Built-in Kubernetes health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |
//!
//! Register them as ordinary routes:
//!
//! ```rust
//! use plinth::{App, health};
//!
//! let app = App::new()
//!     .route("/healthz", health::liveness)
//!     .route("/readyz", health::readiness);
//! ```
//!
//! Replace `readiness` with your own handler if you need to gate on
//! dependency availability (database connections, downstream services, etc.).

use crate::{Request, Response};

/// Kubernetes liveness probe handler.
///
/// Always answers `200` with body `"ok"`. If the process can dispatch at
/// all, it is alive — this handler intentionally has no dependencies.
pub fn liveness(_req: &Request, res: &mut Response) {
    res.set_body("ok");
}

/// Kubernetes readiness probe handler (default implementation).
///
/// Answers `200` with body `"ready"`. Replace it with your own handler if
/// your application needs a warm-up period or must verify dependency health
/// before accepting traffic.
pub fn readiness(_req: &Request, res: &mut Response) {
    res.set_body("ready");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::App;

    #[test]
    fn probes_answer_on_their_routes() {
        let app = App::new()
            .route("/healthz", super::liveness)
            .route("/readyz", super::readiness);

        let mut environ = HashMap::new();
        environ.insert("PATH_INFO".to_owned(), "/healthz".to_owned());
        let res = app.handle_request(&environ);
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), "ok");

        environ.insert("PATH_INFO".to_owned(), "/readyz".to_owned());
        let res = app.handle_request(&environ);
        assert_eq!(res.body(), "ready");
    }
}
