//! End-to-end dispatch pipeline tests driven through the public API:
//! environment mapping in, response out, no server involved.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use plinth::{App, Request, Response};

fn environ(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

fn home(_req: &Request, res: &mut Response) {
    res.set_body("<h1>Hello, World!</h1>");
}

#[test]
fn home_page_round_trip() {
    let app = App::new().route("/", home);

    let res = app.handle_request(&environ(&[
        ("PATH_INFO", "/"),
        ("REQUEST_METHOD", "GET"),
        ("QUERY_STRING", ""),
    ]));

    assert_eq!(res.status_code(), 200);
    assert_eq!(res.body(), "<h1>Hello, World!</h1>");
    assert_eq!(res.header("Content-Type"), Some("text/html"));
}

#[test]
fn missing_route_yields_the_default_404() {
    let app = App::new().route("/", home);

    let res = app.handle_request(&environ(&[("PATH_INFO", "/missing")]));

    assert_eq!(res.status_code(), 404);
    assert_eq!(res.body(), "404 Not Found");
}

#[test]
fn handler_reads_query_params_parsed_by_the_core() {
    let app = App::new().route("/search", |req: &Request, res: &mut Response| {
        let q = req.query("q").unwrap_or("<none>");
        res.set_body(format!("results for {q}"));
    });

    let res = app.handle_request(&environ(&[
        ("PATH_INFO", "/search"),
        ("QUERY_STRING", "q=rust&page=2&broken"),
    ]));

    assert_eq!(res.body(), "results for rust");
}

#[test]
fn middleware_observes_every_request_in_order() {
    let trace: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let t1 = Arc::clone(&trace);
    let t2 = Arc::clone(&trace);
    let app = App::new()
        .middleware(move |req: &Request, _res: &mut Response| {
            t1.lock().unwrap().push(format!("m1:{}", req.path()));
        })
        .middleware(move |req: &Request, _res: &mut Response| {
            t2.lock().unwrap().push(format!("m2:{}", req.path()));
        })
        .route("/", home);

    let _ = app.handle_request(&environ(&[("PATH_INFO", "/")]));
    let _ = app.handle_request(&environ(&[("PATH_INFO", "/other")]));

    assert_eq!(
        *trace.lock().unwrap(),
        vec!["m1:/", "m2:/", "m1:/other", "m2:/other"],
    );
}

#[test]
fn middleware_headers_survive_the_default_handler() {
    let app = App::new().middleware(|_req: &Request, res: &mut Response| {
        res.add_header("X-Request-Id", "42");
    });

    let res = app.handle_request(&environ(&[("PATH_INFO", "/nowhere")]));

    // The default handler replaces status and body but leaves headers alone.
    assert_eq!(res.status_code(), 404);
    assert_eq!(res.header("X-Request-Id"), Some("42"));
}

#[test]
fn app_is_shareable_across_threads() {
    let app = Arc::new(App::new().route("/", home));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let app = Arc::clone(&app);
            std::thread::spawn(move || {
                let res = app.handle_request(&environ(&[("PATH_INFO", "/")]));
                assert_eq!(res.status_code(), 200);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
