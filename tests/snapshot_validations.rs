mod common;

use common::asserts::{assert_actual, assert_preflight};
use common::builders::{actual_request, cors, preflight_request};
use cors_gate::Headers;
use cors_gate::constants::method;
use insta::assert_snapshot;

fn render(headers: &Headers) -> String {
    headers
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn listed_origin_preflight_snapshot() {
    let cors = cors()
        .origins(["http://foo.bar"])
        .methods(["get", "post", "options"])
        .allowed_headers(["X-Rate-Limit-Identifier", "Content-Type"])
        .exposed_headers(["Request-ID"])
        .max_age(3600)
        .credentials(true)
        .build();

    let headers = assert_preflight(
        preflight_request()
            .origin("http://foo.bar")
            .request_method(method::POST)
            .request_headers("X-RATE-LIMIT-IDENTIFIER, CONTENT-TYPE")
            .evaluate(&cors),
    );

    assert_snapshot!(render(&headers), @r"
Access-Control-Allow-Origin: http://foo.bar
Vary: Origin
Access-Control-Allow-Credentials: true
Access-Control-Expose-Headers: Request-ID
Access-Control-Allow-Methods: GET, POST, OPTIONS
Access-Control-Allow-Headers: x-rate-limit-identifier, content-type
Access-Control-Max-Age: 3600
");
}

#[test]
fn wildcard_preflight_snapshot() {
    let cors = cors().allow_all().build();

    let headers = assert_preflight(
        preflight_request()
            .origin("http://foo.bar")
            .request_method("put")
            .request_headers("x-debug, content-type")
            .evaluate(&cors),
    );

    assert_snapshot!(render(&headers), @r"
Access-Control-Allow-Origin: *
Access-Control-Allow-Methods: PUT
Access-Control-Allow-Headers: X-DEBUG, CONTENT-TYPE
Access-Control-Max-Age: 0
");
}

#[test]
fn listed_origin_actual_snapshot() {
    let cors = cors()
        .origins(["http://foo.bar"])
        .methods(["GET", "POST", "OPTIONS"])
        .allowed_headers(["*"])
        .exposed_headers(["Request-ID", "X-Trace"])
        .max_age(3600)
        .credentials(true)
        .build();

    let headers = assert_actual(
        actual_request()
            .origin("http://foo.bar")
            .method(method::POST)
            .evaluate(&cors),
    );

    assert_snapshot!(render(&headers), @r"
Access-Control-Allow-Origin: http://foo.bar
Vary: Origin
Access-Control-Allow-Credentials: true
Access-Control-Expose-Headers: Request-ID, X-Trace
");
}
