//! Live round-trips against the mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread, then
//! drives the real client and ureq transport against it over HTTP. URL
//! composition, header forwarding, header-block parsing, and outcome
//! classification are all exercised end to end.

use std::net::SocketAddr;

use simple_http::status;
use simple_http::types::{Host, PathSegment, Protocol, QueryKey, QueryValue, RequestBody};
use simple_http::url::{PathSegments, QueryParameters};
use simple_http::{eq, Client, Headers, HttpFailure, Url};

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn server_url(addr: SocketAddr, segment: &str) -> Url {
    Url::new()
        .with_protocol(Protocol::from("http"))
        .with_host(Host::from(addr.to_string()))
        .with_path_segments(PathSegments::new(vec![PathSegment::from(segment)]))
}

fn json_headers() -> Headers {
    Headers::from([("Content-Type".to_string(), "application/json".to_string())])
}

fn body_json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("mock server replies with JSON")
}

#[test]
fn get_classifies_as_success_and_parses_the_response() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .get(&server_url(addr, "get"), &Headers::new())
        .expect("GET /get replies 200");

    assert_eq!(success.status(), status::OK);
    assert_eq!(success.body().value(), "{\"get\":\"ok\"}");
    // hyper writes header names in lowercase on the wire.
    assert_eq!(
        success.headers().get("content-type"),
        Some("application/json")
    );
}

#[test]
fn query_parameters_reach_the_server() {
    let addr = start_mock_server();
    let client = Client::new();

    let url = server_url(addr, "get_hello").with_query_parameters(QueryParameters::new(vec![(
        QueryKey::from("name"),
        QueryValue::from("test"),
    )]));
    let success = client.get(&url, &Headers::new()).expect("GET replies 200");

    assert_eq!(body_json(success.body().value())["hello"], "test");
}

#[test]
fn multiple_query_parameters_reach_the_server_in_order() {
    let addr = start_mock_server();
    let client = Client::new();

    let url = server_url(addr, "get_full").with_query_parameters(QueryParameters::new(vec![
        (QueryKey::from("first"), QueryValue::from("simple")),
        (QueryKey::from("last"), QueryValue::from("http")),
    ]));
    let success = client.get(&url, &Headers::new()).expect("GET replies 200");

    let body = body_json(success.body().value());
    assert_eq!(body["first"], "simple");
    assert_eq!(body["last"], "http");
}

#[test]
fn post_sends_the_body_and_parses_the_echo() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .post(
            &server_url(addr, "post"),
            &RequestBody::from("{\"name\":\"test\"}"),
            &json_headers(),
        )
        .expect("POST /post replies 200");

    assert_eq!(body_json(success.body().value())["hello"], "test");
}

#[test]
fn put_sends_the_body_and_parses_the_echo() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .put(
            &server_url(addr, "put"),
            &RequestBody::from("{\"update\":\"test\"}"),
            &json_headers(),
        )
        .expect("PUT /put replies 200");

    assert_eq!(body_json(success.body().value())["update"], "test");
}

#[test]
fn delete_classifies_as_success() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .delete(&server_url(addr, "delete"), &Headers::new())
        .expect("DELETE /delete replies 200");

    assert_eq!(success.status(), status::OK);
    assert!(success.body().value().is_empty());
}

#[test]
fn post_expecting_no_content_accepts_an_empty_reply() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .post_expecting(
            &server_url(addr, "empty_post_response"),
            &RequestBody::from(""),
            eq(status::NO_CONTENT),
            &json_headers(),
        )
        .expect("POST /empty_post_response replies 204");

    assert_eq!(success.status(), status::NO_CONTENT);
    assert!(success.body().value().is_empty());
}

#[test]
fn expected_method_not_allowed_classifies_as_success() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .get_expecting(
            &server_url(addr, "empty_post_response"),
            eq(status::METHOD_NOT_ALLOWED),
            &Headers::new(),
        )
        .expect("GET on a POST-only route replies 405");

    assert_eq!(success.status(), status::METHOD_NOT_ALLOWED);
}

#[test]
fn unexpected_status_classifies_as_failure_with_the_response() {
    let addr = start_mock_server();
    let client = Client::new();

    let failure = client
        .get(&server_url(addr, "empty_post_response"), &Headers::new())
        .expect_err("GET on a POST-only route misses eq(OK)");

    match failure {
        HttpFailure::Unexpected(response) => {
            assert_eq!(response.status, status::METHOD_NOT_ALLOWED);
        }
        HttpFailure::Connection(failure) => {
            panic!("expected a received response, got connection failure {failure}")
        }
    }
}

#[test]
fn unreachable_url_classifies_as_connection_failure() {
    let client = Client::new();

    let failure = client
        .get(&Url::from("error"), &Headers::new())
        .expect_err("no host called 'error' resolves");

    match failure {
        HttpFailure::Connection(failure) => {
            assert!(!failure.value().is_empty());
        }
        HttpFailure::Unexpected(response) => {
            panic!("expected no response at all, got HTTP {}", response.status)
        }
    }
}

#[test]
fn head_retrieves_headers_without_a_body() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .head(&server_url(addr, "get"), &Headers::new())
        .expect("HEAD /get replies 200");

    assert!(success.body().value().is_empty());
    assert_eq!(
        success.headers().get("content-type"),
        Some("application/json")
    );
}

#[test]
fn options_classifies_as_success() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .options(&server_url(addr, "get"), &Headers::new())
        .expect("OPTIONS /get replies 200");

    assert_eq!(success.status(), status::OK);
}

#[test]
fn trace_echoes_the_request_body() {
    let addr = start_mock_server();
    let client = Client::new();

    let success = client
        .trace(&server_url(addr, "trace"), &Headers::new())
        .expect("TRACE /trace replies 200");

    assert_eq!(success.headers().get("content-type"), Some("message/http"));
}

#[test]
fn forwarded_request_headers_reach_the_server() {
    let addr = start_mock_server();
    let client = Client::new();

    // /post rejects requests without a JSON content type, so a 200 here
    // proves the Content-Type header went out with the request.
    let success = client
        .post(
            &server_url(addr, "post"),
            &RequestBody::from("{\"name\":\"test\"}"),
            &json_headers(),
        )
        .expect("POST with JSON content type replies 200");
    assert_eq!(success.status(), status::OK);

    let failure = client
        .post(
            &server_url(addr, "post"),
            &RequestBody::from("{\"name\":\"test\"}"),
            &Headers::new(),
        )
        .expect_err("POST without a content type misses eq(OK)");
    match failure {
        HttpFailure::Unexpected(response) => {
            assert_eq!(response.status, status::UNSUPPORTED_MEDIA_TYPE);
        }
        HttpFailure::Connection(failure) => {
            panic!("expected a received response, got connection failure {failure}")
        }
    }
}
