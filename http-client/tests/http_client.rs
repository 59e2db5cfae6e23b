//! HTTP-level tests for the receiver transport
//!
//! These run the real `HttpClient` against a local mock server (or a
//! listener that never answers) and check what goes over the wire.

use std::net::TcpListener;
use std::time::{Duration, Instant};

use http_client::{HttpClient, HttpError, Transport, TransportConfig};
use mockito::{Matcher, Server};
use rstest::rstest;
use serde_json::json;

/// Point the client at the mock server as if it were the forwarding proxy
fn client_for(server: &Server) -> HttpClient {
    HttpClient::new(TransportConfig::proxied(server.url(), "192.168.0.31"))
}

#[test]
fn test_get_sends_identification_headers() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/YamahaExtendedControl/v1/main/getStatus")
        .match_header("X-AppName", "MusicCast/1.0")
        .match_header("X-AppPort", "41100")
        .match_header("ProxyTo", "192.168.0.31")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response_code":0,"power":"on","volume":42}"#)
        .create();

    let body = client_for(&server).get("/main/getStatus").unwrap();

    mock.assert();
    assert_eq!(body["response_code"], 0);
    assert_eq!(body["volume"], 42);
}

#[test]
fn test_get_passes_query_string() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", Matcher::Regex("/main/setVolume".to_string()))
        .match_query(Matcher::UrlEncoded("volume".into(), "30".into()))
        .with_status(200)
        .with_body(r#"{"response_code":0}"#)
        .create();

    client_for(&server).get("/main/setVolume?volume=30").unwrap();

    mock.assert();
}

#[test]
fn test_post_sends_json_body() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/YamahaExtendedControl/v1/dist/setGroupName")
        .match_header("ProxyTo", "192.168.0.31")
        .match_body(Matcher::Json(json!({"name": "Living Room"})))
        .with_status(200)
        .with_body(r#"{"response_code":0}"#)
        .create();

    let body = client_for(&server)
        .post("/dist/setGroupName", &json!({"name": "Living Room"}))
        .unwrap();

    mock.assert();
    assert_eq!(body, json!({"response_code": 0}));
}

#[rstest]
#[case(300)]
#[case(304)]
#[case(404)]
#[case(500)]
#[case(503)]
fn test_non_success_status_is_an_error(#[case] status: usize) {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/YamahaExtendedControl/v1/system/getDeviceInfo")
        .with_status(status)
        .create();

    let result = client_for(&server).get("/system/getDeviceInfo");

    match result {
        Err(HttpError::Status(code)) => assert_eq!(code as usize, status),
        other => panic!("expected HttpError::Status, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/YamahaExtendedControl/v1/netusb/getPlayInfo")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create();

    let result = client_for(&server).get("/netusb/getPlayInfo");

    assert!(matches!(result, Err(HttpError::Parse(_))), "{:?}", result);
}

#[test]
fn test_connection_refused_is_a_network_error() {
    // Bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let client = HttpClient::new(TransportConfig::direct(format!("127.0.0.1:{}", port)));

    let result = client.get("/main/getStatus");

    assert!(matches!(result, Err(HttpError::Network(_))), "{:?}", result);
}

#[test]
fn test_request_times_out_without_retry() {
    // Accepts the connection but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let holder = std::thread::spawn(move || {
        let held = listener.accept();
        std::thread::sleep(Duration::from_secs(2));
        drop(held);
    });

    let timeout = Duration::from_millis(300);
    let client = HttpClient::new(
        TransportConfig::direct(addr.to_string()).with_timeout(timeout),
    );

    let started = Instant::now();
    let result = client.get("/main/getStatus");
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(HttpError::Network(_))), "{:?}", result);
    assert!(
        elapsed + Duration::from_millis(50) >= timeout,
        "returned before the timeout: {:?}",
        elapsed
    );
    // A retry would at least double the wait
    assert!(
        elapsed < timeout + Duration::from_millis(250),
        "took too long to give up: {:?}",
        elapsed
    );

    holder.join().unwrap();
}
