//! Integration tests for the ticket gate against a loopback tracker.

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tempfile::{tempdir, TempDir};

use hookkit_ticket::{
    GateConfig, GateOptions, GateOutcome, JiraClient, TicketError, TicketGate, TicketId,
    TicketTracker,
};

/// A canned HTTP/1.1 server answering one response per connection.
struct FixtureServer {
    base_uri: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FixtureServer {
    fn start(responses: Vec<Vec<u8>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_uri = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => head.extend_from_slice(&buf[..n]),
                    }
                }
                seen.lock()
                    .unwrap()
                    .push(String::from_utf8_lossy(&head).to_string());
                let _ = stream.write_all(&response);
                let _ = stream.flush();
            }
        });

        Self { base_uri, requests }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn response(status: &str, content_type: &str, body: &[u8]) -> Vec<u8> {
    let mut out = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    )
    .into_bytes();
    out.extend_from_slice(body);
    out
}

fn json_ok(body: &str) -> Vec<u8> {
    response("200 OK", "application/json", body.as_bytes())
}

fn message(content: &str) -> (TempDir, PathBuf) {
    let temp = tempdir().unwrap();
    let path = temp.path().join("COMMIT_EDITMSG");
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn gate_for(base_uri: &str, options: GateOptions) -> TicketGate<JiraClient> {
    let options = GateOptions {
        tracker_uri: Some("$TRACKER".to_string()),
        token: Some("$TOKEN".to_string()),
        timeout: Duration::from_secs(5),
        ..options
    };
    let env: HashMap<String, String> = [
        ("TRACKER".to_string(), base_uri.to_string()),
        ("TOKEN".to_string(), "pat-123".to_string()),
    ]
    .into_iter()
    .collect();
    let config = GateConfig::resolve(&options, &env);
    let client = JiraClient::new(&config.tracker_uri, &config.token, config.timeout).unwrap();
    TicketGate::new(config, client)
}

fn ticket() -> TicketId {
    TicketId::from_subject("ABC-123: Banana").unwrap()
}

#[tokio::test]
async fn test_done_ticket_over_http() {
    let server = FixtureServer::start(vec![json_ok(
        r#"{"fields":{"status":{"statusCategory":{"key":"done"}}}}"#,
    )]);
    let (_temp, path) = message("ABC-123: Banana");

    let report = gate_for(&server.base_uri, GateOptions::default())
        .run(&path)
        .await
        .unwrap();

    assert_eq!(report.outcome, GateOutcome::StatusCategoryRejected);
    assert_eq!(report.exit_code(), 1);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /rest/api/latest/issue/ABC-123 HTTP/1.1"));
    assert!(requests[0]
        .to_lowercase()
        .contains("authorization: bearer pat-123"));
}

#[tokio::test]
async fn test_version_and_status_use_two_requests() {
    let body = r#"{"fields":{"fixVersions":[{"name":"v1"}],"status":{"statusCategory":{"key":"indeterminate"}}}}"#;
    let server = FixtureServer::start(vec![json_ok(body), json_ok(body)]);
    let (_temp, path) = message("ABC-123: Banana\n\nBody");
    let options = GateOptions {
        allowed_fix_versions: vec!["v1".to_string()],
        ..GateOptions::default()
    };

    let report = gate_for(&server.base_uri, options).run(&path).await.unwrap();

    assert_eq!(report.outcome, GateOutcome::Passed);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_non_json_body_is_absent_data() {
    let server = FixtureServer::start(vec![
        response("200 OK", "text/html", b"<html>login</html>"),
        response("200 OK", "text/html", b"<html>login</html>"),
    ]);
    let client = JiraClient::new(&server.base_uri, "pat", Duration::from_secs(5)).unwrap();

    assert!(client.fetch(&ticket()).await.unwrap().is_none());

    let (_temp, path) = message("ABC-123: Banana");
    let options = GateOptions {
        allowed_fix_versions: vec!["v1".to_string()],
        ..GateOptions::default()
    };
    let report = gate_for(&server.base_uri, options).run(&path).await.unwrap();
    assert_eq!(report.outcome, GateOutcome::MissingFixVersion);
    assert_eq!(report.exit_code(), 3);
}

#[tokio::test]
async fn test_body_is_decoded_with_advertised_charset() {
    let mut body = br#"{"fields":{"status":{"statusCategory":{"key":"d"#.to_vec();
    body.push(0xE9);
    body.extend_from_slice(br#"j"#);
    body.push(0xE0);
    body.extend_from_slice(br#""}}}}"#);
    let server = FixtureServer::start(vec![response(
        "200 OK",
        "application/json; charset=iso-8859-1",
        &body,
    )]);
    let client = JiraClient::new(&server.base_uri, "pat", Duration::from_secs(5)).unwrap();

    let document = client.fetch(&ticket()).await.unwrap().unwrap();
    assert_eq!(
        hookkit_ticket::project_status_category(&document).as_deref(),
        Some("d\u{e9}j\u{e0}")
    );
}

#[tokio::test]
async fn test_unauthorized_is_an_error() {
    let server = FixtureServer::start(vec![response(
        "401 Unauthorized",
        "application/json",
        br#"{"errorMessages":["denied"]}"#,
    )]);
    let (_temp, path) = message("ABC-123: Banana");

    let err = gate_for(&server.base_uri, GateOptions::default())
        .run(&path)
        .await
        .unwrap_err();

    assert!(matches!(err, TicketError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_other_http_errors_propagate() {
    let server = FixtureServer::start(vec![response("404 Not Found", "text/plain", b"nope")]);
    let client = JiraClient::new(&server.base_uri, "pat", Duration::from_secs(5)).unwrap();

    let err = client.fetch(&ticket()).await.unwrap_err();
    assert!(matches!(err, TicketError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_unreachable_tracker_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let client = JiraClient::new(&base_uri, "pat", Duration::from_secs(5)).unwrap();

    let err = client.fetch(&ticket()).await.unwrap_err();
    assert!(matches!(err, TicketError::Transport(_)));
}

#[tokio::test]
async fn test_missing_uri_without_lenient_is_an_error() {
    let (_temp, path) = message("ABC-123: Banana");
    let err = gate_for("", GateOptions::default())
        .run(&path)
        .await
        .unwrap_err();
    assert!(matches!(err, TicketError::InvalidUri { .. }));
}

#[tokio::test]
async fn test_lenient_without_uri_skips() {
    let (_temp, path) = message("ABC-123: Banana");
    let options = GateOptions {
        lenient: true,
        ..GateOptions::default()
    };
    let report = gate_for("", options).run(&path).await.unwrap();
    assert_eq!(report.outcome, GateOutcome::LenientSkip);
}
