//! Shared test fixtures for execution, HTTP, and session test modules.
//!
//! Keeping small reusable helpers here prevents each test module from
//! rebuilding temp dirs, HTTP stubs, and trait mocks.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

use crate::exec::CommandRunner;
use crate::inference::Generator;
use crate::types::{ExecutionOutcome, Generation};
use crate::ui::{ProgressHandle, Prompter, RenderSink};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("termo-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

// ---------------------------------------------------------------------------
// HTTP stub
// ---------------------------------------------------------------------------

/// Canned HTTP/1.1 response served by [`spawn_http_stub`].
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    body: String,
}

impl StubReply {
    pub fn ok_json(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Request as seen by the stub.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request line plus headers.
    pub head: String,
    pub body: String,
}

pub struct StubServer {
    pub base_url: String,
    requests: mpsc::UnboundedReceiver<CapturedRequest>,
}

impl StubServer {
    pub async fn next_request(&mut self) -> Option<CapturedRequest> {
        self.requests.recv().await
    }
}

/// Serve `replies` in order, one per connection, on an ephemeral port.
pub async fn spawn_http_stub(replies: Vec<StubReply>) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for reply in replies {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            if let Some(request) = read_request(&mut stream).await {
                let _ = tx.send(request);
            }
            let _ = stream.write_all(render_response(&reply).as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    StubServer {
        base_url: format!("http://{addr}"),
        requests: rx,
    }
}

/// Base URL of a local port with nothing listening on it.
pub async fn unused_local_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{addr}")
}

async fn read_request(stream: &mut TcpStream) -> Option<CapturedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(CapturedRequest {
        head,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

fn render_response(reply: &StubReply) -> String {
    let reason = match reply.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    };
    format!(
        "HTTP/1.1 {} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    )
}

// ---------------------------------------------------------------------------
// Session mocks
// ---------------------------------------------------------------------------

/// Generator returning a fixed generation and explanation text.
pub struct FakeGenerator {
    generation: Generation,
    explanation: String,
    generate_calls: AtomicUsize,
    explain_calls: Mutex<Vec<(String, String)>>,
}

impl FakeGenerator {
    pub fn new(generation: Generation) -> Self {
        Self {
            generation,
            explanation: "explanation".to_string(),
            generate_calls: AtomicUsize::new(0),
            explain_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_explanation(mut self, text: &str) -> Self {
        self.explanation = text.to_string();
        self
    }

    pub fn generate_count(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    /// `(command, error_output)` pairs in call order.
    pub fn explain_calls(&self) -> Vec<(String, String)> {
        self.explain_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, _request: &str) -> Generation {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.generation.clone()
    }

    async fn explain_error(&self, command: &str, error_output: &str) -> String {
        self.explain_calls
            .lock()
            .unwrap()
            .push((command.to_string(), error_output.to_string()));
        self.explanation.clone()
    }
}

/// Runner that records commands instead of spawning them.
pub struct CountingRunner {
    outcome: ExecutionOutcome,
    commands: Mutex<Vec<String>>,
}

impl CountingRunner {
    pub fn new(outcome: ExecutionOutcome) -> Self {
        Self {
            outcome,
            commands: Mutex::new(Vec::new()),
        }
    }

    pub fn count(&self) -> usize {
        self.commands.lock().unwrap().len()
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for CountingRunner {
    async fn execute(&self, command: &str) -> ExecutionOutcome {
        self.commands.lock().unwrap().push(command.to_string());
        self.outcome.clone()
    }
}

/// Prompter answering from a script; end of script behaves like EOF.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.clone()
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn ask(&mut self, question: &str) -> Option<String> {
        self.asked.push(question.to_string());
        self.answers.pop_front()
    }
}

/// Render sink capturing `"<kind>: <text>"` lines.
#[derive(Default)]
pub struct RecordingRenderer {
    lines: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    fn record(&self, kind: &str, text: &str) {
        self.lines.lock().unwrap().push(format!("{kind}: {text}"));
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines().iter().any(|l| l == line)
    }

    pub fn lines_with(&self, prefix: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|l| l.starts_with(prefix))
            .collect()
    }
}

impl RenderSink for RecordingRenderer {
    fn progress(&self, _label: &str) -> ProgressHandle {
        ProgressHandle::disabled()
    }

    fn activity(&self, text: &str) {
        self.record("activity", text);
    }

    fn section(&self, title: &str) {
        self.record("section", title);
    }

    fn command(&self, command: &str) {
        self.record("command", command);
    }

    fn field(&self, key: &str, value: &str) {
        self.record("field", &format!("{key} {value}"));
    }

    fn explanation(&self, text: &str) {
        self.record("explanation", text);
    }

    fn warn(&self, msg: &str) {
        self.record("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.record("error", msg);
    }

    fn success(&self, msg: &str) {
        self.record("success", msg);
    }

    fn notice(&self, msg: &str) {
        self.record("notice", msg);
    }

    fn command_output(&self, text: &str) {
        self.record("command_output", text);
    }

    fn error_output(&self, text: &str) {
        self.record("error_output", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_resolves_and_cleans_up() {
        let path = {
            let fixture = TestTempDir::new("fixture");
            fs::write(fixture.child("file.txt"), "hello").unwrap();
            assert!(fixture.child("file.txt").exists());
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn stub_captures_body_and_serves_reply() {
        let mut stub = spawn_http_stub(vec![StubReply::ok_json(r#"{"ok":true}"#)]).await;
        let addr = stub.base_url.trim_start_matches("http://").to_string();

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"POST /x HTTP/1.1\r\nHost: a\r\nContent-Length: 5\r\n\r\nhello")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(response.ends_with(r#"{"ok":true}"#));
        let seen = stub.next_request().await.unwrap();
        assert!(seen.head.starts_with("POST /x HTTP/1.1"));
        assert_eq!(seen.body, "hello");
    }

    #[test]
    fn recording_renderer_formats_lines() {
        let renderer = RecordingRenderer::default();
        renderer.warn("careful");
        renderer.field("Safety:", "safe");
        assert!(renderer.contains("warn: careful"));
        assert_eq!(renderer.lines_with("field:"), vec!["field: Safety: safe"]);
    }
}
