#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::Arc;

use feedback_form::{
    FeedbackError, FieldName, FormConfig, FormController, FormPayload, HttpClient, KeyValueStore,
    MemoryHistory, MemoryStore, RelayResponse, ReqwestClient, Result,
};
use http::StatusCode;
use parking_lot::Mutex;
use tempfile::TempDir;

/// Helper struct to run the `feedback` binary against an isolated draft store
pub struct FeedbackTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl FeedbackTest {
    pub fn new() -> Self {
        FeedbackTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
            binary_path: env!("CARGO_BIN_EXE_feedback"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        Command::new(self.binary_path)
            .args(args)
            .env("FEEDBACK_DATA_DIR", self.temp_dir.path())
            .env_remove("FEEDBACK_RELAY_URL")
            .env("NO_COLOR", "1")
            .envs(envs.iter().copied())
            .output()
            .expect("Failed to execute feedback command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Raw content of the draft store file, if it exists
    pub fn read_store(&self) -> Option<String> {
        std::fs::read_to_string(self.temp_dir.path().join("storage.json")).ok()
    }
}

/// Relay client that ignores any proxy configured in the environment
pub fn local_client() -> ReqwestClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build local reqwest client");
    ReqwestClient::with_client(client)
}

/// A relay URL on a local port nothing listens on
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind an unused port");
    let addr = listener.local_addr().expect("local address");
    drop(listener);
    format!("http://{addr}/f/dead")
}

/// What the recording client answers
#[derive(Debug, Clone)]
pub enum Reply {
    Status(StatusCode, String),
    TransportError(String),
}

/// [`HttpClient`] that records every request and answers from a script
#[derive(Clone)]
pub struct RecordingClient {
    pub requests: Arc<Mutex<Vec<(String, FormPayload)>>>,
    reply: Reply,
}

impl RecordingClient {
    pub fn replying(reply: Reply) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply,
        }
    }

    pub fn ok() -> Self {
        Self::replying(Reply::Status(StatusCode::OK, r#"{"ok":true}"#.to_string()))
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<(String, FormPayload)> {
        self.requests.lock().last().cloned()
    }
}

impl HttpClient for RecordingClient {
    async fn post_form(&self, url: &str, payload: &FormPayload) -> Result<RelayResponse> {
        self.requests
            .lock()
            .push((url.to_string(), payload.clone()));
        match &self.reply {
            Reply::Status(status, body) => Ok(RelayResponse::new(*status, body.clone())),
            Reply::TransportError(message) => Err(FeedbackError::Other(message.clone())),
        }
    }
}

/// [`KeyValueStore`] whose writes and removals always fail.
///
/// Reads return `draft`, or fail when `draft` is `None`. Clones share the
/// attempt counters.
#[derive(Clone, Default)]
pub struct FailingStore {
    draft: Option<String>,
    pub writes: Arc<Mutex<usize>>,
    pub removals: Arc<Mutex<usize>>,
}

impl FailingStore {
    /// Reads fail as well
    pub fn unreadable() -> Self {
        Self::default()
    }

    /// Reads return `draft`
    pub fn holding(draft: &str) -> Self {
        Self {
            draft: Some(draft.to_string()),
            ..Self::default()
        }
    }

    fn failure(operation: &'static str) -> FeedbackError {
        FeedbackError::StorageError {
            operation,
            path: PathBuf::from("storage.json"),
            source: std::io::Error::other("disk unavailable"),
        }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        match &self.draft {
            Some(draft) => Ok(Some(draft.clone())),
            None => Err(Self::failure("read")),
        }
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        *self.writes.lock() += 1;
        Err(Self::failure("write"))
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        *self.removals.lock() += 1;
        Err(Self::failure("delete"))
    }
}

pub type TestController = FormController<MemoryStore, MemoryHistory, RecordingClient>;

/// Controller over shared in-memory capabilities; the returned store and
/// client are handles onto the ones the controller uses
pub fn test_controller(
    store: MemoryStore,
    client: RecordingClient,
) -> (TestController, MemoryStore, RecordingClient) {
    let controller = FormController::new(
        FormConfig::default(),
        store.clone(),
        MemoryHistory::default(),
        client.clone(),
    );
    (controller, store, client)
}

/// Type a complete, valid form into the controller
pub fn fill_valid_form(controller: &mut TestController) {
    controller
        .handle_input(FieldName::FullName, "Ivan Petrov")
        .expect("full name input");
    controller
        .handle_input(FieldName::Email, "ivan@example.com")
        .expect("email input");
    controller
        .handle_input(FieldName::Phone, "89991234567")
        .expect("phone input");
    controller
        .handle_input(FieldName::Organization, "Acme")
        .expect("organization input");
    controller
        .handle_input(FieldName::Message, "Please call me back")
        .expect("message input");
    controller.set_privacy_policy(true);
}
