//! Test-only helpers: scaffolded target projects and scripted assistants.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};

use crate::io::assistant::{Assistant, SessionRequest};
use crate::io::project::{ROOT_MARKER, SPECS_DIR};

/// A temporary target project with the root marker and a `specs/` directory.
pub struct TestProject {
    dir: tempfile::TempDir,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        fs::write(dir.path().join(ROOT_MARKER), "[project]\nname = \"target\"\n")
            .context("write root marker")?;
        fs::create_dir(dir.path().join(SPECS_DIR)).context("create specs dir")?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `specs/<name>` with the given contents.
    pub fn write_spec(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.root().join(SPECS_DIR).join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}

/// Assistant that records session requests instead of spawning anything.
#[derive(Default)]
pub struct RecordingAssistant {
    requests: Mutex<Vec<SessionRequest>>,
    failure: Option<String>,
}

impl RecordingAssistant {
    /// Assistant whose sessions fail with the given message after recording
    /// the request.
    pub fn failing(message: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    /// The most recently recorded session request, if any.
    pub fn last_request(&self) -> Option<SessionRequest> {
        self.requests.lock().expect("requests lock").last().cloned()
    }

    /// Number of sessions run.
    pub fn session_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

impl Assistant for RecordingAssistant {
    fn run_session(&self, request: &SessionRequest) -> Result<()> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        match &self.failure {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }
}
