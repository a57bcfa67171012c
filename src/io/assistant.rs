//! Assistant abstraction for delegating code changes.
//!
//! The [`Assistant`] trait decouples workflow orchestration from the actual
//! assistant backend (currently the `aider` CLI). Tests use scripted
//! assistants that record the session request without spawning processes.

use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, instrument, warn};

use crate::core::context::ContextSets;
use crate::core::model::ModelConfig;
use crate::io::process::run_with_timeout;

/// Edit format of the primary model: it plans the change, the editor model
/// applies it.
const MAIN_EDIT_FORMAT: &str = "architect";

/// Everything one assistant session needs.
#[derive(Debug, Clone)]
pub struct SessionRequest {
    /// Target project root; the assistant process runs here.
    pub workdir: PathBuf,
    /// Fully assembled prompt text.
    pub prompt: String,
    /// Model triple for this session.
    pub model: ModelConfig,
    /// Editable and read-only file sets, in configured order.
    pub context: ContextSets,
    /// Whether the assistant commits its edits.
    pub auto_commits: bool,
    /// Maximum time to wait for the session to complete.
    pub timeout: Duration,
    /// Bound on captured assistant stdout/stderr.
    pub output_limit_bytes: usize,
}

/// Abstraction over assistant backends.
pub trait Assistant {
    /// Run one session to completion. Fire-and-forget from the caller's
    /// perspective: the outcome of the edits is not observed here, only
    /// whether the session itself succeeded.
    fn run_session(&self, request: &SessionRequest) -> Result<()>;
}

/// Assistant that spawns the `aider` CLI.
pub struct AiderAssistant;

impl Assistant for AiderAssistant {
    #[instrument(skip_all, fields(workdir = %request.workdir.display(), timeout_secs = request.timeout.as_secs()))]
    fn run_session(&self, request: &SessionRequest) -> Result<()> {
        info!(
            model = %request.model.main,
            editor = %request.model.editor,
            editable = request.context.editable.len(),
            read_only = request.context.read_only.len(),
            "starting aider session"
        );

        // aider reads the prompt from a message file; argv is too fragile for
        // multi-kilobyte spec documents.
        let message_file = write_message_file(&request.prompt)?;

        let mut cmd = Command::new("aider");
        cmd.arg("--model")
            .arg(&request.model.main)
            .arg("--editor-model")
            .arg(&request.model.editor)
            .arg("--editor-edit-format")
            .arg(&request.model.editor_edit_format)
            .arg("--edit-format")
            .arg(MAIN_EDIT_FORMAT)
            .arg("--yes-always")
            .arg("--no-suggest-shell-commands")
            .arg(if request.auto_commits {
                "--auto-commits"
            } else {
                "--no-auto-commits"
            })
            .arg("--message-file")
            .arg(message_file.path());
        for path in &request.context.editable {
            cmd.arg("--file").arg(path);
        }
        for path in &request.context.read_only {
            cmd.arg("--read").arg(path);
        }
        cmd.current_dir(&request.workdir);

        let output = run_with_timeout(cmd, request.timeout, request.output_limit_bytes)
            .context("run aider")?;

        if output.timed_out {
            warn!(timeout_secs = request.timeout.as_secs(), "aider timed out");
            return Err(anyhow!("aider timed out after {:?}", request.timeout));
        }
        if !output.status.success() {
            warn!(exit_code = ?output.status.code(), "aider failed");
            return Err(anyhow!(
                "aider failed with status {:?}: {}",
                output.status.code(),
                output.stderr_tail(2048).trim()
            ));
        }

        debug!("aider session completed");
        Ok(())
    }
}

/// Write the prompt to a temporary file that lives until the session ends.
fn write_message_file(prompt: &str) -> Result<tempfile::NamedTempFile> {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .prefix("specflow-prompt-")
        .suffix(".md")
        .tempfile()
        .context("create prompt message file")?;
    file.write_all(prompt.as_bytes())
        .context("write prompt message file")?;
    file.flush().context("flush prompt message file")?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_file_holds_prompt_verbatim() {
        let file = write_message_file("Implement: <description>\n").expect("message file");
        let contents = std::fs::read_to_string(file.path()).expect("read back");
        assert_eq!(contents, "Implement: <description>\n");
    }
}
