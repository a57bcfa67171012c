//! Orchestration of the two workflows.
//!
//! Both follow the same linear sequence: preflight the project root, load a
//! spec document, pick the configured context sets, and hand everything to
//! the assistant in a single synchronous session. They differ only in how
//! the prompt is sourced:
//!
//! - `endpoint` reads `specs/<name>` and uses it verbatim. No placeholder
//!   substitution, even when the document contains the token.
//! - `template` reads the fixed `specs/spec-template.md` and substitutes
//!   every `<description>` occurrence with the caller's description.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::core::prompt::apply_description;
use crate::io::assistant::{Assistant, SessionRequest};
use crate::io::config::{WorkflowEntry, WorkflowsConfig};
use crate::io::project::{ensure_project_root, load_spec, load_template_spec};

/// Create a new endpoint in the target project from `specs/<spec_file_name>`.
pub fn run_endpoint<A: Assistant>(
    root: &Path,
    spec_file_name: &str,
    config: &WorkflowsConfig,
    assistant: &A,
) -> Result<()> {
    ensure_project_root(root)?;
    let prompt = load_spec(root, spec_file_name)?;
    info!(spec = spec_file_name, "running endpoint workflow");
    delegate(root, prompt, config, &config.endpoint, assistant)
}

/// Run the template workflow with a free-text description.
pub fn run_template<A: Assistant>(
    root: &Path,
    description: &str,
    config: &WorkflowsConfig,
    assistant: &A,
) -> Result<()> {
    ensure_project_root(root)?;
    let template = load_template_spec(root)?;
    let prompt = apply_description(&template, description);
    info!("running template workflow");
    delegate(root, prompt, config, &config.template, assistant)
}

fn delegate<A: Assistant>(
    root: &Path,
    prompt: String,
    config: &WorkflowsConfig,
    entry: &WorkflowEntry,
    assistant: &A,
) -> Result<()> {
    let request = SessionRequest {
        workdir: root.to_path_buf(),
        prompt,
        model: config.model.clone(),
        context: entry.context.clone(),
        auto_commits: entry.auto_commits,
        timeout: Duration::from_secs(config.session_timeout_secs),
        output_limit_bytes: config.output_limit_bytes,
    };
    assistant.run_session(&request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ContextSets;
    use crate::test_support::{RecordingAssistant, TestProject};

    #[test]
    fn endpoint_passes_spec_verbatim_without_substitution() {
        let project = TestProject::new().expect("project");
        project
            .write_spec("add_login.md", "Implement: <description>")
            .expect("write spec");
        let assistant = RecordingAssistant::default();

        run_endpoint(
            project.root(),
            "add_login.md",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .expect("run");

        let request = assistant.last_request().expect("request recorded");
        // The endpoint workflow never substitutes, even when the document
        // contains the placeholder token.
        assert_eq!(request.prompt, "Implement: <description>");
        assert!(request.auto_commits);
    }

    #[test]
    fn endpoint_uses_configured_context_unmodified() {
        let project = TestProject::new().expect("project");
        project.write_spec("s.md", "spec").expect("write spec");
        let assistant = RecordingAssistant::default();
        let config = WorkflowsConfig::default();

        run_endpoint(project.root(), "s.md", &config, &assistant).expect("run");

        let request = assistant.last_request().expect("request recorded");
        assert_eq!(request.context, ContextSets::endpoint_defaults());
        assert_eq!(request.workdir, project.root());
        assert_eq!(request.model, config.model);
    }

    #[test]
    fn endpoint_fails_before_spec_read_when_marker_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let assistant = RecordingAssistant::default();

        let err = run_endpoint(
            temp.path(),
            "s.md",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .unwrap_err();

        assert!(err.to_string().contains("pyproject.toml not found"));
        assert!(assistant.last_request().is_none());
    }

    #[test]
    fn endpoint_fails_on_missing_spec_naming_it() {
        let project = TestProject::new().expect("project");
        let assistant = RecordingAssistant::default();

        let err = run_endpoint(
            project.root(),
            "nope.md",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .unwrap_err();

        assert!(err.to_string().contains("nope.md not found"));
        assert!(assistant.last_request().is_none());
    }

    #[test]
    fn template_substitutes_every_token_occurrence() {
        let project = TestProject::new().expect("project");
        project
            .write_spec(
                "spec-template.md",
                "Build <description>.\nVerify <description>.",
            )
            .expect("write template");
        let assistant = RecordingAssistant::default();

        run_template(
            project.root(),
            "OAuth login",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .expect("run");

        let request = assistant.last_request().expect("request recorded");
        assert_eq!(request.prompt, "Build OAuth login.\nVerify OAuth login.");
        assert!(!request.auto_commits);
        assert!(request.context.editable.is_empty());
        assert!(request.context.read_only.is_empty());
    }

    #[test]
    fn template_fails_on_missing_template_file() {
        let project = TestProject::new().expect("project");
        let assistant = RecordingAssistant::default();

        let err = run_template(
            project.root(),
            "anything",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .unwrap_err();

        assert!(err.to_string().contains("spec-template.md not found"));
    }

    #[test]
    fn assistant_errors_propagate_unmodified() {
        let project = TestProject::new().expect("project");
        project.write_spec("s.md", "spec").expect("write spec");
        let assistant = RecordingAssistant::failing("model refused");

        let err = run_endpoint(
            project.root(),
            "s.md",
            &WorkflowsConfig::default(),
            &assistant,
        )
        .unwrap_err();

        assert!(err.to_string().contains("model refused"));
    }
}
