//! Workflow configuration stored in `workflows.toml` at the project root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::context::ContextSets;
use crate::core::model::ModelConfig;

/// Workflow runner configuration (TOML).
///
/// This file is intended to be edited by humans and is entirely optional:
/// when missing, defaults reproduce the original hard-coded workflow shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkflowsConfig {
    /// Model triple the assistant runs with.
    pub model: ModelConfig,

    /// Wall-clock budget for one assistant run, in seconds.
    pub session_timeout_secs: u64,

    /// Truncate captured assistant stdout/stderr beyond this many bytes.
    pub output_limit_bytes: usize,

    pub endpoint: WorkflowEntry,
    pub template: WorkflowEntry,
}

/// Per-workflow configuration: context sets plus behavior flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkflowEntry {
    #[serde(flatten)]
    pub context: ContextSets,
    /// Whether the assistant commits its edits as it goes.
    pub auto_commits: bool,
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            session_timeout_secs: 60 * 60,
            output_limit_bytes: 200_000,
            endpoint: WorkflowEntry {
                context: ContextSets::endpoint_defaults(),
                auto_commits: true,
            },
            template: WorkflowEntry {
                context: ContextSets::template_defaults(),
                auto_commits: false,
            },
        }
    }
}

impl WorkflowsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.session_timeout_secs == 0 {
            return Err(anyhow!("session_timeout_secs must be > 0"));
        }
        if self.output_limit_bytes == 0 {
            return Err(anyhow!("output_limit_bytes must be > 0"));
        }
        for (name, value) in [
            ("model.main", &self.model.main),
            ("model.editor", &self.model.editor),
            ("model.editor_edit_format", &self.model.editor_edit_format),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{name} must be non-empty"));
            }
        }
        Ok(())
    }
}

/// Load config from `<root>/workflows.toml`.
///
/// If the file is missing, returns `WorkflowsConfig::default()`.
pub fn load_config(root: &Path) -> Result<WorkflowsConfig> {
    let path = root.join("workflows.toml");
    if !path.exists() {
        let cfg = WorkflowsConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WorkflowsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
