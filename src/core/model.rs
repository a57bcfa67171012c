//! Model configuration for the assistant session.

use serde::{Deserialize, Serialize};

/// The model triple the assistant runs with: a primary model that plans the
/// change, a lighter editor model that applies it, and the edit format the
/// editor emits.
///
/// Constructed fresh per invocation; never cached across runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModelConfig {
    /// Primary (architect) model identifier.
    pub main: String,
    /// Editor model identifier.
    pub editor: String,
    /// Output format the editor model produces.
    pub editor_edit_format: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            main: "claude-3-7-sonnet-latest".to_string(),
            editor: "gpt-4.1".to_string(),
            editor_edit_format: "diff".to_string(),
        }
    }
}
