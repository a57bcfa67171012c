//! File context sets handed to the assistant.

use serde::{Deserialize, Serialize};

/// Ordered file context for one workflow.
///
/// Paths are relative to the target project root. Order is significant and
/// must reach the assistant unmodified; no existence or uniqueness checks are
/// performed here — the referenced files belong to the target project, not to
/// this tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContextSets {
    /// Files the assistant may modify.
    pub editable: Vec<String>,
    /// Files the assistant may read for reference but must not modify.
    pub read_only: Vec<String>,
}

impl ContextSets {
    /// Default context for the `endpoint` workflow (the target Elixir app's
    /// accounts domain plus its router).
    pub fn endpoint_defaults() -> Self {
        Self {
            editable: vec![
                "lib/reply_express/accounts/aggregates/user.ex".to_string(),
                "lib/reply_express/accounts/users_context.ex".to_string(),
                "lib/reply_express/accounts/user_tokens_context.ex".to_string(),
                "lib/reply_express_web/router.ex".to_string(),
            ],
            read_only: vec![
                "lib/reply_express/accounts/commands/generate_password_reset_token.ex"
                    .to_string(),
                "lib/reply_express/accounts/commands/register_user.ex".to_string(),
                "lib/reply_express/accounts/events/password_reset_token_generated.ex"
                    .to_string(),
                "lib/reply_express_web/controllers/api/v1/users/reset_password_controller.ex"
                    .to_string(),
                "mix.exs".to_string(),
            ],
        }
    }

    /// Default context for the `template` workflow: empty, to be filled in
    /// per project via `workflows.toml`.
    pub fn template_defaults() -> Self {
        Self::default()
    }
}
