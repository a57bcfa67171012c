//! Spec-driven workflow runner for AI-assisted code changes.
//!
//! Each workflow reads a specification document from the target project's
//! `specs/` directory, assembles a prompt, and hands it to the external
//! `aider` assistant together with two file context sets (editable and
//! read-only). The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (prompt substitution, context
//!   sets, model configuration). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (configuration loading, spec file
//!   reading, assistant process execution). Isolated to enable scripted
//!   assistants in tests.
//!
//! The [`workflow`] module coordinates core logic with I/O to implement the
//! CLI subcommands.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod workflow;
