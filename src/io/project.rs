//! Target-project access: root marker preflight and spec document loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// File whose presence marks the target project root.
pub const ROOT_MARKER: &str = "pyproject.toml";

/// Directory (relative to the project root) holding spec documents.
pub const SPECS_DIR: &str = "specs";

/// Fixed spec document consumed by the template workflow.
pub const TEMPLATE_SPEC: &str = "spec-template.md";

/// Confirm `root` is the target project root.
///
/// Pure existence check for the marker file; no other side effects. Must run
/// before any spec document is read so a wrong working directory fails fast.
pub fn ensure_project_root(root: &Path) -> Result<()> {
    let marker = root.join(ROOT_MARKER);
    if !marker.exists() {
        return Err(anyhow!(
            "{ROOT_MARKER} not found in current directory - move to the root of the project"
        ));
    }
    debug!(root = %root.display(), "project root confirmed");
    Ok(())
}

/// Read `<root>/specs/<name>` fully as text.
pub fn load_spec(root: &Path, name: &str) -> Result<String> {
    let path = root.join(SPECS_DIR).join(name);
    if !path.exists() {
        return Err(anyhow!(
            "{name} not found in {SPECS_DIR}/ - please make sure it exists"
        ));
    }
    let contents =
        fs::read_to_string(&path).with_context(|| format!("read spec {}", path.display()))?;
    debug!(spec = name, bytes = contents.len(), "loaded spec document");
    Ok(contents)
}

/// Read the fixed template spec, `<root>/specs/spec-template.md`.
pub fn load_template_spec(root: &Path) -> Result<String> {
    load_spec(root, TEMPLATE_SPEC)
}
