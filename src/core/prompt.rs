//! Prompt assembly from specification documents.

/// Placeholder token replaced in the template workflow.
pub const DESCRIPTION_TOKEN: &str = "<description>";

/// Substitute every occurrence of [`DESCRIPTION_TOKEN`] with `description`.
///
/// This is a literal substring replacement; no other characters are altered.
/// Only the template workflow applies it — the endpoint workflow feeds its
/// spec document to the assistant verbatim, even when the document happens to
/// contain the token.
pub fn apply_description(template: &str, description: &str) -> String {
    template.replace(DESCRIPTION_TOKEN, description)
}
