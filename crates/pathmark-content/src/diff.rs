//! Text diff rendering for previews

use similar::TextDiff;

/// Render a unified diff between two versions of a file.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(old: &str, new: &str, path: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string()
}
