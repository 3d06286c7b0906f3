//! README marker-region patching.
//!
//! The generated table lives between two literal marker comments. Patching
//! replaces the first marked span inclusive of the markers, or appends a new
//! block at document end when the markers are absent. Content outside the
//! span is preserved byte for byte.

use std::fs;
use std::path::Path;

use crate::error::Result;

pub const START_MARKER: &str = "<!-- LANGUAGES:START -->";
pub const END_MARKER: &str = "<!-- LANGUAGES:END -->";

/// Replace the marker region of `content` with `body`, or append a fresh
/// block when no region exists. Pure function; idempotent for a fixed body.
#[must_use]
pub fn patch_marker_region(content: &str, body: &str) -> String {
    let block = format!("{START_MARKER}\n{body}\n{END_MARKER}");

    if let Some(start) = content.find(START_MARKER)
        && let Some(end) = content[start + START_MARKER.len()..].find(END_MARKER)
    {
        let end = start + START_MARKER.len() + end + END_MARKER.len();
        let mut patched = String::with_capacity(content.len() + block.len());
        patched.push_str(&content[..start]);
        patched.push_str(&block);
        patched.push_str(&content[end..]);
        return patched;
    }

    // No (complete) region: append at document end with a single trailing
    // newline.
    let head = content.trim_end();
    if head.is_empty() {
        format!("{block}\n")
    } else {
        format!("{head}\n\n{block}\n")
    }
}

/// Patch the marker region of the document at `path`, treating a missing
/// file as empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or cannot be
/// written.
pub fn update_readme(path: &Path, body: &str) -> Result<()> {
    let content = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    fs::write(path, patch_marker_region(&content, body))?;
    Ok(())
}

#[cfg(test)]
#[path = "readme_tests.rs"]
mod tests;
