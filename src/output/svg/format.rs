//! Text formatting helpers for SVG output.

/// Escape text for safe embedding in SVG markup.
#[must_use]
pub fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
