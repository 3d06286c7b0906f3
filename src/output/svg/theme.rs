//! Color palettes for the light and dark chart variants.

/// Chart palette. The palette is the only difference between the two
/// generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Canvas background
    pub bg: &'static str,
    /// Primary text
    pub fg: &'static str,
    /// Subtitle and percentage text
    pub muted: &'static str,
    /// Bar background track
    pub track: &'static str,
    /// Bar filled portion
    pub fill: &'static str,
}

impl Theme {
    pub const LIGHT: Self = Self {
        bg: "#ffffff",
        fg: "#24292f",
        muted: "#57606a",
        track: "#eaeef2",
        fill: "#0969da",
    };

    pub const DARK: Self = Self {
        bg: "#0d1117",
        fg: "#e6edf3",
        muted: "#8b949e",
        track: "#30363d",
        fill: "#58a6ff",
    };
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
