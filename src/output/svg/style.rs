//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// Fallback values for the CSS variables the charts reference, so a chart
/// written to a standalone `.svg` file renders without a host stylesheet.
const PALETTE: &[(&str, &str)] = &[
    ("chart-primary", "#3b82f6"),
    ("chart-secondary", "#94a3b8"),
    ("text", "#1e293b"),
    ("text-muted", "#64748b"),
    ("border", "#e2e8f0"),
];

/// Color specification supporting CSS variables for theming.
#[derive(Debug, Clone)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#22c55e")
    Hex(String),
    /// CSS variable reference (e.g., "text" → "var(--color-text, #1e293b)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => match palette_fallback(name) {
                Some(fallback) => format!("var(--color-{name}, {fallback})"),
                None => format!("var(--color-{name})"),
            },
        }
    }
}

fn palette_fallback(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(var, _)| *var == name)
        .map(|(_, hex)| *hex)
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
