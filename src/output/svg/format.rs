//! Text helpers shared by the chart renderers.

/// Escape text for use inside SVG element content or attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Compact count label: `9999`, `10.0K`, `2.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(n: i64) -> String {
    if n.abs() >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n.abs() >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Opening `<svg>` tag with an accessible `<title>`.
///
/// Carries explicit `width`/`height` so the chart has a size when opened
/// as a standalone file, and a `viewBox` so it scales when embedded.
#[must_use]
pub fn svg_open(width: f64, height: f64, title: &str) -> String {
    format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\">\n    <title>{}</title>\n",
        html_escape(title)
    )
}

/// Centered placeholder text for charts with nothing to plot.
#[must_use]
pub fn empty_state(width: f64, height: f64, message: &str) -> String {
    format!(
        "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"14\">{}</text>\n",
        width / 2.0,
        height / 2.0,
        super::style::ChartColor::css_var("text-muted").to_css(),
        html_escape(message)
    )
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
