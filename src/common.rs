use handlebars::{handlebars_helper, Handlebars};
use regex::Regex;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

pub fn write_string_to_file(filename: &str, content: &str) -> std::io::Result<()> {
    let path = Path::new(filename);
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    handlebars_helper!(dot_escape: |s: String| escape_dot(&s));
    handlebars.register_helper("dot_escape", Box::new(dot_escape));

    handlebars_helper!(mermaid_label: |s: String| escape_mermaid_label(&s));
    handlebars.register_helper("mermaid_label", Box::new(mermaid_label));

    handlebars
}

/// Escape a string for use inside a double quoted DOT attribute.
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

pub fn escape_mermaid_label(s: &str) -> String {
    if s.is_empty() {
        return " ".to_string();
    }
    s.replace('"', "#quot;").replace('\n', "<br/>")
}

/// Convert a CSS color (`#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`) to
/// the `#rrggbb[aa]` form Graphviz understands. Unknown forms pass through.
pub fn css_color_to_hex(color: &str) -> String {
    static RGB: OnceLock<Regex> = OnceLock::new();
    let rgb = RGB.get_or_init(|| {
        Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9.]+)\s*)?\)$")
            .expect("valid regex")
    });

    let Some(caps) = rgb.captures(color.trim()) else {
        return color.to_string();
    };

    let channel = |idx: usize| -> u8 {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u16>().ok())
            .map(|v| v.min(255) as u8)
            .unwrap_or(0)
    };

    let mut hex = format!("#{:02x}{:02x}{:02x}", channel(1), channel(2), channel(3));
    if let Some(alpha) = caps.get(4).and_then(|m| m.as_str().parse::<f64>().ok()) {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        hex.push_str(&format!("{:02x}", alpha));
    }
    hex
}
