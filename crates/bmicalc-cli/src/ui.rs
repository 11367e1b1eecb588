//! UI helpers for CLI display.

use console::{style, Style};

use bmicalc_core::ColorTag;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Terminal style for a classification color tag.
#[must_use]
pub fn tag_style(tag: ColorTag) -> Style {
    let style = Style::new().bold();
    match tag {
        ColorTag::LightBlue => style.cyan(),
        ColorTag::Green => style.green(),
        ColorTag::Amber => style.yellow(),
        ColorTag::Red => style.red(),
    }
}

/// Paint `text` in the color of `tag`.
#[must_use]
pub fn paint(text: &str, tag: ColorTag) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        tag_style(tag).apply_to(text).to_string()
    }
}

/// A styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("=== {text} ===")
    } else {
        style(format!("=== {text} ===")).bold().cyan().to_string()
    }
}

/// A section title line.
#[must_use]
pub fn section(text: &str) -> String {
    if is_color_disabled() {
        format!("[{text}]")
    } else {
        style(format!("[{text}]")).dim().bold().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
