// Text and icon markup for the terminal snippet copy button.

pub const COPY_PREFIX: &str = "npx ";

pub const COPY_ICON_SVG: &str = r#"<path d="M9 5h-2a2 2 0 0 0 -2 2v12a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-12a2 2 0 0 0 -2 -2h-2"></path><path d="M9 3m0 2a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v0a2 2 0 0 1 -2 2h-2a2 2 0 0 1 -2 -2z"></path>"#;

pub const CHECK_ICON_SVG: &str = r#"<path d="M9 5h-2a2 2 0 0 0 -2 2v12a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-12a2 2 0 0 0 -2 -2h-2"></path><path d="M9 3m0 2a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v0a2 2 0 0 1 -2 2h-2a2 2 0 0 1 -2 -2z"></path><path d="M9 13l2 2l4 -4"></path>"#;

/// Text to place on the clipboard for a `data-cmd` value, or `None` when
/// there is nothing to copy.
pub fn compose_copy_text(command: Option<&str>) -> Option<String> {
    match command {
        Some(cmd) if !cmd.is_empty() => Some(format!("{COPY_PREFIX}{cmd}")),
        _ => None,
    }
}
