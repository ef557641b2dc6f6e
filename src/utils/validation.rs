// Filesystem-name validation and sanitization

use regex::Regex;
use std::sync::LazyLock;

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("invalid-char pattern compiles"));

static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("underscore-run pattern compiles"));

/// Device names Windows refuses regardless of extension or case.
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

const MAX_NAME_LENGTH: usize = 255;

/// Check whether a directory name is safe for filesystem use.
pub fn is_valid_directory_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let upper = name.to_ascii_uppercase();
    if RESERVED_NAMES.contains(&upper.as_str()) {
        return false;
    }

    if INVALID_CHARS.is_match(name) {
        return false;
    }

    if name.starts_with(' ') || name.ends_with(' ') || name.starts_with('.') || name.ends_with('.')
    {
        return false;
    }

    if name.chars().any(char::is_control) {
        return false;
    }

    name.chars().count() <= MAX_NAME_LENGTH
}

/// Best-effort cleanup producing a filesystem-safe name from an arbitrary
/// string. Total: every input maps to some valid name.
pub fn sanitize_directory_name(name: &str) -> String {
    let replaced = INVALID_CHARS.replace_all(name, "_");

    // Control characters are stripped before trimming so they cannot
    // shield a trailing space or period from the trim.
    let stripped: String = replaced.chars().filter(|c| !c.is_control()).collect();

    let trimmed = stripped.trim_matches(|c: char| c.is_whitespace() || c == '.');

    let mut sanitized = UNDERSCORE_RUNS.replace_all(trimmed, "_").into_owned();

    if sanitized.chars().count() > MAX_NAME_LENGTH {
        sanitized = sanitized.chars().take(MAX_NAME_LENGTH).collect();
    }

    if sanitized.is_empty() {
        return "unnamed".to_string();
    }

    sanitized
}
