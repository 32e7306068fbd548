//! Foreground color table
//!
//! Names are matched case-insensitively. Anything unrecognized, including an
//! empty name, falls back to [`DEFAULT_COLOR`].

use tracing::debug;

/// Escape sequence that restores the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// Color used when none is given or the name is unknown
pub const DEFAULT_COLOR: &str = "orange";

/// Every supported color name and its escape sequence, in display order
pub const PALETTE: &[(&str, &str)] = &[
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("orange", "\x1b[38;5;208m"),
    ("purple", "\x1b[38;5;129m"),
    ("pink", "\x1b[38;5;205m"),
    ("gray", "\x1b[90m"),
    ("grey", "\x1b[90m"),
];

/// Escape sequence for `name`, if it is a known color.
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.to_lowercase();
    PALETTE
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, code)| *code)
}

/// Escape sequence for the default color.
pub fn default_code() -> &'static str {
    lookup(DEFAULT_COLOR).unwrap_or("\x1b[38;5;208m")
}

/// Escape sequence for `name`, falling back to the default color.
pub fn resolve(name: Option<&str>) -> &'static str {
    let Some(name) = name else {
        return default_code();
    };
    match lookup(name) {
        Some(code) => code,
        None => {
            debug!(color = %name, fallback = DEFAULT_COLOR, "unknown color name");
            default_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_colors() {
        assert_eq!(lookup("red"), Some("\x1b[31m"));
        assert_eq!(lookup("green"), Some("\x1b[32m"));
        assert_eq!(lookup("blue"), Some("\x1b[34m"));
        assert_eq!(lookup("cyan"), Some("\x1b[36m"));
    }

    #[test]
    fn test_extended_colors() {
        assert_eq!(lookup("orange"), Some("\x1b[38;5;208m"));
        assert_eq!(lookup("purple"), Some("\x1b[38;5;129m"));
        assert_eq!(lookup("pink"), Some("\x1b[38;5;205m"));
    }

    #[test]
    fn test_gray_spellings() {
        assert_eq!(lookup("gray"), Some("\x1b[90m"));
        assert_eq!(lookup("grey"), lookup("gray"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(lookup("RED"), Some("\x1b[31m"));
        assert_eq!(lookup("rEd"), Some("\x1b[31m"));
    }

    #[test]
    fn test_unknown_falls_back_to_orange() {
        assert_eq!(lookup("invalidcolor"), None);
        assert_eq!(resolve(Some("invalidcolor")), "\x1b[38;5;208m");
        assert_eq!(resolve(Some("")), "\x1b[38;5;208m");
        assert_eq!(resolve(None), "\x1b[38;5;208m");
    }

    #[test]
    fn test_resolve_known() {
        assert_eq!(resolve(Some("Magenta")), "\x1b[35m");
    }

    #[test]
    fn test_default_is_in_palette() {
        assert!(lookup(DEFAULT_COLOR).is_some());
    }
}
