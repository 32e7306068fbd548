//! Writing banners and listings to the terminal

use std::io::Write;

use anyhow::Result;
use blocktext_core::font;
use colored::Colorize;

use crate::color::{DEFAULT_COLOR, PALETTE, RESET};

/// Characters per line in the `--list-glyphs` sample
const GLYPHS_PER_LINE: usize = 8;

/// Write rendered art, wrapped in `color` and a reset sequence when given.
pub fn write_banner(writer: &mut dyn Write, art: &str, color: Option<&str>) -> Result<()> {
    match color {
        Some(code) => writeln!(writer, "{code}{art}{RESET}")?,
        None => writeln!(writer, "{art}")?,
    }
    Ok(())
}

/// Write every color name with a swatch, marking the default.
pub fn write_color_list(writer: &mut dyn Write, use_color: bool) -> Result<()> {
    for (name, code) in PALETTE {
        let swatch = if use_color {
            format!("{code}██{RESET}")
        } else {
            "  ".to_string()
        };
        let marker = if *name == DEFAULT_COLOR {
            "(default)".dimmed().to_string()
        } else {
            String::new()
        };
        writeln!(writer, "{swatch} {name:<8} {marker}")?;
    }
    Ok(())
}

/// Write the supported characters, then a rendered sample of all of them.
pub fn write_glyph_list(writer: &mut dyn Write) -> Result<()> {
    let chars: Vec<char> = font::supported_chars().collect();
    let listing: String = chars
        .iter()
        .map(|ch| if *ch == ' ' { "␠".to_string() } else { ch.to_string() })
        .collect::<Vec<_>>()
        .join(" ");

    writeln!(
        writer,
        "{} {}",
        format!("{} supported characters:", chars.len()).bold(),
        listing
    )?;
    writeln!(writer)?;

    let sample = chars
        .chunks(GLYPHS_PER_LINE)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    writeln!(writer, "{}", blocktext_core::render(&sample))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(f: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        let writer: &mut dyn Write = &mut buf;
        f(writer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_banner_is_wrapped_in_color() {
        let art = blocktext_core::render("TEST");
        let out = written(|w| write_banner(w, &art, Some("\x1b[31m")));
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.ends_with("\x1b[0m\n"));
        assert!(out.contains("████████╗███████╗███████╗████████╗"));
    }

    #[test]
    fn test_banner_without_color() {
        let art = blocktext_core::render("HI");
        let out = written(|w| write_banner(w, &art, None));
        assert_eq!(out, format!("{art}\n"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_banner_keeps_multiline_art_in_one_write() {
        let art = blocktext_core::render("HELLO\nWORLD");
        let out = written(|w| write_banner(w, &art, Some("\x1b[34m")));
        assert!(out.split('\n').count() > 7);
        assert_eq!(out.matches("\x1b[34m").count(), 1);
    }

    #[test]
    fn test_color_list_mentions_every_name() {
        colored::control::set_override(false);
        let out = written(|w| write_color_list(w, false));
        for (name, _) in PALETTE {
            assert!(out.contains(name));
        }
        assert!(out.lines().any(|l| l.contains("orange") && l.contains("(default)")));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_glyph_list_counts_catalog() {
        colored::control::set_override(false);
        let out = written(write_glyph_list);
        let count = font::supported_chars().count();
        assert!(out.starts_with(&format!("{count} supported characters:")));
        assert!(out.contains("あ"));
    }
}
