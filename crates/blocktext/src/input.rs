//! Input assembly
//!
//! Text comes from positional words, piped standard input, or the configured
//! default, in that order. Literal `\n` sequences are expanded afterwards.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::debug;

/// Rendered when there are no words, stdin is a terminal and no default is configured
pub const DEFAULT_TEXT: &str = "BLOCK\\nTEXT";

/// Pick the raw text to render.
///
/// `stdin` is only read when `words` is empty and `stdin_is_terminal` is false.
/// Invalid UTF-8 in it is replaced with U+FFFD, which renders as a blank.
pub fn collect(
    words: &[String],
    stdin_is_terminal: bool,
    mut stdin: impl Read,
    default_text: Option<&str>,
) -> Result<String> {
    if !words.is_empty() {
        debug!(count = words.len(), "reading text from arguments");
        return Ok(join_words(words));
    }

    if !stdin_is_terminal {
        debug!("reading text from standard input");
        let mut buf = Vec::new();
        stdin
            .read_to_end(&mut buf)
            .context("failed to read standard input")?;
        return Ok(String::from_utf8_lossy(&buf).trim().to_string());
    }

    debug!("no text given, using default");
    Ok(default_text.unwrap_or(DEFAULT_TEXT).to_string())
}

/// Join words with single spaces.
///
/// Shells turn an unquoted `HELLO\ nWORLD` into the words `HELLO\` and
/// `nWORLD`. When a word starts with `n` and the previous word ends with a
/// backslash, the backslash is moved so the pair reads `HELLO \nWORLD`.
/// Empty words are skipped.
pub fn join_words(words: &[String]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(words.len());

    for (i, word) in words.iter().enumerate() {
        if word.is_empty() {
            continue;
        }

        if i > 0 && word.starts_with('n') && words[i - 1].ends_with('\\') {
            if let Some(last) = parts.last_mut() {
                last.pop();
            }
            parts.push(format!("\\n{}", &word[1..]));
            continue;
        }

        parts.push(word.clone());
    }

    parts.join(" ")
}

/// Replace every literal two-character `\n` with a line break.
pub fn expand_line_breaks(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
