//! Text to block-art composition
//!
//! Each logical line of the input becomes a [`Block`] of [`GLYPH_HEIGHT`] rows
//! built by placing glyphs side by side. Blocks are stacked with one empty row
//! between them.

use std::fmt;

use crate::font::{self, GLYPH_HEIGHT};

/// The rows rendered for one logical line of input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    rows: [String; GLYPH_HEIGHT],
}

impl Block {
    #[cfg(test)]
    fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    #[cfg(test)]
    fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }

    fn push(&mut self, glyph: &font::Glyph) {
        for (row, part) in self.rows.iter_mut().zip(glyph.rows()) {
            row.push_str(part);
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Map `ch` to the key it is stored under in the catalog.
///
/// Characters with their own entry are kept. Otherwise a single-character
/// uppercase mapping is used, so `a` resolves to `A` while caseless scripts
/// are left alone.
fn fold_case(ch: char) -> char {
    if font::lookup(ch).is_some() {
        return ch;
    }
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Render a single logical line. Any `'\n'` in `line` is treated as an
/// unsupported character.
pub fn render_block(line: &str) -> Block {
    let mut block = Block::default();
    for ch in line.chars() {
        block.push(font::glyph_or_blank(fold_case(ch)));
    }
    block
}

/// Render `text` as block art.
///
/// The input is split on `'\n'` and every piece, including empty ones, becomes
/// a block of [`GLYPH_HEIGHT`] rows. Blocks are joined with a single empty row.
/// The result has no trailing newline.
pub fn render(text: &str) -> String {
    text.split('\n')
        .map(|line| render_block(line).to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}
