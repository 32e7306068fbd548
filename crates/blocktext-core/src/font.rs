//! Glyph catalog
//!
//! A fixed, read-only table mapping each supported character to its block
//! glyph. Every glyph is [`GLYPH_HEIGHT`] rows tall and all rows of one glyph
//! have the same width. Latin letters are stored under their uppercase key only;
//! callers fold case before looking them up. Hiragana entries are matched as-is.
//!
//! ```text
//! ██╗  ██╗██╗
//! ██║  ██║██║
//! ███████║██║
//! ██╔══██║██║
//! ██║  ██║██║
//! ╚═╝  ╚═╝╚═╝
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of rows in every glyph
pub const GLYPH_HEIGHT: usize = 6;

/// One character's block-art representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    const fn new(rows: [&'static str; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[&'static str; GLYPH_HEIGHT] {
        &self.rows
    }

    /// A single row, or `None` past the bottom of the glyph.
    pub fn row(&self, index: usize) -> Option<&'static str> {
        self.rows.get(index).copied()
    }

    /// Width in columns, counting each character as one column.
    pub fn width(&self) -> usize {
        self.rows[0].chars().count()
    }

    #[cfg(test)]
    fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| row.trim().is_empty())
    }
}

/// Glyph for the space character, also used for anything not in the catalog
const BLANK: Glyph = Glyph::new(["    "; GLYPH_HEIGHT]);

static CATALOG: LazyLock<HashMap<char, &'static Glyph>> =
    LazyLock::new(|| GLYPHS.iter().map(|(ch, glyph)| (*ch, glyph)).collect());

/// Look up the glyph stored under exactly `ch`.
///
/// No case folding happens here: `lookup('a')` is `None`.
pub fn lookup(ch: char) -> Option<&'static Glyph> {
    CATALOG.get(&ch).copied()
}

/// The blank glyph.
pub fn blank() -> &'static Glyph {
    &BLANK
}

/// Look up `ch`, substituting the blank glyph when it has no entry.
pub fn glyph_or_blank(ch: char) -> &'static Glyph {
    lookup(ch).unwrap_or(&BLANK)
}

/// Every character with a catalog entry, in table order.
pub fn supported_chars() -> impl Iterator<Item = char> {
    GLYPHS.iter().map(|(ch, _)| *ch)
}

static GLYPHS: &[(char, Glyph)] = &[
    // Latin letters
    (
        'A',
        Glyph::new([
            " █████╗ ",
            "██╔══██╗",
            "███████║",
            "██╔══██║",
            "██║  ██║",
            "╚═╝  ╚═╝",
        ]),
    ),
    (
        'B',
        Glyph::new([
            "██████╗ ",
            "██╔══██╗",
            "██████╔╝",
            "██╔══██╗",
            "██████╔╝",
            "╚═════╝ ",
        ]),
    ),
    (
        'C',
        Glyph::new([
            " ██████╗",
            "██╔════╝",
            "██║     ",
            "██║     ",
            "╚██████╗",
            " ╚═════╝",
        ]),
    ),
    (
        'D',
        Glyph::new([
            "██████╗ ",
            "██╔══██╗",
            "██║  ██║",
            "██║  ██║",
            "██████╔╝",
            "╚═════╝ ",
        ]),
    ),
    (
        'E',
        Glyph::new([
            "███████╗",
            "██╔════╝",
            "█████╗  ",
            "██╔══╝  ",
            "███████╗",
            "╚══════╝",
        ]),
    ),
    (
        'F',
        Glyph::new([
            "███████╗",
            "██╔════╝",
            "█████╗  ",
            "██╔══╝  ",
            "██║     ",
            "╚═╝     ",
        ]),
    ),
    (
        'G',
        Glyph::new([
            " ██████╗ ",
            "██╔════╝ ",
            "██║  ███╗",
            "██║   ██║",
            "╚██████╔╝",
            " ╚═════╝ ",
        ]),
    ),
    (
        'H',
        Glyph::new([
            "██╗  ██╗",
            "██║  ██║",
            "███████║",
            "██╔══██║",
            "██║  ██║",
            "╚═╝  ╚═╝",
        ]),
    ),
    (
        'I',
        Glyph::new([
            "██╗",
            "██║",
            "██║",
            "██║",
            "██║",
            "╚═╝",
        ]),
    ),
    (
        'J',
        Glyph::new([
            "     ██╗",
            "     ██║",
            "     ██║",
            "██   ██║",
            "╚█████╔╝",
            " ╚════╝ ",
        ]),
    ),
    (
        'K',
        Glyph::new([
            "██╗  ██╗",
            "██║ ██╔╝",
            "█████╔╝ ",
            "██╔═██╗ ",
            "██║  ██╗",
            "╚═╝  ╚═╝",
        ]),
    ),
    (
        'L',
        Glyph::new([
            "██╗     ",
            "██║     ",
            "██║     ",
            "██║     ",
            "███████╗",
            "╚══════╝",
        ]),
    ),
    (
        'M',
        Glyph::new([
            "███╗   ███╗",
            "████╗ ████║",
            "██╔████╔██║",
            "██║╚██╔╝██║",
            "██║ ╚═╝ ██║",
            "╚═╝     ╚═╝",
        ]),
    ),
    (
        'N',
        Glyph::new([
            "███╗   ██╗",
            "████╗  ██║",
            "██╔██╗ ██║",
            "██║╚██╗██║",
            "██║ ╚████║",
            "╚═╝  ╚═══╝",
        ]),
    ),
    (
        'O',
        Glyph::new([
            " ██████╗ ",
            "██╔═══██╗",
            "██║   ██║",
            "██║   ██║",
            "╚██████╔╝",
            " ╚═════╝ ",
        ]),
    ),
    (
        'P',
        Glyph::new([
            "██████╗ ",
            "██╔══██╗",
            "██████╔╝",
            "██╔═══╝ ",
            "██║     ",
            "╚═╝     ",
        ]),
    ),
    (
        'Q',
        Glyph::new([
            " ██████╗ ",
            "██╔═══██╗",
            "██║   ██║",
            "██║▄▄ ██║",
            "╚██████╔╝",
            " ╚══▀▀═╝ ",
        ]),
    ),
    (
        'R',
        Glyph::new([
            "██████╗ ",
            "██╔══██╗",
            "██████╔╝",
            "██╔══██╗",
            "██║  ██║",
            "╚═╝  ╚═╝",
        ]),
    ),
    (
        'S',
        Glyph::new([
            "███████╗",
            "██╔════╝",
            "███████╗",
            "╚════██║",
            "███████║",
            "╚══════╝",
        ]),
    ),
    (
        'T',
        Glyph::new([
            "████████╗",
            "╚══██╔══╝",
            "   ██║   ",
            "   ██║   ",
            "   ██║   ",
            "   ╚═╝   ",
        ]),
    ),
    (
        'U',
        Glyph::new([
            "██╗   ██╗",
            "██║   ██║",
            "██║   ██║",
            "██║   ██║",
            "╚██████╔╝",
            " ╚═════╝ ",
        ]),
    ),
    (
        'V',
        Glyph::new([
            "██╗   ██╗",
            "██║   ██║",
            "██║   ██║",
            "╚██╗ ██╔╝",
            " ╚████╔╝ ",
            "  ╚═══╝  ",
        ]),
    ),
    (
        'W',
        Glyph::new([
            "██╗    ██╗",
            "██║    ██║",
            "██║ █╗ ██║",
            "██║███╗██║",
            "╚███╔███╔╝",
            " ╚══╝╚══╝ ",
        ]),
    ),
    (
        'X',
        Glyph::new([
            "██╗  ██╗",
            "╚██╗██╔╝",
            " ╚███╔╝ ",
            " ██╔██╗ ",
            "██╔╝ ██╗",
            "╚═╝  ╚═╝",
        ]),
    ),
    (
        'Y',
        Glyph::new([
            "██╗   ██╗",
            "╚██╗ ██╔╝",
            " ╚████╔╝ ",
            "  ╚██╔╝  ",
            "   ██║   ",
            "   ╚═╝   ",
        ]),
    ),
    (
        'Z',
        Glyph::new([
            "███████╗",
            "╚══███╔╝",
            "  ███╔╝ ",
            " ███╔╝  ",
            "███████╗",
            "╚══════╝",
        ]),
    ),
    // Digits
    (
        '0',
        Glyph::new([
            " ██████╗ ",
            "██╔═████╗",
            "██║██╔██║",
            "████╔╝██║",
            "╚██████╔╝",
            " ╚═════╝ ",
        ]),
    ),
    (
        '1',
        Glyph::new([
            " ██╗",
            "███║",
            "╚██║",
            " ██║",
            " ██║",
            " ╚═╝",
        ]),
    ),
    (
        '2',
        Glyph::new([
            "██████╗ ",
            "╚════██╗",
            " █████╔╝",
            "██╔═══╝ ",
            "███████╗",
            "╚══════╝",
        ]),
    ),
    (
        '3',
        Glyph::new([
            "██████╗ ",
            "╚════██╗",
            " █████╔╝",
            " ╚═══██╗",
            "██████╔╝",
            "╚═════╝ ",
        ]),
    ),
    (
        '4',
        Glyph::new([
            "██╗  ██╗",
            "██║  ██║",
            "███████║",
            "╚════██║",
            "     ██║",
            "     ╚═╝",
        ]),
    ),
    (
        '5',
        Glyph::new([
            "███████╗",
            "██╔════╝",
            "███████╗",
            "╚════██║",
            "███████║",
            "╚══════╝",
        ]),
    ),
    (
        '6',
        Glyph::new([
            " ██████╗ ",
            "██╔════╝ ",
            "███████╗ ",
            "██╔═══██╗",
            "╚██████╔╝",
            " ╚═════╝ ",
        ]),
    ),
    (
        '7',
        Glyph::new([
            "███████╗",
            "╚════██║",
            "    ██╔╝",
            "   ██╔╝ ",
            "   ██║  ",
            "   ╚═╝  ",
        ]),
    ),
    (
        '8',
        Glyph::new([
            " █████╗ ",
            "██╔══██╗",
            "╚█████╔╝",
            "██╔══██╗",
            "╚█████╔╝",
            " ╚════╝ ",
        ]),
    ),
    (
        '9',
        Glyph::new([
            " █████╗ ",
            "██╔══██╗",
            "╚██████║",
            " ╚═══██║",
            " █████╔╝",
            " ╚════╝ ",
        ]),
    ),
    // Punctuation
    (' ', BLANK),
    (
        '!',
        Glyph::new([
            "██╗",
            "██║",
            "██║",
            "╚═╝",
            "██╗",
            "╚═╝",
        ]),
    ),
    (
        '?',
        Glyph::new([
            "██████╗ ",
            "╚════██╗",
            "  ▄███╔╝",
            "  ▀▀══╝ ",
            "  ██╗   ",
            "  ╚═╝   ",
        ]),
    ),
    (
        '.',
        Glyph::new([
            "   ",
            "   ",
            "   ",
            "   ",
            "██╗",
            "╚═╝",
        ]),
    ),
    (
        ',',
        Glyph::new([
            "    ",
            "    ",
            "    ",
            "    ",
            " ██╗",
            "▄█╔╝",
        ]),
    ),
    (
        '-',
        Glyph::new([
            "      ",
            "      ",
            "█████╗",
            "╚════╝",
            "      ",
            "      ",
        ]),
    ),
    // Hiragana
    (
        'あ',
        Glyph::new([
            "   ██╗     ",
            "████████╗  ",
            "  ██╔═══╝  ",
            " ████████╗ ",
            "██╔██╔══██╗",
            "╚████╔╝██╔╝",
        ]),
    ),
    (
        'い',
        Glyph::new([
            "██╗     ██╗ ",
            "██║     ╚██╗",
            "██║      ██║",
            "██║   ██╗╚═╝",
            "╚█████╔╝    ",
            " ╚════╝     ",
        ]),
    ),
    (
        'う',
        Glyph::new([
            "  ██████╗ ",
            "  ╚═════╝ ",
            " ███████╗ ",
            " ╚════██║ ",
            "   ████╔╝ ",
            "   ╚═══╝  ",
        ]),
    ),
    (
        'え',
        Glyph::new([
            "  ██████╗  ",
            "  ╚═════╝  ",
            " ████████╗ ",
            " ╚══██╔═╝  ",
            "  ██╔╝██╗  ",
            " ██╔╝ ╚████",
        ]),
    ),
    (
        'お',
        Glyph::new([
            "  ██╗  ██╗ ",
            "███████╗╚╝ ",
            "  ██╔═══██╗",
            " ████╗  ██║",
            "██╔██║ ██╔╝",
            "╚████╔██╔╝ ",
        ]),
    ),
    (
        'か',
        Glyph::new([
            "  ██╗   ██╗  ",
            "████████╗╚██╗",
            "  ██╔══██║   ",
            " ██╔╝  ██║   ",
            "██╔╝ ███╔╝   ",
            "╚═╝  ╚══╝    ",
        ]),
    ),
    (
        'き',
        Glyph::new([
            "  ██╗     ",
            "████████╗ ",
            "  ███████╗",
            " ██████╔╝ ",
            "██╔═══╝   ",
            "╚██████╗  ",
        ]),
    ),
    (
        'く',
        Glyph::new([
            "    ██╗ ",
            "  ██╔═╝ ",
            "██╔═╝   ",
            "╚██╗    ",
            "  ╚██╗  ",
            "    ╚═╝ ",
        ]),
    ),
    (
        'け',
        Glyph::new([
            "██╗    ██╗   ",
            "██║ ████████╗",
            "██║    ██╔══╝",
            "██║    ██║   ",
            "╚═╝  ██╔═╝   ",
            "     ╚═╝     ",
        ]),
    ),
    (
        'こ',
        Glyph::new([
            " ███████╗ ",
            " ╚══════╝ ",
            "          ",
            "          ",
            "██╗       ",
            "╚████████╗",
        ]),
    ),
    (
        'ん',
        Glyph::new([
            "   ██╗     ",
            "  ██╔╝     ",
            " ██╔╝      ",
            "██████╗    ",
            "██╔═██║ ██╗",
            "██║ ╚████╔╝",
        ]),
    ),
    (
        'に',
        Glyph::new([
            "██╗ ██████╗",
            "██║ ╚═════╝",
            "██║        ",
            "██║ ██╗    ",
            "██║ ╚█████╗",
            "╚═╝  ╚════╝",
        ]),
    ),
    (
        'ち',
        Glyph::new([
            "  ██╗     ",
            "████████╗ ",
            " ██╔═══╝  ",
            " ████████╗",
            " ╚════██╔╝",
            " ██████╔╝ ",
        ]),
    ),
    (
        'は',
        Glyph::new([
            "██╗   ██╗    ",
            "██║████████╗ ",
            "██║   ██║    ",
            "██║ ██████╗  ",
            "██║██╔═██╔██╗",
            "╚═╝╚████╔╝╚═╝",
        ]),
    ),
];
