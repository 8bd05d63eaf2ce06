//! Built-in 3x5 bitmap font
//!
//! Each glyph is five rows of three bits, most significant bit on the left.
//! Lowercase letters render as uppercase; anything without a glyph renders
//! as a blank cell.

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Glyph cell plus one column of spacing
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: [u8; GLYPH_HEIGHT as usize],
}

impl Glyph {
    const fn new(rows: [u8; GLYPH_HEIGHT as usize]) -> Self {
        Self { rows }
    }

    /// True if the cell at (col, row) is lit
    pub fn lit(&self, col: i32, row: i32) -> bool {
        (self.rows[row as usize] & (1 << (GLYPH_WIDTH - 1 - col))) != 0
    }
}

pub const SPACE_GLYPH: Glyph = Glyph::new([0, 0, 0, 0, 0]);

pub fn glyph_for(ch: char) -> Glyph {
    match ch.to_ascii_uppercase() {
        '0' => Glyph::new([0b111, 0b101, 0b101, 0b101, 0b111]),
        '1' => Glyph::new([0b010, 0b110, 0b010, 0b010, 0b111]),
        '2' => Glyph::new([0b111, 0b001, 0b111, 0b100, 0b111]),
        '3' => Glyph::new([0b111, 0b001, 0b111, 0b001, 0b111]),
        '4' => Glyph::new([0b101, 0b101, 0b111, 0b001, 0b001]),
        '5' => Glyph::new([0b111, 0b100, 0b111, 0b001, 0b111]),
        '6' => Glyph::new([0b111, 0b100, 0b111, 0b101, 0b111]),
        '7' => Glyph::new([0b111, 0b001, 0b001, 0b010, 0b010]),
        '8' => Glyph::new([0b111, 0b101, 0b111, 0b101, 0b111]),
        '9' => Glyph::new([0b111, 0b101, 0b111, 0b001, 0b111]),
        'A' => Glyph::new([0b010, 0b101, 0b111, 0b101, 0b101]),
        'B' => Glyph::new([0b110, 0b101, 0b110, 0b101, 0b110]),
        'C' => Glyph::new([0b011, 0b100, 0b100, 0b100, 0b011]),
        'D' => Glyph::new([0b110, 0b101, 0b101, 0b101, 0b110]),
        'E' => Glyph::new([0b111, 0b100, 0b110, 0b100, 0b111]),
        'F' => Glyph::new([0b111, 0b100, 0b110, 0b100, 0b100]),
        'G' => Glyph::new([0b011, 0b100, 0b101, 0b101, 0b011]),
        'H' => Glyph::new([0b101, 0b101, 0b111, 0b101, 0b101]),
        'I' => Glyph::new([0b111, 0b010, 0b010, 0b010, 0b111]),
        'J' => Glyph::new([0b001, 0b001, 0b001, 0b101, 0b010]),
        'K' => Glyph::new([0b101, 0b101, 0b110, 0b101, 0b101]),
        'L' => Glyph::new([0b100, 0b100, 0b100, 0b100, 0b111]),
        'M' => Glyph::new([0b101, 0b111, 0b111, 0b101, 0b101]),
        'N' => Glyph::new([0b110, 0b101, 0b101, 0b101, 0b101]),
        'O' => Glyph::new([0b010, 0b101, 0b101, 0b101, 0b010]),
        'P' => Glyph::new([0b110, 0b101, 0b110, 0b100, 0b100]),
        'Q' => Glyph::new([0b010, 0b101, 0b101, 0b110, 0b011]),
        'R' => Glyph::new([0b110, 0b101, 0b110, 0b101, 0b101]),
        'S' => Glyph::new([0b011, 0b100, 0b010, 0b001, 0b110]),
        'T' => Glyph::new([0b111, 0b010, 0b010, 0b010, 0b010]),
        'U' => Glyph::new([0b101, 0b101, 0b101, 0b101, 0b111]),
        'V' => Glyph::new([0b101, 0b101, 0b101, 0b101, 0b010]),
        'W' => Glyph::new([0b101, 0b101, 0b111, 0b111, 0b101]),
        'X' => Glyph::new([0b101, 0b101, 0b010, 0b101, 0b101]),
        'Y' => Glyph::new([0b101, 0b101, 0b010, 0b010, 0b010]),
        'Z' => Glyph::new([0b111, 0b001, 0b010, 0b100, 0b111]),
        '!' => Glyph::new([0b010, 0b010, 0b010, 0b000, 0b010]),
        ':' => Glyph::new([0b000, 0b010, 0b000, 0b010, 0b000]),
        '.' => Glyph::new([0b000, 0b000, 0b000, 0b000, 0b010]),
        '-' => Glyph::new([0b000, 0b000, 0b111, 0b000, 0b000]),
        _ => SPACE_GLYPH,
    }
}

/// Pixels per font cell for a requested text size
///
/// A size is roughly the line height in pixels; one line is the glyph height
/// plus spacing above and below.
pub fn cell_size(text_size: u32) -> i32 {
    (text_size as i32 / (GLYPH_HEIGHT + 3)).max(1)
}

/// Width and height in pixels of `text` rendered at `cell` pixels per cell
pub fn measure(text: &str, cell: i32) -> (i32, i32) {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return (0, 0);
    }
    // No trailing spacing column after the last glyph
    let width = (chars * GLYPH_ADVANCE - 1) * cell;
    (width, GLYPH_HEIGHT * cell)
}
