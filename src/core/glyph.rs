//! 3×5 block font for the clock display.

pub const ROWS: usize = 5;
pub const COLS: usize = 3;

/// Five rows of three cells; 1 is a filled block.
pub type GlyphPattern = [[u8; COLS]; ROWS];

/// Characters with a dedicated pattern. Anything else renders as '0'.
pub const SUPPORTED: [char; 12] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ',', '$'];

struct Glyphs;

impl Glyphs {
    const DIGIT_0: GlyphPattern = [[1, 1, 1], [1, 0, 1], [1, 0, 1], [1, 0, 1], [1, 1, 1]];
    const DIGIT_1: GlyphPattern = [[0, 1, 0], [1, 1, 0], [0, 1, 0], [0, 1, 0], [1, 1, 1]];
    const DIGIT_2: GlyphPattern = [[1, 1, 1], [0, 0, 1], [1, 1, 1], [1, 0, 0], [1, 1, 1]];
    const DIGIT_3: GlyphPattern = [[1, 1, 1], [0, 0, 1], [0, 1, 1], [0, 0, 1], [1, 1, 1]];
    const DIGIT_4: GlyphPattern = [[1, 0, 1], [1, 0, 1], [1, 1, 1], [0, 0, 1], [0, 0, 1]];
    const DIGIT_5: GlyphPattern = [[1, 1, 1], [1, 0, 0], [1, 1, 1], [0, 0, 1], [1, 1, 1]];
    const DIGIT_6: GlyphPattern = [[1, 1, 1], [1, 0, 0], [1, 1, 1], [1, 0, 1], [1, 1, 1]];
    const DIGIT_7: GlyphPattern = [[1, 1, 1], [0, 0, 1], [0, 1, 0], [0, 1, 0], [0, 1, 0]];
    const DIGIT_8: GlyphPattern = [[1, 1, 1], [1, 0, 1], [1, 1, 1], [1, 0, 1], [1, 1, 1]];
    const DIGIT_9: GlyphPattern = [[1, 1, 1], [1, 0, 1], [1, 1, 1], [0, 0, 1], [1, 1, 1]];
    // small hook at the bottom right
    const COMMA: GlyphPattern = [[0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 1], [0, 1, 0]];
    const DOLLAR: GlyphPattern = [[0, 1, 0], [1, 1, 1], [0, 1, 0], [1, 1, 1], [0, 1, 0]];
}

/// Look up the pattern for `ch`, falling back to the '0' pattern.
pub fn pattern_for(ch: char) -> &'static GlyphPattern {
    match ch {
        '0' => &Glyphs::DIGIT_0,
        '1' => &Glyphs::DIGIT_1,
        '2' => &Glyphs::DIGIT_2,
        '3' => &Glyphs::DIGIT_3,
        '4' => &Glyphs::DIGIT_4,
        '5' => &Glyphs::DIGIT_5,
        '6' => &Glyphs::DIGIT_6,
        '7' => &Glyphs::DIGIT_7,
        '8' => &Glyphs::DIGIT_8,
        '9' => &Glyphs::DIGIT_9,
        ',' => &Glyphs::COMMA,
        '$' => &Glyphs::DOLLAR,
        _ => &Glyphs::DIGIT_0,
    }
}

pub fn is_supported(ch: char) -> bool {
    SUPPORTED.contains(&ch)
}

/// Number of filled cells in the pattern for `ch`.
pub fn filled_cells(ch: char) -> usize {
    pattern_for(ch)
        .iter()
        .flatten()
        .filter(|&&cell| cell == 1)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_is_binary() {
        for ch in SUPPORTED {
            let pattern = pattern_for(ch);
            assert_eq!(pattern.len(), ROWS);
            for row in pattern {
                assert_eq!(row.len(), COLS);
                assert!(row.iter().all(|&cell| cell <= 1), "bad cell in {:?}", ch);
            }
        }
    }

    #[test]
    fn test_supported_patterns_are_distinct() {
        for (i, a) in SUPPORTED.iter().enumerate() {
            for b in &SUPPORTED[i + 1..] {
                assert_ne!(pattern_for(*a), pattern_for(*b), "{} and {} collide", a, b);
            }
        }
    }

    #[test]
    fn test_unsupported_falls_back_to_zero() {
        for ch in ['E', 'R', 'O', 'x', ' ', '.', '€'] {
            assert!(!is_supported(ch));
            assert_eq!(pattern_for(ch), pattern_for('0'));
        }
    }

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells('0'), 12);
        assert_eq!(filled_cells('1'), 8);
        assert_eq!(filled_cells(','), 2);
        assert_eq!(filled_cells('$'), 9);
        assert_eq!(filled_cells('8'), 13);
    }
}
