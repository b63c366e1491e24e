#![forbid(unsafe_code)]

//! Pixel-width word wrapping.
//!
//! Wrapping respects grapheme cluster boundaries (never splits emoji or
//! combining sequences) and counts wide characters (CJK) as two cells of
//! advance. Words longer than the width limit land on their own line and
//! may exceed the limit; callers treat the limit as a wrap hint, not a
//! clip guarantee.

use pixui_core::geometry::Coord;
use pixui_style::Font;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Rendered width of one line in pixels: the sum of glyph advances plus
/// letter spacing between adjacent graphemes.
#[must_use]
pub fn line_px(line: &str, font: &Font, letter_space: Coord) -> Coord {
    let mut px = 0;
    let mut letters: Coord = 0;

    for grapheme in line.graphemes(true) {
        px += font.advance * grapheme.width() as Coord;
        letters += 1;
    }

    if letters > 1 {
        px += letter_space * (letters - 1);
    }
    px
}

/// Wrap text into lines no wider than `max_width` pixels.
///
/// Greedy word wrap: words move to the next line when they no longer fit;
/// a single word wider than the limit occupies its own (overlong) line.
/// Embedded newlines always break; trailing whitespace is trimmed from
/// every produced line. Always returns at least one line.
#[must_use]
pub fn wrap_px(text: &str, font: &Font, letter_space: Coord, max_width: Coord) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_px = 0;

    for paragraph in text.split('\n') {
        if !current.is_empty() {
            lines.push(finalize_line(&current));
            current.clear();
            current_px = 0;
        }

        for word in split_words(paragraph) {
            let is_ws = word.chars().all(char::is_whitespace);

            // Whitespace runs never start a line.
            if current.is_empty() && is_ws {
                continue;
            }

            let word_px = line_px(&word, font, letter_space);

            // Cost of appending to a non-empty line includes the letter
            // spacing at the junction.
            let joined_px = if current.is_empty() {
                word_px
            } else {
                current_px + letter_space + word_px
            };

            if joined_px <= max_width {
                current.push_str(&word);
                current_px = joined_px;
                continue;
            }

            if !current.is_empty() {
                lines.push(finalize_line(&current));
                current.clear();
                current_px = 0;
            }

            if is_ws {
                // An overflowing whitespace run just disappears at the break.
            } else if word_px > max_width {
                // Overlong word: give it its own line rather than split it.
                lines.push(finalize_line(&word));
            } else {
                current.push_str(&word);
                current_px = word_px;
            }
        }
    }

    if !current.is_empty() {
        lines.push(finalize_line(&current));
    }
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Split text into alternating runs of whitespace and non-whitespace,
/// whitespace attached as its own run.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_whitespace = false;

    for grapheme in text.graphemes(true) {
        let is_ws = grapheme.chars().all(char::is_whitespace);

        if is_ws != in_whitespace && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push_str(grapheme);
        in_whitespace = is_ws;
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn finalize_line(line: &str) -> String {
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::{line_px, wrap_px};
    use pixui_style::Font;

    fn font() -> Font {
        Font::new(10, 5)
    }

    #[test]
    fn line_px_counts_advances() {
        assert_eq!(line_px("abc", &font(), 0), 15);
        assert_eq!(line_px("", &font(), 0), 0);
    }

    #[test]
    fn line_px_adds_letter_spacing_between_letters() {
        // 3 glyphs, 2 junctions
        assert_eq!(line_px("abc", &font(), 2), 19);
        // A single glyph has no junction
        assert_eq!(line_px("a", &font(), 2), 5);
    }

    #[test]
    fn line_px_wide_chars_take_two_cells() {
        assert_eq!(line_px("你好", &font(), 0), 20);
    }

    #[test]
    fn wrap_at_word_boundaries() {
        // 50 px fits 10 single-cell glyphs
        let lines = wrap_px("Hello world foo bar", &font(), 0, 50);
        assert_eq!(lines, vec!["Hello", "world foo", "bar"]);
    }

    #[test]
    fn wrap_everything_fits_on_one_line() {
        let lines = wrap_px("Hello", &font(), 0, 500);
        assert_eq!(lines, vec!["Hello"]);
    }

    #[test]
    fn wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_px("", &font(), 0, 50), vec![""]);
    }

    #[test]
    fn wrap_newlines_force_breaks() {
        let lines = wrap_px("ab\ncd", &font(), 0, 500);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn wrap_overlong_word_gets_its_own_line() {
        let lines = wrap_px("abcdefghij xy", &font(), 0, 25);
        assert_eq!(lines, vec!["abcdefghij", "xy"]);
        // The overlong line may exceed the limit
        assert!(line_px(&lines[0], &font(), 0) > 25);
    }

    #[test]
    fn wrap_trims_trailing_whitespace() {
        let lines = wrap_px("ab   ", &font(), 0, 50);
        assert_eq!(lines, vec!["ab"]);
    }

    #[test]
    fn wrap_drops_whitespace_at_break() {
        // The run of spaces overflows the line; it vanishes at the break
        // instead of leaking onto the next line.
        let lines = wrap_px("ab      cd", &font(), 0, 12);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn wrap_widening_never_adds_lines() {
        let text = "alpha beta gamma delta epsilon";
        let mut prev = usize::MAX;
        for width in [40, 60, 80, 120, 200, 400] {
            let count = wrap_px(text, &font(), 0, width).len();
            assert!(count <= prev, "width {width} produced {count} > {prev} lines");
            prev = count;
        }
    }
}
