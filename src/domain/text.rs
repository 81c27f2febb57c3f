use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Printable stand-in for whitespace and control chars
pub fn visible_symbol(c: char) -> String {
    match c {
        ' ' => String::from("␠"),
        '\n' => String::from("⏎"),
        '\t' => String::from("⇥"),
        c if c.is_control() => format!("\\u{{{:x}}}", c as u32),
        c => c.to_string(),
    }
}

/// Lay pieces out left to right, breaking lines only between pieces
///
/// A piece wider than `width` gets a line of its own.
pub fn wrap_pieces<S: AsRef<str>>(pieces: &[S], width: usize, separator: &str) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();

    for piece in pieces {
        let piece = piece.as_ref();
        let extra = if current.is_empty() {
            piece.width()
        } else {
            separator.width() + piece.width()
        };

        if !current.is_empty() && current.width() + extra > width {
            lines.push(mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str(separator);
        }
        current.push_str(piece);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Cut `s` to at most `max_width` columns, marking the cut with `…`
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        truncated.push(c);
        used += w;
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case('a', "a")]
    #[case(' ', "␠")]
    #[case('\n', "⏎")]
    #[case('\t', "⇥")]
    #[case('\u{7}', "\\u{7}")]
    #[case('ね', "ね")]
    fn test_visible_symbol(#[case] c: char, #[case] expected: &str) {
        assert_eq!(visible_symbol(c), expected);
    }

    #[test]
    fn test_wrap_pieces_fits_on_one_line() {
        let actual = wrap_pieces(&["ab", "cd"], 5, " ");
        assert_eq!(actual, vec!["ab cd"]);
    }

    #[test]
    fn test_wrap_pieces_breaks_between_pieces() {
        let actual = wrap_pieces(&["a", "<3,3>", "b", "c"], 7, " ");
        assert_eq!(actual, vec!["a <3,3>", "b c"]);
    }

    #[test]
    fn test_wrap_pieces_keeps_wide_piece_whole() {
        let actual = wrap_pieces(&["a", "<128,200>", "b"], 4, " ");
        assert_eq!(actual, vec!["a", "<128,200>", "b"]);
    }

    #[test]
    fn test_wrap_pieces_double_width() {
        let actual = wrap_pieces(&["ねこ", "ねこ"], 4, "");
        assert_eq!(actual, vec!["ねこ", "ねこ"]);
    }

    #[test]
    fn test_wrap_pieces_zero_width() {
        assert!(wrap_pieces(&["a"], 0, " ").is_empty());
    }

    #[rstest]
    #[case("hello", 10, "hello")]
    #[case("hello", 5, "hello")]
    #[case("hello, world", 6, "hello…")]
    #[case("ねこねこ", 5, "ねこ…")]
    #[case("hello", 0, "")]
    fn test_truncate_width(#[case] s: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(truncate_width(s, width), expected);
    }
}
