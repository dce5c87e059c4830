//! Width-aware text helpers shared by layout and rendering.
//!
//! Layout measures blocks with these functions and rendering draws with
//! them, so a block always gets exactly the rows its text needs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns occupied by `s`.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Greedy word wrap to `width` columns.
///
/// Words wider than `width` are split. Empty input yields one empty line so
/// an empty paragraph still occupies a row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            for piece in split_to_width(word, width) {
                let piece_width = display_width(&piece);
                if piece_width == width {
                    lines.push(piece);
                } else {
                    current = piece;
                    current_width = piece_width;
                }
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Number of rows [`wrap_text`] produces.
pub fn wrapped_height(text: &str, width: usize) -> u16 {
    wrap_text(text, width).len() as u16
}

fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Cut `s` to at most `max` columns, ending in `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left offset that centers `content` columns inside `available`.
pub fn center_offset(content: usize, available: usize) -> usize {
    available.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("A selection of my best work.", 12);
        assert_eq!(lines, vec!["A selection", "of my best", "work."]);
        assert!(lines.iter().all(|l| display_width(l) <= 12));
    }

    #[test]
    fn test_wrap_empty_is_one_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrapped_height("   ", 10), 1);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("abcdefghij xy", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_counts_wide_chars() {
        assert_eq!(display_width("♥"), 1);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(wrap_text("日本 日本", 4), vec!["日本", "日本"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Jayaprakash T", 20), "Jayaprakash T");
        assert_eq!(truncate("Jayaprakash T", 6), "Jayap…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_center_offset() {
        assert_eq!(center_offset(10, 30), 10);
        assert_eq!(center_offset(40, 30), 0);
    }
}
