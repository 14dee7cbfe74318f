use ratatui::{layout::Rect, style::Style, text::Span};

/// Direction of the selection-indicator glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    Right,
}

#[must_use]
pub fn arrow_glyph(direction: ArrowDirection) -> char {
    match direction {
        ArrowDirection::Up => '▴',
        ArrowDirection::Down => '▾',
        ArrowDirection::Left => '◂',
        ArrowDirection::Right => '▸',
    }
}

/// Splits `text` into spans, styling every occurrence of `needle` with
/// `marked` and everything else with `base`. Matching is ASCII
/// case-insensitive, the way the typed filter is matched against candidate
/// labels. An empty needle marks nothing.
#[must_use]
pub fn highlight_spans<'a>(
    text: &'a str,
    needle: &str,
    base: Style,
    marked: Style,
) -> Vec<Span<'a>> {
    if needle.is_empty() || text.is_empty() {
        return vec![Span::styled(text, base)];
    }

    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(at) = find_ignore_ascii_case(text, needle, cursor) {
        if at > cursor {
            spans.push(Span::styled(&text[cursor..at], base));
        }
        spans.push(Span::styled(&text[at..at + needle.len()], marked));
        cursor = at + needle.len();
    }
    if cursor < text.len() {
        spans.push(Span::styled(&text[cursor..], base));
    }
    spans
}

/// First occurrence of `needle` in `hay` at or after byte offset `from`,
/// ignoring ASCII case. `from` must lie on a char boundary.
fn find_ignore_ascii_case(hay: &str, needle: &str, from: usize) -> Option<usize> {
    if from >= hay.len() {
        return None;
    }
    for (offset, _) in hay[from..].char_indices() {
        let at = from + offset;
        // `get` rejects slices that end past the string or off a boundary.
        if let Some(candidate) = hay.get(at..at + needle.len()) {
            if candidate.eq_ignore_ascii_case(needle) {
                return Some(at);
            }
        }
    }
    None
}

/// Greedy word wrap for the documentation panel. Words longer than
/// `max_width` are kept whole and overflow their line.
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if current_width + word_width + 1 > max_width && !current_line.is_empty() {
            lines.push(current_line);
            current_line = word.to_string();
            current_width = word_width;
        } else {
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Places a popup of `size` at anchor `(x, y)` inside `bounds`, shifting it
/// left when it would overflow the right edge and flipping it above the
/// anchor when it would overflow the bottom.
#[must_use]
pub fn anchored_rect(x: u16, y: u16, size: (u16, u16), bounds: Rect) -> Rect {
    let width = size.0.min(bounds.width);
    let height = size.1.min(bounds.height);

    let mut x = x.max(bounds.x);
    let mut y = y.max(bounds.y);

    if x + width > bounds.right() {
        x = bounds.right().saturating_sub(width);
    }

    if y + height > bounds.bottom() {
        y = y.saturating_sub(height).max(bounds.y);
    }

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn styles() -> (Style, Style) {
        (
            Style::default().fg(Color::White),
            Style::default().fg(Color::Yellow),
        )
    }

    fn rendered(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_middle_occurrence() {
        let (base, marked) = styles();
        let spans = highlight_spans("unwrap_or", "wrap", base, marked);
        assert_eq!(rendered(&spans), "unwrap_or");
        assert_eq!(
            spans.iter().map(|s| s.content.as_ref()).collect::<Vec<_>>(),
            vec!["un", "wrap", "_or"]
        );
        assert_eq!(spans[1].style, marked);
        assert_eq!(spans[0].style, base);
    }

    #[test]
    fn test_highlight_repeated_and_leading() {
        let (base, marked) = styles();
        let spans = highlight_spans("mapmap", "map", base, marked);
        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.style == marked));
    }

    #[test]
    fn test_highlight_is_ascii_case_insensitive() {
        let (base, marked) = styles();
        let spans = highlight_spans("HashMap", "map", base, marked);
        assert_eq!(
            spans.iter().map(|s| s.content.as_ref()).collect::<Vec<_>>(),
            vec!["Hash", "Map"]
        );
        assert_eq!(spans[1].style, marked);
    }

    #[test]
    fn test_highlight_no_match_and_empty_needle() {
        let (base, marked) = styles();

        let spans = highlight_spans("push", "zz", base, marked);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, base);

        let spans = highlight_spans("push", "", base, marked);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, base);
    }

    #[test]
    fn test_highlight_multibyte_label() {
        let (base, marked) = styles();
        // Matching must never split a multi-byte char.
        let spans = highlight_spans("número", "mer", base, marked);
        assert_eq!(rendered(&spans), "número");
        assert_eq!(spans[1].content.as_ref(), "mer");
    }

    #[test]
    fn test_wrap_text_basic() {
        let lines = wrap_text("the quick brown fox jumps", 11);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_long_word_overflows() {
        let lines = wrap_text("supercalifragilistic a", 5);
        assert_eq!(lines, vec!["supercalifragilistic", "a"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_anchored_rect_fits_in_place() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert_eq!(anchored_rect(5, 5, (20, 6), bounds), Rect::new(5, 5, 20, 6));
    }

    #[test]
    fn test_anchored_rect_shifts_left_at_right_edge() {
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = anchored_rect(75, 5, (20, 6), bounds);
        assert_eq!(rect.right(), 80);
        assert_eq!(rect.y, 5);
    }

    #[test]
    fn test_anchored_rect_flips_above_at_bottom_edge() {
        let bounds = Rect::new(0, 0, 80, 24);
        let rect = anchored_rect(5, 22, (20, 6), bounds);
        assert_eq!(rect, Rect::new(5, 16, 20, 6));
    }

    #[test]
    fn test_anchored_rect_clamps_oversized_popup() {
        let bounds = Rect::new(0, 0, 10, 4);
        let rect = anchored_rect(0, 0, (40, 12), bounds);
        assert_eq!(rect, Rect::new(0, 0, 10, 4));
    }
}
