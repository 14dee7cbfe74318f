use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::helpers::wrap_text;
use crate::theme::dim_color;

/// Documentation of the selected candidate, shown under the entry list.
/// Renders a separator plus wrapped text when given a non-empty string, and
/// nothing at all otherwise.
pub struct DocumentationPanel<'a> {
    pub documentation: Option<&'a str>,
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
}

impl Widget for DocumentationPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(documentation) = self.documentation else {
            return;
        };
        if documentation.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let separator = "─".repeat(area.width as usize);
        buf.set_string(
            area.x,
            area.y,
            separator,
            Style::default().fg(self.border).bg(self.background),
        );

        // Slightly muted against the list text above it.
        let text_style = Style::default()
            .fg(dim_color(self.foreground, 0.85))
            .bg(self.background);
        let lines = wrap_text(documentation, area.width.saturating_sub(2) as usize);
        let mut y = area.y + 1;
        for line in &lines {
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(
                area.x + 1,
                y,
                line,
                area.width.saturating_sub(1) as usize,
                text_style,
            );
            y += 1;
        }
    }
}

impl DocumentationPanel<'_> {
    /// Rows the panel occupies for `documentation` at `width` cells:
    /// separator plus wrapped lines, or zero when there is nothing to show.
    #[must_use]
    pub fn height(documentation: Option<&str>, width: u16) -> u16 {
        match documentation {
            None | Some("") => 0,
            Some(doc) => 1 + wrap_text(doc, width.saturating_sub(2) as usize).len() as u16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Color = Color::Rgb(0xd8, 0xde, 0xe9);
    const BG: Color = Color::Rgb(0x2e, 0x34, 0x40);
    const BORDER: Color = Color::Rgb(0x88, 0xc0, 0xd0);

    fn render(documentation: Option<&str>, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        DocumentationPanel {
            documentation,
            foreground: FG,
            background: BG,
            border: BORDER,
        }
        .render(buf.area, &mut buf);
        buf
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_separator_and_text() {
        let buf = render(Some("Appends an element"), 24, 3);
        assert!(row(&buf, 0).starts_with('─'));
        assert!(row(&buf, 1).contains("Appends an element"));
    }

    #[test]
    fn test_nothing_without_documentation() {
        let empty = Buffer::empty(Rect::new(0, 0, 24, 3));
        assert_eq!(render(None, 24, 3), empty);
        assert_eq!(render(Some(""), 24, 3), empty);
    }

    #[test]
    fn test_wraps_to_panel_width() {
        let buf = render(Some("one two three four five six"), 12, 5);
        assert!(row(&buf, 1).contains("one two"));
        assert!(row(&buf, 2).contains("three"));
    }

    #[test]
    fn test_height_matches_rendered_rows() {
        assert_eq!(DocumentationPanel::height(None, 20), 0);
        assert_eq!(DocumentationPanel::height(Some(""), 20), 0);
        assert_eq!(DocumentationPanel::height(Some("short"), 20), 2);
        assert_eq!(
            DocumentationPanel::height(Some("one two three four five six"), 12),
            1 + wrap_text("one two three four five six", 10).len() as u16
        );
    }
}
