use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::helpers::{arrow_glyph, highlight_spans, ArrowDirection};
use crate::state::CandidateEntry;
use crate::theme::{icon_glyph, palette};

/// One candidate row: icon cell, selection indicator, label with the filter
/// text emphasized, and a dim detail annotation.
pub struct MenuItem<'a> {
    pub entry: &'a CandidateEntry,
    /// Filter text to emphasize inside the label.
    pub base: &'a str,
    pub is_selected: bool,
    pub foreground: Color,
    pub background: Color,
    pub highlight: Color,
}

impl<'a> MenuItem<'a> {
    /// The indicator column is always present so labels stay aligned; on
    /// unselected rows the glyph is drawn in the row's own background color,
    /// which reserves the space while keeping it invisible.
    #[must_use]
    pub fn to_line(&self) -> Line<'a> {
        let row_bg = if self.is_selected {
            palette::mix(self.background, self.highlight, 0.25)
        } else {
            self.background
        };

        let icon = Span::styled(
            format!(" {} ", icon_glyph(&self.entry.icon)),
            Style::default().fg(self.background).bg(self.highlight),
        );

        let arrow_color = if self.is_selected {
            self.highlight
        } else {
            row_bg
        };
        let arrow = Span::styled(
            format!(" {} ", arrow_glyph(ArrowDirection::Right)),
            Style::default().fg(arrow_color).bg(row_bg),
        );

        let mut label_style = Style::default().fg(self.foreground).bg(row_bg);
        if self.is_selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        let marked_style = label_style.fg(self.highlight).add_modifier(Modifier::BOLD);

        let mut spans = vec![icon, arrow];
        spans.extend(highlight_spans(
            &self.entry.label,
            self.base,
            label_style,
            marked_style,
        ));

        if !self.entry.detail.is_empty() {
            spans.push(Span::styled("  ", Style::default().bg(row_bg)));
            spans.push(Span::styled(
                self.entry.detail.as_str(),
                Style::default()
                    .fg(self.foreground)
                    .bg(row_bg)
                    .add_modifier(Modifier::DIM),
            ));
        }

        Line::from(spans)
    }

    /// Display width of the row in terminal cells.
    #[must_use]
    pub fn width(entry: &CandidateEntry) -> usize {
        let detail = if entry.detail.is_empty() {
            0
        } else {
            2 + entry.detail.chars().count()
        };
        // icon cell (3) + indicator cell (3) + label + detail
        6 + entry.label.chars().count() + detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: Color = Color::Rgb(0xd8, 0xde, 0xe9);
    const BG: Color = Color::Rgb(0x2e, 0x34, 0x40);
    const HL: Color = Color::Rgb(0x88, 0xc0, 0xd0);

    fn item(is_selected: bool, entry: &CandidateEntry) -> Line<'_> {
        MenuItem {
            entry,
            base: "pu",
            is_selected,
            foreground: FG,
            background: BG,
            highlight: HL,
        }
        .to_line()
    }

    #[test]
    fn test_selected_row_arrow_uses_highlight_color() {
        let entry = CandidateEntry::new("push", "fn(T)", "method");
        let line = item(true, &entry);
        assert_eq!(line.spans[1].content.as_ref(), " ▸ ");
        assert_eq!(line.spans[1].style.fg, Some(HL));
    }

    #[test]
    fn test_unselected_row_arrow_is_invisible_but_reserved() {
        let entry = CandidateEntry::new("push", "fn(T)", "method");
        let line = item(false, &entry);
        // Same glyph and width as the selected row, drawn in the row
        // background so nothing shows.
        assert_eq!(line.spans[1].content.as_ref(), " ▸ ");
        assert_eq!(line.spans[1].style.fg, Some(BG));
        assert_eq!(line.spans[1].style.bg, Some(BG));
    }

    #[test]
    fn test_icon_cell_uses_highlight_background() {
        let entry = CandidateEntry::new("push", "", "method");
        let line = item(false, &entry);
        assert_eq!(line.spans[0].content.as_ref(), " ƒ ");
        assert_eq!(line.spans[0].style.bg, Some(HL));
    }

    #[test]
    fn test_label_marks_filter_occurrence() {
        let entry = CandidateEntry::new("push", "", "method");
        let line = item(false, &entry);
        // spans: icon, arrow, "pu" (marked), "sh"
        assert_eq!(line.spans[2].content.as_ref(), "pu");
        assert_eq!(line.spans[2].style.fg, Some(HL));
        assert_eq!(line.spans[3].content.as_ref(), "sh");
        assert_eq!(line.spans[3].style.fg, Some(FG));
    }

    #[test]
    fn test_empty_detail_renders_no_trailing_spans() {
        let entry = CandidateEntry::new("push", "", "method");
        let line = item(false, &entry);
        assert_eq!(line.spans.len(), 4);
    }

    #[test]
    fn test_width_accounts_for_all_columns() {
        let entry = CandidateEntry::new("push", "fn(T)", "method");
        // 3 icon + 3 arrow + 4 label + 2 gap + 5 detail
        assert_eq!(MenuItem::width(&entry), 17);
    }
}
