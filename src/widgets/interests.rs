use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::content::Interest;
use crate::modes::Mode;
use crate::widgets::projects::hint;

/// The interests list. No entry has an activation target, so Enter is a
/// no-op here; j/k selection still moves and reports labels like every
/// other list view.
pub struct InterestsWidget<'a> {
    pub interests: &'a [Interest],
    pub selected: usize,
    pub mode: Mode,
    pub monochrome: bool,
}

impl<'a> Widget for InterestsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" What I'm Into ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, interest) in self.interests.iter().enumerate() {
            let is_selected = i == self.selected;
            let (marker, name_style, desc_style) = if is_selected {
                let style = if self.monochrome {
                    Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
                } else {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::LightBlue)
                        .add_modifier(Modifier::BOLD)
                };
                ("▸ ", style, style)
            } else {
                let desc = if self.monochrome {
                    Style::default()
                } else {
                    Style::default().fg(Color::Yellow)
                };
                ("  ", Style::default().add_modifier(Modifier::BOLD), desc)
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(interest.name.as_str(), name_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(interest.description.as_str(), desc_style),
            ]));
            lines.push(Line::raw(""));
        }

        lines.push(hint(self.mode, self.monochrome, "Use j/k to navigate • i to enter insert mode"));
        Paragraph::new(lines).render(inner, buf);
    }
}
