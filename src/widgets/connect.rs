use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::content::ContactLink;
use crate::modes::Mode;
use crate::widgets::projects::hint;

/// Contact links. Every entry has an activation target.
pub struct ConnectWidget<'a> {
    pub links: &'a [ContactLink],
    pub selected: usize,
    pub mode: Mode,
    pub monochrome: bool,
}

impl<'a> Widget for ConnectWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Let's Connect ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, link) in self.links.iter().enumerate() {
            let is_selected = i == self.selected;
            let (marker, label_style, value_style) = if is_selected {
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
                let value = if self.monochrome {
                    Style::default()
                } else {
                    Style::default().fg(Color::Yellow)
                };
                ("  ", Style::default().add_modifier(Modifier::BOLD), value)
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<10}", link.label), label_style),
                Span::styled(link.value.as_str(), value_style),
            ]));
        }
        lines.push(Line::raw(""));

        lines.push(hint(self.mode, self.monochrome, "Use j/k to navigate • Enter to copy a link"));
        Paragraph::new(lines).render(inner, buf);
    }
}
