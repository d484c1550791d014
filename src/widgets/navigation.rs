use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::sections::Section;

/// The section tab row. The active section is highlighted; switching happens
/// through h/l keys or `:` commands, both routed by the root controller.
pub struct NavigationWidget {
    pub active: Section,
    pub monochrome: bool,
}

impl Widget for NavigationWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let active_style = if self.monochrome {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        let idle_style = Style::default();

        let mut spans = Vec::new();
        for section in Section::ALL {
            let style = if section == self.active {
                active_style
            } else {
                idle_style
            };
            spans.push(Span::styled(format!(" {} ", section.token()), style));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
