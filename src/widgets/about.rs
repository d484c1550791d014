use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::content::Profile;
use crate::modes::Mode;
use crate::widgets::projects::hint;

/// The about pane. Not a list view: no selection, Enter is a no-op here.
pub struct AboutWidget<'a> {
    pub profile: &'a Profile,
    pub mode: Mode,
    pub monochrome: bool,
}

impl<'a> Widget for AboutWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" About ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let accent = if self.monochrome {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        let detail = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut lines = vec![
            Line::from(Span::styled(self.profile.name.as_str(), accent)),
            Line::from(Span::styled(self.profile.role.as_str(), detail)),
            Line::from(Span::styled(self.profile.location.as_str(), detail)),
            Line::raw(""),
            Line::raw(self.profile.bio.as_str()),
            Line::raw(""),
        ];

        if !self.profile.quick_links.is_empty() {
            lines.push(Line::from(Span::styled(
                "Quick Links",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for link in &self.profile.quick_links {
                lines.push(Line::from(vec![
                    Span::raw("  ↗ "),
                    Span::styled(format!("{:<10}", link.label), Style::default()),
                    Span::styled(link.href.as_str(), detail),
                ]));
            }
            lines.push(Line::raw(""));
        }

        lines.push(hint(self.mode, self.monochrome, "Use :projects to see my work"));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
