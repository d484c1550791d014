use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Static keybinding and command reference.
pub struct HelpWidget {
    pub monochrome: bool,
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let key_style = if self.monochrome {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        let heading = Style::default().add_modifier(Modifier::BOLD);

        let entries: &[(&str, &str)] = &[
            ("ESC", "Normal mode"),
            ("i", "Insert mode"),
            (":", "Command mode"),
        ];
        let nav: &[(&str, &str)] = &[
            ("h / ←", "Previous section"),
            ("l / →", "Next section"),
            ("j / ↓", "Move down in lists"),
            ("k / ↑", "Move up in lists"),
            ("Enter", "Copy the selected link"),
        ];
        let commands: &[(&str, &str)] = &[
            (":me", "About me"),
            (":projects", "View projects"),
            (":diggin", "What I'm into"),
            (":connect", "Get in touch"),
            (":help", "Show this help"),
            (":w", "Save current section (hint only)"),
            (":q or :quit", "Exit"),
        ];

        let mut lines = vec![Line::from(Span::styled("Modes", heading))];
        for (key, desc) in entries {
            lines.push(binding_line(key, desc, key_style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Navigation", heading)));
        for (key, desc) in nav {
            lines.push(binding_line(key, desc, key_style));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("Commands", heading)));
        for (key, desc) in commands {
            lines.push(binding_line(key, desc, key_style));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn binding_line(key: &'static str, desc: &'static str, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), key_style),
        Span::raw(desc),
    ])
}
