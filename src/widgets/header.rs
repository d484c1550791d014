use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Top line: the prompt-style title and a hint on how to find the commands.
pub struct HeaderWidget {
    pub monochrome: bool,
}

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let title_style = if self.monochrome {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        let hint_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = "~/folio";
        let hint = ":help for commands ";
        let padding = (area.width as usize).saturating_sub(title.len() + hint.len());

        let line = Line::from(vec![
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(hint, hint_style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
