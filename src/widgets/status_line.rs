use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Bottom status bar: mode chip, `section > selected-item` breadcrumb, and an
/// optional transient message, right-aligned.
pub struct StatusLineWidget<'a> {
    /// Current mode label ("NORMAL", "COMMAND", "INSERT")
    pub mode: &'a str,
    /// Active section token
    pub section: &'a str,
    /// Display copy of the selected item's label
    pub selected_item: Option<&'a str>,
    /// Transient message (e.g. "Copied ... to clipboard")
    pub message: Option<&'a str>,
    pub monochrome: bool,
}

impl<'a> Widget for StatusLineWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let (bg, mode_style, crumb_style, msg_style) = if self.monochrome {
            (
                Style::default().add_modifier(Modifier::REVERSED),
                Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
                Style::default().add_modifier(Modifier::REVERSED),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            let bar = Style::default().bg(Color::LightBlue);
            (
                bar,
                Style::default()
                    .fg(Color::LightBlue)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Black).bg(Color::LightBlue),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightBlue)
                    .add_modifier(Modifier::ITALIC),
            )
        };

        // Fill background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_style(bg);
        }

        let crumb = match self.selected_item {
            Some(item) => format!(" {} > {} ", self.section, item),
            None => format!(" {} ", self.section),
        };

        let mut spans = vec![
            Span::styled(format!(" {} ", self.mode), mode_style),
            Span::styled(crumb, crumb_style),
        ];

        if let Some(msg) = self.message {
            let left_len: usize = spans.iter().map(|s| s.width()).sum();
            let msg_text = format!(" {msg} ");
            let padding = (area.width as usize).saturating_sub(left_len + msg_text.len());
            if padding > 0 {
                spans.push(Span::styled(" ".repeat(padding), bg));
            }
            spans.push(Span::styled(msg_text, msg_style));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
