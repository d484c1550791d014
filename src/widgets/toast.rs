use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// A floating advisory box in the bottom-right corner. Purely informational;
/// it auto-dismisses on the event-loop tick and captures no input.
pub struct ToastWidget<'a> {
    pub message: &'a str,
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_width = area.width.saturating_sub(4).min(50);
        if max_width < 10 || area.height < 5 {
            return;
        }

        let len = self.message.chars().count() as u16;
        let text_width = (len + 4).clamp(10, max_width);
        let text_lines = len.max(1).div_ceil(text_width - 4);
        let height = (text_lines + 2).min(area.height.saturating_sub(2));

        // Bottom-right, one row above the status line
        let x = area.x + area.width.saturating_sub(text_width + 1);
        let y = area.y + area.height.saturating_sub(height + 2);
        let popup = Rect::new(x, y, text_width, height);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue));

        Paragraph::new(self.message)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
