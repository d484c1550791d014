use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Centered exit confirmation. While visible it captures all keys:
/// `y` confirms, `n` or Escape cancels.
pub struct ExitPopupWidget;

impl Widget for ExitPopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 34.min(area.width.saturating_sub(4));
        let height = 5.min(area.height.saturating_sub(2));
        if width < 10 || height < 4 {
            return;
        }
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let popup = Rect::new(x, y, width, height);

        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightBlue));

        let key_style = Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::raw("Do you want to exit?"),
            Line::raw(""),
            Line::from(vec![
                Span::styled("y", key_style),
                Span::raw(" for yes   "),
                Span::styled("n", key_style),
                Span::raw(" for no"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup, buf);
    }
}
