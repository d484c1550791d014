use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// The `:` prompt shown while COMMAND mode is active. The buffer itself
/// lives in the root controller; this only draws it.
pub struct CommandLineWidget<'a> {
    pub command: &'a str,
}

impl<'a> Widget for CommandLineWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let prompt_style = Style::default()
            .fg(Color::LightBlue)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled(":", prompt_style),
            Span::raw(self.command),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl<'a> CommandLineWidget<'a> {
    /// Screen X position for the terminal cursor (end of the buffer).
    pub fn cursor_x(&self, area: Rect) -> u16 {
        area.x + 1 + self.command.chars().count() as u16
    }
}
