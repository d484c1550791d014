use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::content::Project;
use crate::modes::Mode;
use crate::widgets::mode_hint;

/// The projects list. Selected row carries a chevron marker; entries with a
/// demo link show an open indicator and are activatable with Enter.
pub struct ProjectsWidget<'a> {
    pub projects: &'a [Project],
    pub selected: usize,
    pub mode: Mode,
    pub monochrome: bool,
}

impl<'a> Widget for ProjectsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::LightBlue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Projects ")
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, project) in self.projects.iter().enumerate() {
            let is_selected = i == self.selected;
            let (marker, name_style, desc_style) = row_styles(is_selected, self.monochrome);

            let mut name_spans = vec![
                Span::raw(marker),
                Span::styled(project.name.as_str(), name_style),
            ];
            if project.demo.is_some() {
                name_spans.push(Span::styled(" ↗", name_style));
            }
            lines.push(Line::from(name_spans));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(project.description.as_str(), desc_style),
            ]));
            if !project.tech.is_empty() {
                let tags = project.tech.join(" · ");
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(tags, tag_style(self.monochrome)),
                ]));
            }
            lines.push(Line::raw(""));
        }

        lines.push(hint(self.mode, self.monochrome, "Use j/k to navigate • Enter to open demo"));
        Paragraph::new(lines).render(inner, buf);
    }
}

fn row_styles(selected: bool, monochrome: bool) -> (&'static str, Style, Style) {
    if selected {
        let style = if monochrome {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        ("▸ ", style, style)
    } else {
        let name = Style::default().add_modifier(Modifier::BOLD);
        let desc = if monochrome {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };
        ("  ", name, desc)
    }
}

fn tag_style(monochrome: bool) -> Style {
    if monochrome {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(crate) fn hint(mode: Mode, monochrome: bool, normal: &'static str) -> Line<'static> {
    let style = if monochrome {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green)
    };
    Line::from(Span::styled(mode_hint(mode, normal), style))
}
