use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use folio::content::SiteContent;
use folio::modes::Mode;
use folio::sections::Section;
use folio::widgets::command_line::CommandLineWidget;
use folio::widgets::connect::ConnectWidget;
use folio::widgets::exit_popup::ExitPopupWidget;
use folio::widgets::help::HelpWidget;
use folio::widgets::interests::InterestsWidget;
use folio::widgets::navigation::NavigationWidget;
use folio::widgets::projects::ProjectsWidget;
use folio::widgets::status_line::StatusLineWidget;
use folio::widgets::toast::ToastWidget;

/// Snapshot tests using Ratatui's TestBackend.
/// These verify that widgets render correctly by checking buffer contents.

#[test]
fn test_navigation_renders_all_sections() {
    let backend = TestBackend::new(70, 3);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            let widget = NavigationWidget {
                active: Section::Projects,
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    for token in ["me", "projects", "diggin", "connect", "help"] {
        assert!(text.contains(token), "should list section {token}");
    }
}

#[test]
fn test_status_line_breadcrumb() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            let widget = StatusLineWidget {
                mode: "NORMAL",
                section: "projects",
                selected_item: Some("Movie Blind Box"),
                message: None,
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let line = buffer_line_to_string(terminal.backend().buffer(), 0);
    assert!(line.contains("NORMAL"), "should contain mode");
    assert!(
        line.contains("projects > Movie Blind Box"),
        "should contain breadcrumb"
    );
}

#[test]
fn test_status_line_without_selection() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            let widget = StatusLineWidget {
                mode: "INSERT",
                section: "me",
                selected_item: None,
                message: Some("Copied to clipboard"),
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let line = buffer_line_to_string(terminal.backend().buffer(), 0);
    assert!(line.contains("INSERT"));
    assert!(!line.contains('>'), "no breadcrumb arrow without a selection");
    assert!(line.contains("Copied to clipboard"));
}

#[test]
fn test_command_line_prompt_and_cursor() {
    let backend = TestBackend::new(40, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            let area = frame.area();
            let widget = CommandLineWidget { command: "projects" };
            assert_eq!(widget.cursor_x(area), area.x + 1 + 8);
            frame.render_widget(widget, area);
        })
        .unwrap();

    let line = buffer_line_to_string(terminal.backend().buffer(), 0);
    assert!(line.starts_with(":projects"), "got: {line}");
}

#[test]
fn test_projects_marks_selected_row() {
    let backend = TestBackend::new(70, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    let content = SiteContent::default();

    terminal
        .draw(|frame| {
            let widget = ProjectsWidget {
                projects: &content.projects,
                selected: 2,
                mode: Mode::Normal,
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Projects"), "should have pane title");
    let marked = text
        .lines()
        .find(|l| l.contains('▸'))
        .expect("one row should carry the selection marker");
    assert!(
        marked.contains(&content.projects[2].name),
        "marker should sit on the selected project"
    );
    assert!(
        text.contains("j/k to navigate"),
        "should show the normal-mode hint"
    );
}

#[test]
fn test_interests_insert_mode_hint() {
    let backend = TestBackend::new(70, 22);
    let mut terminal = Terminal::new(backend).unwrap();
    let content = SiteContent::default();

    terminal
        .draw(|frame| {
            let widget = InterestsWidget {
                interests: &content.interests,
                selected: 0,
                mode: Mode::Insert,
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Terrarium"));
    assert!(text.contains("Press ESC to return to normal mode"));
}

#[test]
fn test_connect_lists_links() {
    let backend = TestBackend::new(70, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    let content = SiteContent::default();

    terminal
        .draw(|frame| {
            let widget = ConnectWidget {
                links: &content.links,
                selected: 1,
                mode: Mode::Normal,
                monochrome: true,
            };
            frame.render_widget(widget, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("GitHub"));
    assert!(text.contains("@chang2000"));
    let marked = text.lines().find(|l| l.contains('▸')).unwrap();
    assert!(marked.contains("GitHub"), "selection marker on row 1");
}

#[test]
fn test_help_reference() {
    let backend = TestBackend::new(60, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            frame.render_widget(HelpWidget { monochrome: true }, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Modes"));
    assert!(text.contains("Navigation"));
    assert!(text.contains("Commands"));
    assert!(text.contains(":projects"));
    assert!(text.contains(":q or :quit"));
}

#[test]
fn test_exit_popup_centered_text() {
    let backend = TestBackend::new(60, 15);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            frame.render_widget(ExitPopupWidget, frame.area());
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Do you want to exit?"));
    assert!(text.contains("for yes"));
    assert!(text.contains("for no"));
}

#[test]
fn test_toast_message() {
    let backend = TestBackend::new(70, 12);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            frame.render_widget(
                ToastWidget {
                    message: "Nothing to write",
                },
                frame.area(),
            );
        })
        .unwrap();

    let text = buffer_to_string(terminal.backend().buffer());
    assert!(text.contains("Nothing to write"));
}

// Helper: extract a line from a buffer as a string
fn buffer_line_to_string(buf: &Buffer, y: u16) -> String {
    let area = buf.area();
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect::<String>()
}

// Helper: extract all buffer contents as a string
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area();
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            result.push_str(buf[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}
