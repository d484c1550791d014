use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    Frame,
};

use crate::command::{self, CmdAction};
use crate::config::AppConfig;
use crate::content::SiteContent;
use crate::keys::{map_key_event, Action, Direction};
use crate::modes::Mode;
use crate::sections::Section;
use crate::selection::ListSelection;
use crate::widgets::about::AboutWidget;
use crate::widgets::command_line::CommandLineWidget;
use crate::widgets::connect::ConnectWidget;
use crate::widgets::exit_popup::ExitPopupWidget;
use crate::widgets::header::HeaderWidget;
use crate::widgets::help::HelpWidget;
use crate::widgets::interests::InterestsWidget;
use crate::widgets::navigation::NavigationWidget;
use crate::widgets::projects::ProjectsWidget;
use crate::widgets::status_line::StatusLineWidget;
use crate::widgets::toast::ToastWidget;

/// An ephemeral advisory message with an auto-dismiss deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// The mounted section view.
///
/// Exactly one view exists at a time; list views carry their own selection,
/// so a selected index cannot outlive the view that owns it. Mounting is
/// assignment to this variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionView {
    About,
    Projects(ListSelection),
    Interests(ListSelection),
    Connect(ListSelection),
    Help,
}

impl SectionView {
    /// Which section this view renders.
    pub fn section(&self) -> Section {
        match self {
            Self::About => Section::Me,
            Self::Projects(_) => Section::Projects,
            Self::Interests(_) => Section::Diggin,
            Self::Connect(_) => Section::Connect,
            Self::Help => Section::Help,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut ListSelection> {
        match self {
            Self::Projects(sel) | Self::Interests(sel) | Self::Connect(sel) => Some(sel),
            Self::About | Self::Help => None,
        }
    }

    /// Selected index, for views that have one.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Projects(sel) | Self::Interests(sel) | Self::Connect(sel) => Some(sel.index()),
            Self::About | Self::Help => None,
        }
    }
}

/// The root application controller.
///
/// Owns the single source of truth for mode, command buffer, and the mounted
/// view. All intents from the dispatcher are routed here; the mounted view
/// is reached by direct method calls, not a global channel.
pub struct App {
    /// Portfolio content rendered by the section views
    pub content: SiteContent,
    /// Configuration
    pub config: AppConfig,
    /// Current input mode
    pub mode: Mode,
    /// In-progress command buffer, meaningful only in COMMAND mode
    pub command: String,
    /// The mounted section view
    view: SectionView,
    /// Display copy of the selected item's label (status line only; the
    /// authoritative index lives in the mounted view)
    pub selected_item: Option<String>,
    /// Transient status-line message
    pub status_message: Option<String>,
    /// Active toasts, newest last
    toasts: Vec<Toast>,
    /// Exit confirmation popup visible
    pub show_exit_confirm: bool,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Monochrome mode
    pub monochrome: bool,
}

impl App {
    pub fn new(content: SiteContent, config: AppConfig, monochrome: bool) -> Self {
        let mut app = Self {
            content,
            config,
            mode: Mode::Normal,
            command: String::new(),
            view: SectionView::About,
            selected_item: None,
            status_message: None,
            toasts: Vec::new(),
            show_exit_confirm: false,
            should_quit: false,
            monochrome,
        };
        app.report_selection();
        if app.config.display.startup_hint {
            app.toast(
                "Vim-style keys: h/l switch sections, j/k move in lists, :help for commands",
            );
        }
        app
    }

    /// The active section.
    pub fn section(&self) -> Section {
        self.view.section()
    }

    /// The mounted view.
    pub fn view(&self) -> &SectionView {
        &self.view
    }

    /// Mount the view for `section`: selection resets to 0 and the initial
    /// label is re-reported before this returns, so the status line is never
    /// stale when the next event arrives.
    pub fn set_section(&mut self, section: Section) {
        self.view = match section {
            Section::Me => SectionView::About,
            Section::Projects => SectionView::Projects(ListSelection::new(self.content.projects.len())),
            Section::Diggin => SectionView::Interests(ListSelection::new(self.content.interests.len())),
            Section::Connect => SectionView::Connect(ListSelection::new(self.content.links.len())),
            Section::Help => SectionView::Help,
        };
        debug!("mounted section {}", section.token());
        self.report_selection();
    }

    /// Label of the currently selected item in the mounted view.
    fn selected_label(&self) -> Option<String> {
        match &self.view {
            SectionView::Projects(sel) => {
                self.content.projects.get(sel.index()).map(|p| p.name.clone())
            }
            SectionView::Interests(sel) => {
                self.content.interests.get(sel.index()).map(|i| i.name.clone())
            }
            SectionView::Connect(sel) => {
                self.content.links.get(sel.index()).map(|l| l.label.clone())
            }
            SectionView::About | SectionView::Help => None,
        }
    }

    /// Activation target of the currently selected item, if it has one.
    fn activation_target(&self) -> Option<&str> {
        match &self.view {
            SectionView::Projects(sel) => self
                .content
                .projects
                .get(sel.index())
                .and_then(|p| p.demo.as_deref()),
            SectionView::Connect(sel) => {
                self.content.links.get(sel.index()).map(|l| l.href.as_str())
            }
            // Interests have no activation targets
            SectionView::Interests(_) | SectionView::About | SectionView::Help => None,
        }
    }

    fn report_selection(&mut self) {
        self.selected_item = self.selected_label();
    }

    /// Handle a terminal event.
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // The exit popup captures all keys while visible
            if self.show_exit_confirm {
                self.handle_exit_confirm_key(key);
                return;
            }

            let action = map_key_event(self.mode, key);

            // The status message lives until the next handled key; the arms
            // below may set a fresh one.
            if action != Action::None {
                self.status_message = None;
            }

            match action {
                Action::ForceQuit => {
                    self.should_quit = true;
                }
                Action::EnterCommand => {
                    self.mode = Mode::Command;
                    self.command.clear();
                }
                Action::EnterInsert => {
                    self.mode = Mode::Insert;
                }
                Action::Navigate(Direction::Left) => {
                    self.set_section(self.section().prev());
                }
                Action::Navigate(Direction::Right) => {
                    self.set_section(self.section().next());
                }
                Action::Navigate(Direction::Down) => {
                    if let Some(sel) = self.view.selection_mut() {
                        sel.move_down();
                        self.report_selection();
                    }
                }
                Action::Navigate(Direction::Up) => {
                    if let Some(sel) = self.view.selection_mut() {
                        sel.move_up();
                        self.report_selection();
                    }
                }
                Action::Select => {
                    self.activate_selection();
                }
                Action::SubmitCommand => {
                    let buffer = std::mem::take(&mut self.command);
                    self.execute_command(&buffer);
                }
                Action::CommandChar(c) => {
                    self.command.push(c);
                }
                Action::CommandBackspace => {
                    self.command.pop();
                }
                Action::Escape => {
                    self.escape();
                }
                Action::None => {}
            }
        }
    }

    fn handle_exit_confirm_key(&mut self, key: KeyEvent) {
        // Ctrl+C stays a hard quit even while the popup is up
        if let Action::ForceQuit = map_key_event(self.mode, key) {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.show_exit_confirm = false;
            }
            _ => {}
        }
    }

    /// Force NORMAL mode and clear transient state.
    pub fn escape(&mut self) {
        self.mode = Mode::Normal;
        self.command.clear();
        self.show_exit_confirm = false;
    }

    /// Run a command through the interpreter.
    ///
    /// Typed `:` commands and programmatic section requests share this path.
    /// Regardless of recognition, mode returns to NORMAL and the buffer is
    /// cleared.
    pub fn execute_command(&mut self, buffer: &str) {
        debug!("execute command {buffer:?}");
        match command::interpret(buffer) {
            CmdAction::Quit => {
                self.show_exit_confirm = true;
            }
            CmdAction::SaveHint => {
                self.toast("Nothing to write — this portfolio is read-only");
            }
            CmdAction::Goto(section) => {
                self.set_section(section);
            }
            CmdAction::Nop => {}
        }
        self.mode = Mode::Normal;
        self.command.clear();
    }

    /// Activate the current selection: hand its target to the clipboard.
    /// Items without a target, and views without items, are silent no-ops.
    fn activate_selection(&mut self) {
        let Some(href) = self.activation_target().map(str::to_string) else {
            return;
        };
        match crate::clipboard::copy_link(&href) {
            Ok(()) => {
                self.status_message = Some(format!("Copied {href} to clipboard"));
            }
            Err(e) => {
                self.status_message = Some(format!("Copy failed: {e}"));
            }
        }
    }

    /// Show an ephemeral toast.
    pub fn toast(&mut self, message: &str) {
        let ttl = Duration::from_millis(self.config.display.toast_duration_ms);
        self.toasts.push(Toast {
            message: message.to_string(),
            expires_at: Instant::now() + ttl,
        });
    }

    /// Active (unexpired) toasts.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Periodic housekeeping between events: drop expired toasts.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Render the application UI.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let command_height = if self.mode == Mode::Command { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(1),              // header
                Constraint::Length(3),              // navigation tabs
                Constraint::Min(3),                 // section pane
                Constraint::Length(1),              // status line
                Constraint::Length(command_height), // command line
            ])
            .split(area);

        frame.render_widget(
            HeaderWidget {
                monochrome: self.monochrome,
            },
            chunks[0],
        );

        frame.render_widget(
            NavigationWidget {
                active: self.section(),
                monochrome: self.monochrome,
            },
            chunks[1],
        );

        self.render_section(frame, chunks[2]);

        frame.render_widget(
            StatusLineWidget {
                mode: self.mode.label(),
                section: self.section().token(),
                selected_item: self.selected_item.as_deref(),
                message: self.status_message.as_deref(),
                monochrome: self.monochrome,
            },
            chunks[3],
        );

        if self.mode == Mode::Command {
            let widget = CommandLineWidget {
                command: &self.command,
            };
            let cursor_x = widget.cursor_x(chunks[4]);
            frame.render_widget(widget, chunks[4]);
            frame.set_cursor_position((cursor_x, chunks[4].y));
        }

        if let Some(toast) = self.toasts.last() {
            frame.render_widget(
                ToastWidget {
                    message: &toast.message,
                },
                area,
            );
        }

        if self.show_exit_confirm {
            frame.render_widget(ExitPopupWidget, area);
        }
    }

    fn render_section(&self, frame: &mut Frame, area: Rect) {
        match &self.view {
            SectionView::About => {
                frame.render_widget(
                    AboutWidget {
                        profile: &self.content.profile,
                        mode: self.mode,
                        monochrome: self.monochrome,
                    },
                    area,
                );
            }
            SectionView::Projects(sel) => {
                frame.render_widget(
                    ProjectsWidget {
                        projects: &self.content.projects,
                        selected: sel.index(),
                        mode: self.mode,
                        monochrome: self.monochrome,
                    },
                    area,
                );
            }
            SectionView::Interests(sel) => {
                frame.render_widget(
                    InterestsWidget {
                        interests: &self.content.interests,
                        selected: sel.index(),
                        mode: self.mode,
                        monochrome: self.monochrome,
                    },
                    area,
                );
            }
            SectionView::Connect(sel) => {
                frame.render_widget(
                    ConnectWidget {
                        links: &self.content.links,
                        selected: sel.index(),
                        mode: self.mode,
                        monochrome: self.monochrome,
                    },
                    area,
                );
            }
            SectionView::Help => {
                frame.render_widget(
                    HelpWidget {
                        monochrome: self.monochrome,
                    },
                    area,
                );
            }
        }
    }
}
