use crate::modes::Mode;

pub mod about;
pub mod command_line;
pub mod connect;
pub mod exit_popup;
pub mod header;
pub mod help;
pub mod interests;
pub mod navigation;
pub mod projects;
pub mod status_line;
pub mod toast;

/// Footer hint shown at the bottom of every section pane. The NORMAL-mode
/// text varies per section; the other modes share one line.
pub(crate) fn mode_hint(mode: Mode, normal: &'static str) -> &'static str {
    match mode {
        Mode::Normal => normal,
        Mode::Insert => "Press ESC to return to normal mode",
        Mode::Command => "Enter command",
    }
}
