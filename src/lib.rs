//! folio — a vim-flavored terminal portfolio.
//!
//! A full-screen TUI with modal keybindings: NORMAL mode navigates sections
//! (h/l) and list items (j/k), `:` opens a command line, `i` suspends key
//! interception. The root [`app::App`] owns the mode, the command buffer,
//! and the single mounted section view.

pub mod app;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod content;
pub mod keys;
pub mod modes;
pub mod sections;
pub mod selection;
pub mod widgets;
