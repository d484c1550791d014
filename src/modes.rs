/// Input modes — determine how the dispatcher interprets keystrokes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default: bare keys navigate sections and list items
    #[default]
    Normal,
    /// Typing into the `:` command line
    Command,
    /// Key interception suspended; only Escape is handled
    Insert,
}

impl Mode {
    /// Status-line label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Command => "COMMAND",
            Self::Insert => "INSERT",
        }
    }
}
