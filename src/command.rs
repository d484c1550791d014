use crate::sections::Section;

/// Effect of a submitted `:` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdAction {
    /// `:q` / `:quit` — ask for exit confirmation
    Quit,
    /// `:w` — nothing to write; show a hint toast instead
    SaveHint,
    /// A section token — switch the active section
    Goto(Section),
    /// Anything else — silently do nothing
    Nop,
}

/// Interpret a submitted command buffer.
///
/// Matching is on the trimmed, lowercased buffer. Unrecognized input is a
/// no-op, never an error; the caller returns to NORMAL mode and clears the
/// buffer unconditionally either way.
pub fn interpret(buffer: &str) -> CmdAction {
    let cmd = buffer.trim().to_lowercase();
    match cmd.as_str() {
        "q" | "quit" => CmdAction::Quit,
        "w" => CmdAction::SaveHint,
        other => match Section::parse(other) {
            Some(section) => CmdAction::Goto(section),
            None => CmdAction::Nop,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_forms() {
        assert_eq!(interpret("q"), CmdAction::Quit);
        assert_eq!(interpret("quit"), CmdAction::Quit);
        assert_eq!(interpret("  QUIT "), CmdAction::Quit);
    }

    #[test]
    fn save_hint() {
        assert_eq!(interpret("w"), CmdAction::SaveHint);
    }

    #[test]
    fn section_tokens() {
        assert_eq!(interpret("projects"), CmdAction::Goto(Section::Projects));
        assert_eq!(interpret("DIGGIN"), CmdAction::Goto(Section::Diggin));
        assert_eq!(interpret(" connect"), CmdAction::Goto(Section::Connect));
    }

    #[test]
    fn unrecognized_is_nop() {
        assert_eq!(interpret("foobar"), CmdAction::Nop);
        assert_eq!(interpret(""), CmdAction::Nop);
        assert_eq!(interpret("wq"), CmdAction::Nop);
    }
}
