/// The fixed, ordered set of top-level sections.
///
/// The registry is immutable for the process lifetime; the active section is
/// a single value held by the root controller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    #[default]
    Me,
    Projects,
    Diggin,
    Connect,
    Help,
}

impl Section {
    /// All sections in display/navigation order.
    pub const ALL: [Section; 5] = [
        Self::Me,
        Self::Projects,
        Self::Diggin,
        Self::Connect,
        Self::Help,
    ];

    /// The command token for this section (`:projects` etc.).
    pub fn token(&self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Projects => "projects",
            Self::Diggin => "diggin",
            Self::Connect => "connect",
            Self::Help => "help",
        }
    }

    /// Parse a section token. Case is the caller's concern; the command
    /// interpreter lowercases before matching.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|sec| sec.token() == s)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section, wrapping at the end.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping at the start.
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matches_tokens() {
        let tokens: Vec<&str> = Section::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(tokens, ["me", "projects", "diggin", "connect", "help"]);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Section::Me.prev(), Section::Help);
        assert_eq!(Section::Help.next(), Section::Me);
        assert_eq!(Section::Me.next(), Section::Projects);
        assert_eq!(Section::Connect.prev(), Section::Diggin);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut s = Section::Me;
        for _ in 0..Section::ALL.len() {
            s = s.next();
        }
        assert_eq!(s, Section::Me);
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Section::parse("diggin"), Some(Section::Diggin));
        assert_eq!(Section::parse("help"), Some(Section::Help));
        assert_eq!(Section::parse("about"), None);
        assert_eq!(Section::parse(""), None);
    }
}
