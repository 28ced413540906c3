use std::fmt;
use std::str::FromStr;

/// Visual variant of the single-page quiz; the flow is identical in each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Classic,
    Neon,
    Minimal,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Neon, Theme::Minimal];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Neon => "neon",
            Theme::Minimal => "minimal",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Classic => "theme-classic",
            Theme::Neon => "theme-neon",
            Theme::Minimal => "theme-minimal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| format!("unknown theme {s:?} (expected classic, neon or minimal)"))
    }
}
