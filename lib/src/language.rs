use std::fmt::{Display, Formatter};

/// The two supported document languages.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Language {
    English,
    Russian,
}

impl Language {
    /// Parses the two-value selector (`en` | `ru`). Anything else is
    /// rejected before the pipeline is built.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
