//! Supported UI languages.

use serde::{Deserialize, Serialize};

/// A language the translation dictionaries cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Th,
}

impl Language {
    /// All languages in switcher order.
    pub const ALL: [Language; 3] = [Language::En, Language::Zh, Language::Th];

    /// Parse a stored language code. Only exact codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            "th" => Some(Self::Th),
            _ => None,
        }
    }

    /// Code persisted under the `lang` storage key.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
            Self::Th => "th",
        }
    }

    /// Native label shown in the language switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Zh => "中文",
            Self::Th => "ไทย",
        }
    }

    /// Next language in the cycle en -> zh -> th -> en.
    pub fn next(&self) -> Self {
        match self {
            Self::En => Self::Zh,
            Self::Zh => Self::Th,
            Self::Th => Self::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown_and_case_variants() {
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("ja"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_cycle_returns_to_start() {
        assert_eq!(Language::En.next(), Language::Zh);
        assert_eq!(Language::Zh.next(), Language::Th);
        assert_eq!(Language::Th.next(), Language::En);
    }
}
