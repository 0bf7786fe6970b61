//! Display language selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the assessment card is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(alias = "english", alias = "en")]
    English,

    #[serde(alias = "hindi", alias = "hi")]
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// Name of the language written in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
        }
    }

    /// The other language
    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Hindi => write!(f, "Hindi"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert_eq!("hi".parse::<Language>(), Ok(Language::Hindi));
        assert_eq!(" HINDI ".parse::<Language>(), Ok(Language::Hindi));
        assert!("tamil".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Language::English.toggled(), Language::Hindi);
        assert_eq!(Language::Hindi.toggled(), Language::English);
    }

    #[test]
    fn test_serde_accepts_payload_names() {
        let lang: Language = serde_json::from_str("\"Hindi\"").unwrap();
        assert_eq!(lang, Language::Hindi);
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
