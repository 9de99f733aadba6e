//! Display languages and bilingual text.

use serde::{Deserialize, Serialize};

/// A language in which names and descriptions are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    English,
    /// Amharic.
    Amharic,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "am" | "amharic" => Ok(Language::Amharic),
            other => Err(format!("unknown language '{other}'")),
        }
    }
}

/// A piece of text given in both English and Amharic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English text.
    pub english: String,
    /// Amharic text.
    pub amharic: String,
}

impl LocalizedText {
    /// Build from both renderings.
    pub fn new(english: impl Into<String>, amharic: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            amharic: amharic.into(),
        }
    }

    /// The text in `lang`.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.english,
            Language::Amharic => &self.amharic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_language() {
        assert_eq!("am".parse::<Language>(), Ok(Language::Amharic));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn localized_get() {
        let t = LocalizedText::new("Meskel", "መስቀል");
        assert_eq!(t.get(Language::English), "Meskel");
        assert_eq!(t.get(Language::Amharic), "መስቀል");
    }
}
