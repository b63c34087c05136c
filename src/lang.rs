use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Display language of a training session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English, the default.
    #[default]
    En,
    /// Hebrew.
    He,
}

impl Language {
    /// Short language code, as accepted by [`Language::from_str`].
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::He => "he",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "he" | "hebrew" => Ok(Language::He),
            other => Err(format!("unsupported language: {other} (expected `en` or `he`)")),
        }
    }
}

/// A piece of text available in every supported [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Localized {
    pub en: String,
    pub he: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, he: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            he: he.into(),
        }
    }

    /// Same text in both languages, used for proper names like "Vishing".
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            he: text,
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::He => &self.he,
        }
    }
}
