use crate::lang::Language;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable selecting the interface language.
pub const LANG_VAR: &str = "CYBERLAB_LANG";

/// Environment variable pointing at a TOML question bank.
pub const QUIZ_BANK_VAR: &str = "CYBERLAB_QUIZ_BANK";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Resolved runtime settings.
///
/// Command-line flags take precedence over environment variables, which take
/// precedence over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub language: Language,
    /// Question bank to use instead of the built-in one.
    pub quiz_bank: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let language = match lookup(LANG_VAR) {
            Some(value) if !value.trim().is_empty() => {
                value
                    .parse::<Language>()
                    .map_err(|reason| ConfigError::InvalidVar {
                        var: LANG_VAR,
                        reason,
                    })?
            }
            _ => Language::default(),
        };
        let quiz_bank = lookup(QUIZ_BANK_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            language,
            quiz_bank,
        })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, language: Option<Language>, quiz_bank: Option<PathBuf>) -> Self {
        if let Some(language) = language {
            self.language = language;
        }
        if quiz_bank.is_some() {
            self.quiz_bank = quiz_bank;
        }
        self
    }
}
