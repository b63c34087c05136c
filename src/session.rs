use crate::lang::Language;

/// Home directory marker used for the terminal's working directory.
pub const HOME_MARKER: &str = "~";

/// Directory the home marker stands for.
pub const HOME_DIR: &str = "/home/user";

/// Mutable, user-level view of a mock terminal session.
///
/// The session contains:
/// - `current_path`: the displayed working directory, starting at [`HOME_MARKER`].
/// - `language`: the language used for localized command output.
/// - `clear_requested`: a flag set by `clear` that the interpreter consumes to wipe history.
///
/// Fields are public so commands can read and update them directly.
#[derive(Debug, Clone)]
pub struct Session {
    /// The working directory shown in the prompt and reported by `pwd`.
    pub current_path: String,
    /// Language for localized command output.
    pub language: Language,
    /// When set to true, the interpreter empties its history after the current command.
    pub clear_requested: bool,
}

impl Session {
    /// Start a new session in the home directory.
    pub fn new(language: Language) -> Self {
        Self {
            current_path: HOME_MARKER.to_string(),
            language,
            clear_requested: false,
        }
    }

    /// Absolute form of `current_path`, with a leading home marker expanded.
    ///
    /// Paths without the marker are appended to [`HOME_DIR`] as-is.
    pub fn absolute_path(&self) -> String {
        let rest = self
            .current_path
            .strip_prefix(HOME_MARKER)
            .unwrap_or(&self.current_path);
        format!("{HOME_DIR}{rest}")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
