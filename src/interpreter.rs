use crate::command::CommandFactory;
use crate::history::{History, TerminalLine};
use crate::i18n::{Text, tr};
use crate::io_adapters::MemWriter;
use crate::lang::Language;
use crate::session::Session;
use tracing::{debug, warn};

/// Boot banner shown when a lab terminal opens.
pub const BANNER: [&str; 2] = [
    "CyberGuard Linux Kernel v4.2.0-generic",
    "Initializing secure connection... OK",
];

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate, see `BuiltinCommand`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// What a single [`CommandInterpreter::execute`] call did to the history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Lines appended to history, input first.
    pub appended_lines: Vec<TerminalLine>,
    /// True when the command wiped the history (`clear`).
    pub history_cleared: bool,
}

impl Execution {
    /// Text of the output line, if the command produced one.
    pub fn output(&self) -> Option<&str> {
        self.appended_lines
            .iter()
            .find(|line| !line.is_input())
            .map(TerminalLine::text)
    }
}

/// A mock terminal that interprets one line at a time.
///
/// The interpreter maintains a [`Session`], the terminal [`History`] and a list of
/// [`CommandFactory`] objects that are queried to create commands by name. See
/// [`Default`] for the built-in commands included out of the box.
///
/// Nothing here runs real programs or touches the filesystem; every command answers
/// from static data.
///
/// Example
/// ```
/// use cyberlab::CommandInterpreter;
/// let mut term = CommandInterpreter::default();
/// let run = term.execute("echo hello world");
/// assert_eq!(run.output(), Some("hello world"));
/// assert_eq!(term.history().len(), 2);
/// ```
pub struct CommandInterpreter {
    session: Session,
    history: History,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl CommandInterpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(language: Language, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            session: Session::new(language),
            history: History::new(),
            commands,
        }
    }

    /// Interpreter with the default commands and the boot banner already in history.
    pub fn with_banner(language: Language) -> Self {
        let mut term = Self::default();
        term.session.language = language;
        for line in BANNER {
            term.history.push(TerminalLine::output(line));
        }
        term.history
            .push(TerminalLine::output(tr(Text::TerminalHint, language)));
        term
    }

    /// Add another command factory. Earlier factories win on name clashes.
    pub fn register(&mut self, factory: Box<dyn CommandFactory>) {
        self.commands.push(factory);
    }

    /// Interpret one raw input line.
    ///
    /// The line is split on whitespace; the first word, lowercased, picks the command.
    /// The input line is recorded before its output. Blank input is recorded with no
    /// output, and `clear` empties the history without recording anything.
    /// Unknown commands produce a "command not found" line rather than an error.
    pub fn execute(&mut self, raw_line: &str) -> Execution {
        let raw_line = raw_line.trim_end_matches(['\n', '\r']);
        let input = TerminalLine::input(raw_line, self.session.current_path.clone());
        let tokens: Vec<&str> = raw_line.split_whitespace().collect();

        let mut appended_lines = vec![input];
        if let Some((first, args)) = tokens.split_first() {
            let name = first.to_lowercase();
            debug!(command = %name, args = args.len(), "executing");
            let output = self.run(&name, args);

            if std::mem::take(&mut self.session.clear_requested) {
                debug!("history cleared");
                self.history.clear();
                return Execution {
                    appended_lines: Vec::new(),
                    history_cleared: true,
                };
            }
            appended_lines.extend(output.map(TerminalLine::output));
        }

        for line in &appended_lines {
            self.history.push(line.clone());
        }
        Execution {
            appended_lines,
            history_cleared: false,
        }
    }

    fn run(&mut self, name: &str, args: &[&str]) -> Option<String> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&self.session, name, args) {
                let mut stdout = MemWriter::new();
                return match cmd.execute(&mut stdout, &mut self.session) {
                    Ok(()) => stdout.into_line(),
                    Err(e) => {
                        warn!(command = name, error = %e, "command failed");
                        Some(e.to_string())
                    }
                };
            }
        }
        Some(format!(
            "{}: {}",
            tr(Text::CommandNotFound, self.session.language),
            name
        ))
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.session.language
    }

    /// Switch the language used for localized output from now on.
    pub fn set_language(&mut self, language: Language) {
        self.session.language = language;
    }

    /// Prompt for the next input line, e.g. `root@kali:~#`.
    pub fn prompt(&self) -> String {
        format!("root@kali:{}#", self.session.current_path)
    }
}

impl Default for CommandInterpreter {
    /// Create an interpreter with the default set of commands:
    /// `help`, `ls`, `pwd`, `whoami`, `clear`, `echo`, `cat`, `date` and `ip`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(
            Language::default(),
            vec![
                Box::new(Factory::<Help>::default()),
                Box::new(Factory::<Ls>::default()),
                Box::new(Factory::<Pwd>::default()),
                Box::new(Factory::<Whoami>::default()),
                Box::new(Factory::<Clear>::default()),
                Box::new(Factory::<Echo>::default()),
                Box::new(Factory::<Cat>::default()),
                Box::new(Factory::<Date>::default()),
                Box::new(Factory::<Ip>::default()),
            ],
        )
    }
}
