use std::fmt;

/// One line shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLine {
    /// A command typed by the user, with the working directory it was typed in.
    Input { text: String, path: String },
    /// Text produced by a command.
    Output { text: String },
}

impl TerminalLine {
    pub fn input(text: impl Into<String>, path: impl Into<String>) -> Self {
        TerminalLine::Input {
            text: text.into(),
            path: path.into(),
        }
    }

    pub fn output(text: impl Into<String>) -> Self {
        TerminalLine::Output { text: text.into() }
    }

    pub fn text(&self) -> &str {
        match self {
            TerminalLine::Input { text, .. } | TerminalLine::Output { text } => text,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, TerminalLine::Input { .. })
    }
}

impl fmt::Display for TerminalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalLine::Input { text, path } => write!(f, "root@kali:{path}# {text}"),
            TerminalLine::Output { text } => f.write_str(text),
        }
    }
}

/// Append-only log of terminal lines. Only [`History::clear`] removes anything.
#[derive(Debug, Clone, Default)]
pub struct History {
    lines: Vec<TerminalLine>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TerminalLine) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&TerminalLine> {
        self.lines.last()
    }
}
