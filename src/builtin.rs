use crate::command::{CommandFactory, ExecutableCommand};
use crate::i18n::{Text, tr};
use crate::interpreter::Factory;
use crate::session::Session;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::Write;

/// Static listing printed by `ls`.
pub const LISTING: &str = "Documents  Downloads  secrets.txt  config.conf  malware_analysis.log";

/// The only file `cat` can read.
pub const SECRET_FILE: &str = "secrets.txt";

/// Contents of [`SECRET_FILE`].
pub const FLAG: &str = "FLAG{L1NUX_M4ST3R_2024}";

/// Fake interface address reported by `ip addr`.
pub const INTERFACE: &str = "eth0: 192.168.1.42/24";

/// Format of the `date` output, e.g. `Sun Oct 18 2026 14:03:12 GMT+0300`.
pub const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Built-in commands known to the terminal at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed directly
/// against the session. None of them touch the real system. Arguments always follow
/// a `--`, so words like `-la` or `help` reach the command as plain positionals.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "echo" or "cat".
    fn name() -> &'static str;

    /// Executes the command, writing its single output line to `stdout`.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        match <T as BuiltinCommand>::execute(*self, stdout, session) {
            Ok(()) => Ok(()),
            Err(e) => {
                stdout.write_all(e.to_string().as_bytes())?;
                Ok(())
            }
        }
    }
}

/// Usage text or parse error reported by argh in place of running the command.
struct InvalidArgs {
    output: String,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        stdout.write_all(self.output.as_bytes())?;
        Ok(())
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(
        &self,
        _session: &Session,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name != T::name() {
            return None;
        }
        let mut literal = Vec::with_capacity(args.len() + 1);
        literal.push("--");
        literal.extend_from_slice(args);
        Some(match T::from_args(&[name], &literal) {
            Ok(cmd) => Box::new(cmd),
            Err(EarlyExit { output, .. }) => Box::new(InvalidArgs { output }),
        })
    }
}

#[derive(FromArgs)]
/// List the commands available in the lab terminal.
pub struct Help {
    #[argh(positional, greedy)]
    /// ignored.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        writeln!(stdout, "{}", tr(Text::TerminalHelp, session.language))?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// List directory contents.
pub struct Ls {
    #[argh(positional, greedy)]
    /// ignored; the listing is always the same.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Ls {
    fn name() -> &'static str {
        "ls"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        writeln!(stdout, "{LISTING}")?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Print the current working directory to standard output.
pub struct Pwd {
    #[argh(positional, greedy)]
    /// ignored.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Pwd {
    fn name() -> &'static str {
        "pwd"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        writeln!(stdout, "{}", session.absolute_path())?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Print the effective user name.
pub struct Whoami {
    #[argh(positional, greedy)]
    /// ignored.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Whoami {
    fn name() -> &'static str {
        "whoami"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        writeln!(stdout, "root")?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Clear the terminal screen.
pub struct Clear {
    #[argh(positional, greedy)]
    /// ignored.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Clear {
    fn name() -> &'static str {
        "clear"
    }

    fn execute(self, _stdout: &mut dyn Write, session: &mut Session) -> Result<()> {
        session.clear_requested = true;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Write the arguments to standard output, separated by spaces.
pub struct Echo {
    #[argh(positional, greedy)]
    /// values to print as-is, separated by spaces.
    pub args: Vec<String>,
}

impl BuiltinCommand for Echo {
    fn name() -> &'static str {
        "echo"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        writeln!(stdout, "{}", self.args.join(" "))?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Print a file to standard output.
pub struct Cat {
    #[argh(positional, greedy)]
    /// file to print; only the first one is read.
    pub files: Vec<String>,
}

impl BuiltinCommand for Cat {
    fn name() -> &'static str {
        "cat"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        match self.files.first().map(String::as_str) {
            Some(SECRET_FILE) => writeln!(stdout, "{FLAG}")?,
            Some(file) => writeln!(stdout, "cat: {file}: Permission denied")?,
            None => writeln!(stdout, "usage: cat [file]")?,
        }
        Ok(())
    }
}

#[derive(FromArgs)]
/// Print the current date and time.
pub struct Date {
    #[argh(positional, greedy)]
    /// ignored.
    pub ignored: Vec<String>,
}

impl BuiltinCommand for Date {
    fn name() -> &'static str {
        "date"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        writeln!(stdout, "{}", chrono::Local::now().format(DATE_FORMAT))?;
        Ok(())
    }
}

#[derive(FromArgs)]
/// Show network interface configuration.
pub struct Ip {
    #[argh(positional, greedy)]
    /// object to show; only `addr` is supported.
    pub args: Vec<String>,
}

impl BuiltinCommand for Ip {
    fn name() -> &'static str {
        "ip"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        if self.args.first().is_some_and(|obj| obj == "addr") {
            writeln!(stdout, "{INTERFACE}")?;
        } else {
            writeln!(stdout, "Usage: ip addr")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;

    fn run<T: BuiltinCommand>(cmd: T, session: &mut Session) -> String {
        let mut out = Vec::new();
        BuiltinCommand::execute(cmd, &mut out, session).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_help_is_localized() {
        let mut session = Session::new(Language::En);
        let s = run(Help { ignored: vec![] }, &mut session);
        assert_eq!(
            s,
            "Available commands: help, ls, pwd, whoami, clear, echo, cat, date, ip\n"
        );

        session.language = Language::He;
        let s = run(Help { ignored: vec![] }, &mut session);
        assert!(s.starts_with("פקודות זמינות:"));
    }

    #[test]
    fn test_pwd_expands_home() {
        let mut session = Session::default();
        assert_eq!(run(Pwd { ignored: vec![] }, &mut session), "/home/user\n");
    }

    #[test]
    fn test_echo_joins_with_single_spaces() {
        let mut session = Session::default();
        let s = run(
            Echo {
                args: strings(&["a", "b", "c"]),
            },
            &mut session,
        );
        assert_eq!(s, "a b c\n");

        let s = run(Echo { args: vec![] }, &mut session);
        assert_eq!(s, "\n");
    }

    #[test]
    fn test_cat_variants() {
        let mut session = Session::default();
        let s = run(
            Cat {
                files: strings(&["secrets.txt"]),
            },
            &mut session,
        );
        assert_eq!(s, "FLAG{L1NUX_M4ST3R_2024}\n");

        let s = run(
            Cat {
                files: strings(&["nope.txt"]),
            },
            &mut session,
        );
        assert_eq!(s, "cat: nope.txt: Permission denied\n");

        let s = run(Cat { files: vec![] }, &mut session);
        assert_eq!(s, "usage: cat [file]\n");
    }

    #[test]
    fn test_ip_only_supports_addr() {
        let mut session = Session::default();
        let s = run(
            Ip {
                args: strings(&["addr"]),
            },
            &mut session,
        );
        assert_eq!(s, "eth0: 192.168.1.42/24\n");

        let s = run(
            Ip {
                args: strings(&["route"]),
            },
            &mut session,
        );
        assert_eq!(s, "Usage: ip addr\n");

        let s = run(Ip { args: vec![] }, &mut session);
        assert_eq!(s, "Usage: ip addr\n");
    }

    #[test]
    fn test_clear_sets_flag_without_output() {
        let mut session = Session::default();
        let s = run(Clear { ignored: vec![] }, &mut session);
        assert!(s.is_empty());
        assert!(session.clear_requested);
    }

    #[test]
    fn test_date_matches_format() {
        let mut session = Session::default();
        let s = run(Date { ignored: vec![] }, &mut session);
        let re = regex::Regex::new(
            r"^[A-Z][a-z]{2} [A-Z][a-z]{2} \d{2} \d{4} \d{2}:\d{2}:\d{2} GMT[+-]\d{4}\n$",
        )
        .unwrap();
        assert!(re.is_match(&s), "unexpected date output: {s:?}");
    }

    #[test]
    fn test_factory_parses_verbatim_args() {
        let factory = Factory::<Echo>::default();
        let session = Session::default();
        let cmd = factory
            .try_create(&session, "echo", &["-n", "--help"])
            .expect("echo is recognized");

        let mut out = Vec::new();
        let mut session = Session::default();
        cmd.execute(&mut out, &mut session).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-n --help\n");
    }

    #[test]
    fn test_factory_ignores_other_names() {
        let factory = Factory::<Ls>::default();
        assert!(factory.try_create(&Session::default(), "dir", &[]).is_none());
    }

    #[test]
    fn test_factory_passes_help_words_as_arguments() {
        let session = Session::default();
        let cases: [&[&str]; 3] = [&["--help"], &["help"], &["-la", "/tmp"]];
        for args in cases {
            let cmd = Factory::<Ls>::default()
                .try_create(&session, "ls", args)
                .unwrap();
            let mut out = Vec::new();
            let mut session = Session::default();
            cmd.execute(&mut out, &mut session).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), format!("{LISTING}\n"));
        }
    }

    #[test]
    fn test_cat_treats_flags_as_file_names() {
        let factory = Factory::<Cat>::default();
        let session = Session::default();
        let cmd = factory.try_create(&session, "cat", &["-v"]).unwrap();

        let mut out = Vec::new();
        let mut session = Session::default();
        cmd.execute(&mut out, &mut session).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cat: -v: Permission denied\n"
        );
    }
}
