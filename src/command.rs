use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Object-safe trait for any command that the mock terminal can run.
///
/// This is implemented by built-ins via a blanket impl and by closure handlers
/// registered with [`handler`].
pub trait ExecutableCommand {
    /// Runs the command, writing its output text to `stdout`.
    ///
    /// Writing nothing means the command produced no output line.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<()>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
/// The interpreter asks each registered factory in order, so the first match wins.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        session: &Session,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}

/// Registers a plain function as a command.
///
/// The handler receives the arguments and a read-only view of the session and returns
/// the output text. Handy for extending the terminal without a dedicated type.
///
/// ```
/// use cyberlab::CommandInterpreter;
/// use cyberlab::command::handler;
///
/// let mut term = CommandInterpreter::default();
/// term.register(handler("uname", |_args, _session| "Linux".to_string()));
/// let run = term.execute("uname");
/// assert_eq!(run.output(), Some("Linux"));
/// ```
pub fn handler<F>(name: &'static str, f: F) -> Box<dyn CommandFactory>
where
    F: Fn(&[&str], &Session) -> String + 'static,
{
    Box::new(Handler { name, f })
}

struct Handler<F> {
    name: &'static str,
    f: F,
}

struct Prepared {
    text: String,
}

impl ExecutableCommand for Prepared {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _session: &mut Session) -> Result<()> {
        writeln!(stdout, "{}", self.text)?;
        Ok(())
    }
}

impl<F> CommandFactory for Handler<F>
where
    F: Fn(&[&str], &Session) -> String,
{
    fn try_create(
        &self,
        session: &Session,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        (name == self.name).then(|| {
            Box::new(Prepared {
                text: (self.f)(args, session),
            }) as Box<dyn ExecutableCommand>
        })
    }
}
