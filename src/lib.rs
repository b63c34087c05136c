//! Core of a bilingual (English/Hebrew) cybersecurity training lab.
//!
//! The crate provides two small, single-threaded state machines that a front-end
//! drives directly:
//!
//! - [`CommandInterpreter`], a cosmetic Linux terminal that answers a fixed set of
//!   commands (`help`, `ls`, `pwd`, `whoami`, `clear`, `echo`, `cat`, `date`, `ip`)
//!   from static data and keeps the terminal history.
//! - [`QuizSession`], a linear multiple-choice quiz with immediate feedback and a
//!   running score.
//!
//! Around them sit the static training content ([`content`]), a flashcard [`deck`],
//! the course browser and search ([`catalog`]) and the interface strings ([`i18n`]).
//! Nothing executes real programs, touches the network or persists state.

mod builtin;
pub mod catalog;
pub mod command;
pub mod config;
pub mod content;
pub mod deck;
pub mod history;
pub mod i18n;
mod interpreter;
mod io_adapters;
pub mod lang;
pub mod quiz;
pub mod session;

pub use builtin::{DATE_FORMAT, FLAG, INTERFACE, LISTING, SECRET_FILE};
/// Just a convenient re-export of the terminal interpreter.
///
/// See [`CommandInterpreter`] for the high-level API and examples.
pub use interpreter::{BANNER, CommandInterpreter, Execution};
pub use lang::{Language, Localized};
pub use quiz::{QuizError, QuizSession};
