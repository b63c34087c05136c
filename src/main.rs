use anyhow::{Context, Result};
use argh::FromArgs;
use cyberlab::catalog::{Catalog, CourseBrowser, HitKind};
use cyberlab::config::Settings;
use cyberlab::content::{DomainStatus, QuestionBank};
use cyberlab::deck::Deck;
use cyberlab::i18n::{Text, tr};
use cyberlab::quiz::{Progress, QuizStatus, Submission};
use cyberlab::{CommandInterpreter, Language, QuizSession};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Bilingual cybersecurity training lab.
struct Cli {
    #[argh(option)]
    /// interface language, `en` or `he`; defaults to $CYBERLAB_LANG, then `en`.
    lang: Option<Language>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Terminal(TerminalArgs),
    Quiz(QuizArgs),
    Cards(CardsArgs),
    Courses(CoursesArgs),
    Domains(DomainsArgs),
    Search(SearchArgs),
}

#[derive(FromArgs)]
#[argh(subcommand, name = "terminal")]
/// Open the mock lab terminal.
struct TerminalArgs {}

#[derive(FromArgs)]
#[argh(subcommand, name = "quiz")]
/// Take the practice quiz.
struct QuizArgs {
    #[argh(option)]
    /// TOML question bank to use instead of the built-in questions.
    bank: Option<PathBuf>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "cards")]
/// Review flashcards.
struct CardsArgs {}

#[derive(FromArgs)]
#[argh(subcommand, name = "courses")]
/// List courses or browse the lessons of one.
struct CoursesArgs {
    #[argh(option)]
    /// id of the course to open, e.g. `sec-plus`.
    course: Option<String>,
}

#[derive(FromArgs)]
#[argh(subcommand, name = "domains")]
/// Show exam domain progress.
struct DomainsArgs {}

#[derive(FromArgs)]
#[argh(subcommand, name = "search")]
/// Search concepts, domains and lessons.
struct SearchArgs {
    #[argh(positional)]
    /// case-insensitive regular expression.
    pattern: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli: Cli = argh::from_env();

    let bank = match &cli.command {
        Command::Quiz(args) => args.bank.clone(),
        _ => None,
    };
    let settings = Settings::from_env()?.with_overrides(cli.lang, bank);
    tracing::debug!(?settings, "starting");

    match cli.command {
        Command::Terminal(_) => run_terminal(&settings),
        Command::Quiz(_) => run_quiz(&settings),
        Command::Cards(_) => run_cards(&settings),
        Command::Courses(args) => run_courses(&settings, args.course.as_deref()),
        Command::Domains(_) => {
            show_domains(settings.language);
            Ok(())
        }
        Command::Search(args) => run_search(&settings, &args.pattern),
    }
}

/// Reads one line; `None` on Ctrl-C or Ctrl-D.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn run_terminal(settings: &Settings) -> Result<()> {
    let mut term = CommandInterpreter::with_banner(settings.language);
    println!("== {} ==", tr(Text::LabEnvironment, settings.language));
    for line in term.history().lines() {
        println!("{line}");
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        let prompt = format!("{} ", term.prompt());
        let Some(line) = read_line(&mut rl, &prompt)? else {
            break;
        };
        if line.trim() == "exit" {
            break;
        }
        let run = term.execute(&line);
        if run.history_cleared {
            print!("\x1B[2J\x1B[1;1H");
            continue;
        }
        if let Some(text) = run.output() {
            println!("{text}");
        }
    }
    Ok(())
}

fn run_quiz(settings: &Settings) -> Result<()> {
    let lang = settings.language;
    let bank = match &settings.quiz_bank {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("can't use question bank {}", path.display()))?,
        None => QuestionBank::builtin(),
    };
    let mut quiz = QuizSession::new(bank.questions)?;
    let mut rl = DefaultEditor::new()?;

    loop {
        if quiz.status() == QuizStatus::Completed {
            println!(
                "\n{}! {}: {} / {}",
                tr(Text::Completed, lang),
                tr(Text::Score, lang),
                quiz.score(),
                quiz.len()
            );
            let prompt = format!("[r] {} / [q] ", tr(Text::RetryQuiz, lang));
            match read_line(&mut rl, &prompt)?.as_deref().map(str::trim) {
                Some("r") => quiz.retry()?,
                _ => return Ok(()),
            }
            continue;
        }

        let question = quiz.current_question().clone();
        println!(
            "\n{} {} / {}    {}: {}",
            tr(Text::Question, lang),
            quiz.current_index() + 1,
            quiz.len(),
            tr(Text::Score, lang),
            quiz.score()
        );
        println!("{}", question.prompt.get(lang));
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option.get(lang));
        }

        let Some(answer) = read_line(&mut rl, "> ")? else {
            return Ok(());
        };
        let answer = answer.trim();
        if answer == "q" {
            return Ok(());
        }
        let Some(option) = answer.parse::<usize>().ok().and_then(|n| n.checked_sub(1)) else {
            println!("1-{}", question.options.len());
            continue;
        };
        let feedback = match quiz.submit_answer(option) {
            Ok(Submission::Graded(feedback)) => feedback,
            Ok(Submission::Ignored) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let verdict = if feedback.is_correct {
            tr(Text::Correct, lang)
        } else {
            tr(Text::Incorrect, lang)
        };
        println!(
            "{verdict}: {}",
            question.options[feedback.correct_option].get(lang)
        );
        println!("{}: {}", tr(Text::Explanation, lang), question.explanation.get(lang));

        let next = if quiz.is_last_question() {
            tr(Text::FinishQuiz, lang)
        } else {
            tr(Text::NextQuestion, lang)
        };
        if read_line(&mut rl, &format!("[{next}] "))?.is_none() {
            return Ok(());
        }
        if let Progress::Completed { score } = quiz.advance()? {
            tracing::debug!(score, "quiz finished");
        }
    }
}

fn run_cards(settings: &Settings) -> Result<()> {
    let lang = settings.language;
    let catalog = Catalog::builtin();
    let Some(mut deck) = Deck::new(catalog.flashcards) else {
        return Ok(());
    };
    println!("== {} ==", tr(Text::Flashcards, lang));
    println!("[enter] flip  [n] next  [p] previous  [q] quit");

    let mut rl = DefaultEditor::new()?;
    loop {
        let card = deck.current();
        if deck.is_flipped() {
            println!("{}", card.definition.get(lang));
        } else {
            println!(
                "\n({}/{}) [{}] {}",
                deck.position() + 1,
                deck.len(),
                card.category.get(lang),
                card.term
            );
        }
        match read_line(&mut rl, "> ")?.as_deref().map(str::trim) {
            None | Some("q") => return Ok(()),
            Some("n") => {
                deck.next();
            }
            Some("p") => {
                deck.previous();
            }
            Some(_) => deck.flip(),
        }
    }
}

fn run_courses(settings: &Settings, course_id: Option<&str>) -> Result<()> {
    let lang = settings.language;
    let catalog = Catalog::builtin();
    let Some(course_id) = course_id else {
        println!("== {} ==", tr(Text::Courses, lang));
        for course in &catalog.courses {
            println!(
                "{:<12} {} ({}: {}%, {} {})",
                course.id,
                course.title.get(lang),
                tr(Text::Progress, lang),
                course.progress,
                course.total_modules,
                tr(Text::Modules, lang)
            );
        }
        return Ok(());
    };

    let course = catalog
        .course(course_id)
        .with_context(|| format!("unknown course: {course_id}"))?;
    let mut browser = CourseBrowser::open(course);
    println!("== {} ==", course.title.get(lang));
    println!("{}", course.description.get(lang));
    println!(
        "[n] {}  [p] {}  [<lesson id>]  [q]",
        tr(Text::NextLesson, lang),
        tr(Text::PrevLesson, lang)
    );

    let mut rl = DefaultEditor::new()?;
    loop {
        match browser.selected() {
            Some(lesson) => {
                let done = if lesson.completed { "x" } else { " " };
                println!(
                    "\n[{done}] {} {} ({:?}, {})",
                    lesson.id,
                    lesson.title.get(lang),
                    lesson.kind,
                    lesson.duration
                );
                if let Some(content) = &lesson.content {
                    println!("{}", content.get(lang));
                }
            }
            None => {
                println!("{}", tr(Text::NoResults, lang));
                return Ok(());
            }
        }
        match read_line(&mut rl, "> ")?.as_deref().map(str::trim) {
            None | Some("q") => return Ok(()),
            Some("n") => {
                browser.next_lesson();
            }
            Some("p") => {
                browser.previous_lesson();
            }
            Some(id) => {
                if browser.select(id).is_none() {
                    println!("{}", tr(Text::NoResults, lang));
                }
            }
        }
    }
}

fn show_domains(lang: Language) {
    println!("== {} ==", tr(Text::ExamDomains, lang));
    for domain in Catalog::builtin().domains {
        let status = match domain.status {
            DomainStatus::Completed => tr(Text::Completed, lang),
            DomainStatus::InProgress => tr(Text::InProgress, lang),
            DomainStatus::Started => tr(Text::Started, lang),
            DomainStatus::NotStarted => tr(Text::NotStarted, lang),
        };
        println!(
            "{} {:<32} {:>3}%  {}",
            domain.number,
            domain.title.get(lang),
            domain.progress,
            status
        );
    }
}

fn run_search(settings: &Settings, pattern: &str) -> Result<()> {
    let hits = Catalog::builtin().search(pattern, settings.language)?;
    if hits.is_empty() {
        println!("{}", tr(Text::NoResults, settings.language));
    }
    for hit in hits {
        let kind = match hit.kind {
            HitKind::Flashcard => "card",
            HitKind::Course => "course",
            HitKind::Lesson => "lesson",
            HitKind::Domain => "domain",
        };
        println!("{kind:<7} {:<10} {}", hit.id, hit.title);
    }
    Ok(())
}
