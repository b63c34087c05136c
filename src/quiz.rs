//! Linear multiple-choice quiz with immediate feedback.
//!
//! A [`QuizSession`] walks a fixed list of questions in order. Each question is
//! answered once, its feedback is revealed, and the session advances until the last
//! question has been revealed, at which point it is completed with a final score.
//!
//! ```
//! use cyberlab::content;
//! use cyberlab::quiz::{Progress, QuizSession};
//!
//! let mut quiz = QuizSession::new(content::quiz_questions()).unwrap();
//! quiz.submit_answer(1).unwrap();
//! quiz.advance().unwrap();
//! quiz.submit_answer(0).unwrap();
//! assert_eq!(quiz.advance().unwrap(), Progress::Completed { score: 1 });
//! ```

use crate::lang::Localized;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: Localized,
    pub options: Vec<Localized>,
    /// Index into `options` of the right answer.
    pub correct_option: usize,
    pub explanation: Localized,
}

impl QuizQuestion {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Errors raised by [`QuizSession`].
///
/// None of them leave the session modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A quiz needs at least one question.
    #[error("quiz has no questions")]
    EmptyQuiz,

    /// The question's correct option does not exist.
    #[error("question {id}: correct option {correct_option} is out of range (0..{options})")]
    InvalidQuestion {
        id: u32,
        correct_option: usize,
        options: usize,
    },

    /// The selected option does not exist on the current question.
    #[error("option {option} is out of range (0..{options})")]
    InvalidArgument { option: usize, options: usize },

    /// The operation is not allowed in the current state.
    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

/// Check that a question list can drive a quiz.
pub fn validate(questions: &[QuizQuestion]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuiz);
    }
    for q in questions {
        if q.correct_option >= q.options.len() {
            return Err(QuizError::InvalidQuestion {
                id: q.id,
                correct_option: q.correct_option,
                options: q.options.len(),
            });
        }
    }
    Ok(())
}

/// Snapshot of where a session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to question `index`.
    AwaitingAnswer { index: usize },
    /// Feedback for question `index` is visible; answer changes are locked.
    Revealed { index: usize, selected: usize },
    /// All questions answered.
    Completed { score: u32 },
}

impl QuizState {
    fn describe(self) -> &'static str {
        match self {
            QuizState::AwaitingAnswer { .. } => "awaiting an answer",
            QuizState::Revealed { .. } => "feedback is revealed",
            QuizState::Completed { .. } => "completed",
        }
    }
}

/// Coarse status for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    InProgress,
    Completed,
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub question_id: u32,
    pub selected: usize,
    pub correct_option: usize,
    pub is_correct: bool,
    /// Running score after this answer.
    pub score: u32,
}

/// Outcome of [`QuizSession::submit_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Graded(Feedback),
    /// The current question was already answered, or the quiz is over.
    Ignored,
}

/// Outcome of [`QuizSession::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to question `index`.
    Next { index: usize },
    /// Went past the last question.
    Completed { score: u32 },
}

/// A single run through a question list.
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current_index: usize,
    selected_option: Option<usize>,
    score: u32,
    completed: bool,
    on_complete: Option<Box<dyn FnMut(u32)>>,
}

impl QuizSession {
    /// Start a session at the first question.
    ///
    /// Fails if the list is empty or any question's correct option is out of range.
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        validate(&questions)?;
        Ok(Self {
            questions,
            current_index: 0,
            selected_option: None,
            score: 0,
            completed: false,
            on_complete: None,
        })
    }

    /// Register a callback that receives the final score each time the quiz completes.
    pub fn on_complete(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn state(&self) -> QuizState {
        if self.completed {
            QuizState::Completed { score: self.score }
        } else if let Some(selected) = self.selected_option {
            QuizState::Revealed {
                index: self.current_index,
                selected,
            }
        } else {
            QuizState::AwaitingAnswer {
                index: self.current_index,
            }
        }
    }

    pub fn status(&self) -> QuizStatus {
        if self.completed {
            QuizStatus::Completed
        } else {
            QuizStatus::InProgress
        }
    }

    /// Answer the current question.
    ///
    /// Once a question is revealed, further answers are ignored until [`advance`]
    /// is called, so the score can only be credited once per question.
    ///
    /// [`advance`]: QuizSession::advance
    pub fn submit_answer(&mut self, option: usize) -> Result<Submission, QuizError> {
        if self.completed || self.selected_option.is_some() {
            debug!(option, state = self.state().describe(), "answer ignored");
            return Ok(Submission::Ignored);
        }

        let question = &self.questions[self.current_index];
        if option >= question.options.len() {
            return Err(QuizError::InvalidArgument {
                option,
                options: question.options.len(),
            });
        }

        let is_correct = question.is_correct(option);
        if is_correct {
            self.score += 1;
        }
        self.selected_option = Some(option);
        debug!(
            question = question.id,
            option, is_correct, score = self.score, "answer graded"
        );

        Ok(Submission::Graded(Feedback {
            question_id: question.id,
            selected: option,
            correct_option: question.correct_option,
            is_correct,
            score: self.score,
        }))
    }

    /// Move past a revealed question.
    ///
    /// After the last question the session completes and the completion callback
    /// fires with the final score.
    pub fn advance(&mut self) -> Result<Progress, QuizError> {
        if self.completed || self.selected_option.is_none() {
            return Err(QuizError::InvalidState {
                operation: "advance",
                state: self.state().describe(),
            });
        }

        if self.current_index + 1 == self.questions.len() {
            self.completed = true;
            info!(
                score = self.score,
                total = self.questions.len(),
                "quiz completed"
            );
            if let Some(callback) = self.on_complete.as_mut() {
                callback(self.score);
            }
            return Ok(Progress::Completed { score: self.score });
        }

        self.current_index += 1;
        self.selected_option = None;
        debug!(index = self.current_index, "next question");
        Ok(Progress::Next {
            index: self.current_index,
        })
    }

    /// Start over after completion.
    pub fn retry(&mut self) -> Result<(), QuizError> {
        if !self.completed {
            return Err(QuizError::InvalidState {
                operation: "retry",
                state: self.state().describe(),
            });
        }
        self.current_index = 0;
        self.selected_option = None;
        self.score = 0;
        self.completed = false;
        debug!("quiz restarted");
        Ok(())
    }

    /// The question being asked, or the last one once completed.
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current_index]
    }

    /// Index of the current question.
    ///
    /// Reads as the question count once the quiz is completed.
    pub fn current_index(&self) -> usize {
        if self.completed {
            self.questions.len()
        } else {
            self.current_index
        }
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_revealed(&self) -> bool {
        !self.completed && self.selected_option.is_some()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// True when the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn question(id: u32, options: usize, correct_option: usize) -> QuizQuestion {
        QuizQuestion {
            id,
            prompt: Localized::same(format!("question {id}")),
            options: (0..options)
                .map(|i| Localized::same(format!("option {i}")))
                .collect(),
            correct_option,
            explanation: Localized::same("because"),
        }
    }

    fn two_questions() -> QuizSession {
        QuizSession::new(vec![question(1, 4, 1), question(2, 4, 1)]).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_banks() {
        assert_eq!(QuizSession::new(vec![]).err(), Some(QuizError::EmptyQuiz));
        assert_eq!(
            QuizSession::new(vec![question(7, 2, 2)]).err(),
            Some(QuizError::InvalidQuestion {
                id: 7,
                correct_option: 2,
                options: 2
            })
        );
    }

    #[test]
    fn test_starts_awaiting_first_answer() {
        let quiz = two_questions();
        assert_eq!(quiz.state(), QuizState::AwaitingAnswer { index: 0 });
        assert_eq!(quiz.status(), QuizStatus::InProgress);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.is_revealed());
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let mut quiz = two_questions();
        let Submission::Graded(feedback) = quiz.submit_answer(1).unwrap() else {
            panic!("first answer must be graded");
        };
        assert!(feedback.is_correct);
        assert_eq!(feedback.score, 1);
        assert_eq!(quiz.state(), QuizState::Revealed { index: 0, selected: 1 });

        // re-submission is a no-op
        assert_eq!(quiz.submit_answer(1).unwrap(), Submission::Ignored);
        assert_eq!(quiz.submit_answer(3).unwrap(), Submission::Ignored);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.selected_option(), Some(1));
    }

    #[test]
    fn test_wrong_answer_leaves_score() {
        let mut quiz = two_questions();
        let Submission::Graded(feedback) = quiz.submit_answer(2).unwrap() else {
            panic!("first answer must be graded");
        };
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_option, 1);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.is_revealed());
    }

    #[test]
    fn test_out_of_range_option_is_rejected() {
        let mut quiz = two_questions();
        assert_eq!(
            quiz.submit_answer(4),
            Err(QuizError::InvalidArgument {
                option: 4,
                options: 4
            })
        );
        assert_eq!(quiz.state(), QuizState::AwaitingAnswer { index: 0 });
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn test_advance_requires_revealed() {
        let mut quiz = two_questions();
        assert!(matches!(
            quiz.advance(),
            Err(QuizError::InvalidState {
                operation: "advance",
                ..
            })
        ));
        assert_eq!(quiz.state(), QuizState::AwaitingAnswer { index: 0 });
    }

    #[test]
    fn test_advance_resets_selection() {
        let mut quiz = two_questions();
        quiz.submit_answer(0).unwrap();
        assert_eq!(quiz.advance(), Ok(Progress::Next { index: 1 }));
        assert_eq!(quiz.state(), QuizState::AwaitingAnswer { index: 1 });
        assert_eq!(quiz.selected_option(), None);
        assert!(!quiz.is_revealed());
        assert!(quiz.is_last_question());
    }

    #[test]
    fn test_two_question_scenario() {
        let mut quiz = two_questions();
        let scores = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&scores);
        quiz.on_complete(move |score| sink.borrow_mut().push(score));

        quiz.submit_answer(1).unwrap();
        quiz.advance().unwrap();
        quiz.submit_answer(0).unwrap();
        assert_eq!(quiz.advance(), Ok(Progress::Completed { score: 1 }));

        assert_eq!(quiz.status(), QuizStatus::Completed);
        assert_eq!(quiz.state(), QuizState::Completed { score: 1 });
        assert_eq!(quiz.current_index(), 2);
        assert_eq!(*scores.borrow(), vec![1]);

        // nothing moves once completed
        assert_eq!(quiz.submit_answer(1).unwrap(), Submission::Ignored);
        assert!(quiz.advance().is_err());
        assert_eq!(*scores.borrow(), vec![1]);
    }

    #[test]
    fn test_n_advances_complete_with_bounded_score() {
        for n in 1..=5u32 {
            let questions = (0..n).map(|id| question(id, 3, (id % 3) as usize)).collect();
            let mut quiz = QuizSession::new(questions).unwrap();
            let mut advances = 0;
            while quiz.status() == QuizStatus::InProgress {
                quiz.submit_answer(0).unwrap();
                quiz.advance().unwrap();
                advances += 1;
            }
            assert_eq!(advances, n);
            assert!(quiz.score() <= n);
            // option 0 is correct for every third question
            assert_eq!(quiz.score(), n.div_ceil(3));
        }
    }

    #[test]
    fn test_retry_only_after_completion() {
        let mut quiz = two_questions();
        assert!(matches!(
            quiz.retry(),
            Err(QuizError::InvalidState {
                operation: "retry",
                ..
            })
        ));

        for _ in 0..2 {
            quiz.submit_answer(1).unwrap();
            quiz.advance().unwrap();
        }
        assert_eq!(quiz.score(), 2);

        quiz.retry().unwrap();
        assert_eq!(quiz.state(), QuizState::AwaitingAnswer { index: 0 });
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected_option(), None);
    }

    #[test]
    fn test_completion_fires_again_after_retry() {
        let mut quiz = QuizSession::new(vec![question(1, 2, 0)]).unwrap();
        let scores = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&scores);
        quiz.on_complete(move |score| sink.borrow_mut().push(score));

        quiz.submit_answer(0).unwrap();
        quiz.advance().unwrap();
        quiz.retry().unwrap();
        quiz.submit_answer(1).unwrap();
        quiz.advance().unwrap();

        assert_eq!(*scores.borrow(), vec![1, 0]);
    }
}
