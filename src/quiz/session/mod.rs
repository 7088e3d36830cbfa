use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::quiz::question::{self, Question};
use crate::quiz::QuizError;
use crate::vocab::VocabTable;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    Answering,
    Revealed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Phase::Idle => "not started",
            Phase::Answering => "waiting for an answer",
            Phase::Revealed => "showing the answer",
        };
        f.write_str(description)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Start,
    Submit(String),
    Next,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Submit(_) => "submit an answer",
            Action::Next => "move to the next question",
            Action::Reset => "reset",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    Started,
    Answered { is_correct: bool },
    Advanced,
    Reset,
}

/// Progress of one user through a quiz. Only [`SessionState::apply`] mutates it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionState {
    current_question: Option<Question>,
    score: u32,
    question_number: u32,
    show_details: bool,
    user_answer: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            current_question: None,
            score: 0,
            question_number: 1,
            show_details: false,
            user_answer: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.current_question, self.show_details) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::Answering,
            (Some(_), true) => Phase::Revealed,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    /// Number of answers submitted since the quiz started.
    pub fn answered(&self) -> u32 {
        match self.phase() {
            Phase::Revealed => self.question_number,
            _ => self.question_number - 1,
        }
    }

    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        action: Action,
        table: &VocabTable,
        rng: &mut R,
    ) -> Result<Transition, QuizError> {
        let transition = match (self.phase(), action) {
            (_, Action::Reset) => {
                *self = SessionState::default();
                Transition::Reset
            }
            (Phase::Idle, Action::Start) => {
                let question = question::generate(table, rng)?;
                *self = SessionState {
                    current_question: Some(question),
                    ..Default::default()
                };
                Transition::Started
            }
            (Phase::Answering, Action::Submit(answer)) => {
                let is_correct =
                    matches!(&self.current_question, Some(q) if q.is_correct(&answer));
                if is_correct {
                    self.score += 1;
                }
                self.user_answer = Some(answer);
                self.show_details = true;
                Transition::Answered { is_correct }
            }
            (Phase::Revealed, Action::Next) => {
                let question = question::generate(table, rng)?;
                self.question_number += 1;
                self.current_question = Some(question);
                self.show_details = false;
                self.user_answer = None;
                Transition::Advanced
            }
            (phase, action) => {
                return Err(QuizError::InvalidAction {
                    action: action.name(),
                    phase,
                })
            }
        };

        debug!(
            ?transition,
            phase = ?self.phase(),
            score = self.score,
            question_number = self.question_number,
            "Session transition"
        );
        Ok(transition)
    }
}
