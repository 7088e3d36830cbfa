use anyhow::Result;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::details;
use crate::output::{Message, QuizOutput};
use crate::pronunciation::PronunciationLookup;
use crate::vocab::VocabTable;

pub mod question;
pub mod session;

pub use self::question::Question;
pub use self::session::{Action, Phase, SessionState, Transition};


#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("at least {required} vocabulary entries are needed to ask a question, found {available}")]
    InsufficientVocabulary { available: usize, required: usize },
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidAction { action: &'static str, phase: Phase },
}

/// Runs one user's session against a vocabulary table, reporting everything through `O`.
pub struct Quiz<O> {
    table: Arc<VocabTable>,
    session: SessionState,
    rng: StdRng,
    output: O,
    pronunciation: Box<dyn PronunciationLookup>,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(
        table: Arc<VocabTable>,
        output: O,
        pronunciation: Box<dyn PronunciationLookup>,
        rng: StdRng,
    ) -> Self {
        Quiz {
            table,
            session: SessionState::new(),
            rng,
            output,
            pronunciation,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn apply(&mut self, action: Action) -> Result<Transition> {
        let previous_phase = self.session.phase();
        let transition = self.session.apply(action, &self.table, &mut self.rng)?;
        let phase = self.session.phase();
        if phase != previous_phase {
            info!("Entering quiz phase: {:?}", phase);
        }
        Ok(transition)
    }

    pub fn start(&mut self) -> Result<()> {
        self.apply(Action::Start)?;
        self.announce_question();
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.apply(Action::Next)?;
        self.announce_question();
        Ok(())
    }

    pub fn answer(&mut self, input: &str) -> Result<()> {
        let phase = self.session.phase();
        let question = match (phase, self.session.current_question()) {
            (Phase::Answering, Some(question)) => question,
            _ => {
                return Err(QuizError::InvalidAction {
                    action: Action::Submit(input.to_owned()).name(),
                    phase,
                }
                .into())
            }
        };

        let choice = match question.resolve_choice(input) {
            Some(choice) => choice.to_owned(),
            None => {
                self.output
                    .say(&Message::UnrecognizedAnswer(input.trim().to_owned()));
                return Ok(());
            }
        };
        let correct_word = question.correct_word.clone();

        match self.apply(Action::Submit(choice))? {
            Transition::Answered { is_correct: true } => self.output.say(&Message::AnswerCorrect),
            _ => self.output.say(&Message::AnswerIncorrect { correct_word }),
        }

        self.show_details();
        self.show_score();
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.apply(Action::Reset)?;
        self.output.say(&Message::QuizReset);
        self.show_score();
        Ok(())
    }

    pub fn show_score(&self) {
        self.output.say(&Message::ScoresRecap {
            score: self.session.score(),
            answered: self.session.answered(),
        });
    }

    pub fn show_vocabulary(&self) {
        self.output
            .say(&Message::VocabularyList(self.table.entries().to_vec()));
    }

    /// Details are for the word the user picked, which is the answer when they got it right.
    fn show_details(&self) {
        if !self.session.show_details() {
            return;
        }
        let details = self
            .session
            .user_answer()
            .and_then(|word| details::lookup(&self.table, word, self.pronunciation.as_ref()));
        if let Some(details) = details {
            self.output.say(&Message::WordDetails(details));
        }
    }

    fn announce_question(&self) {
        if let Some(question) = self.session.current_question() {
            self.output.say(&Message::QuestionBegins {
                number: self.session.question_number(),
                definition: question.definition.clone(),
                choices: question.choices.clone(),
            });
        }
    }
}
