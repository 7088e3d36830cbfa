use crate::details::WordDetails;
use crate::vocab::VocabEntry;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    ActionFailed(String),
    AnswerCorrect,
    AnswerIncorrect { correct_word: String },
    Help,
    QuestionBegins {
        number: u32,
        definition: String,
        choices: Vec<String>,
    },
    QuizReset,
    ScoresRecap { score: u32, answered: u32 },
    UnknownCommand(String),
    UnrecognizedAnswer(String),
    VocabularyList(Vec<VocabEntry>),
    VocabularyLoaded {
        source: String,
        entries: usize,
        is_fallback: bool,
    },
    WordDetails(WordDetails),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
