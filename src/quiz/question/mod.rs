use lazy_static::lazy_static;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use regex::Regex;
use tracing::debug;
use unidecode::unidecode;

use crate::quiz::QuizError;
use crate::vocab::VocabTable;

#[cfg(test)]
mod tests;

pub const CHOICE_COUNT: usize = 4;

lazy_static! {
    static ref FORBIDDEN_ANSWER_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9]").unwrap();
}

fn sanitize(answer: &str) -> String {
    let answer = unidecode(answer);
    FORBIDDEN_ANSWER_CHARACTERS_REGEX
        .replace_all(&answer.to_lowercase(), "")
        .into()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub definition: String,
    pub correct_word: String,
    pub choices: Vec<String>,
}

impl Question {
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_word
    }

    /// Maps what the user typed to one of the choices: exact text first,
    /// then a 1-based position, then a loose comparison ignoring case,
    /// accents and punctuation.
    pub fn resolve_choice(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(choice) = self.choices.iter().find(|c| c.as_str() == input) {
            return Some(choice.as_str());
        }

        if let Some(choice) = input
            .parse::<usize>()
            .ok()
            .and_then(|position| self.choices.get(position.wrapping_sub(1)))
        {
            return Some(choice.as_str());
        }

        let sanitized_input = sanitize(input);
        if sanitized_input.is_empty() {
            return None;
        }
        self.choices
            .iter()
            .find(|c| sanitize(c) == sanitized_input)
            .map(String::as_str)
    }
}

/// Picks a random entry as the answer and three other entries as distractors.
///
/// Distractors are distinct rows, not distinct spellings: a table listing
/// the same word twice can offer it twice.
pub fn generate<R: Rng + ?Sized>(table: &VocabTable, rng: &mut R) -> Result<Question, QuizError> {
    let available = table.len();
    if available < CHOICE_COUNT {
        return Err(QuizError::InsufficientVocabulary {
            available,
            required: CHOICE_COUNT,
        });
    }

    let entries = table.entries();
    let correct_index = rng.gen_range(0..available);
    let correct = &entries[correct_index];

    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    choices.push(correct.word.clone());
    // Sample among the other rows, then shift indices past the answer's slot
    let distractors = index::sample(rng, available - 1, CHOICE_COUNT - 1)
        .into_iter()
        .map(|i| if i >= correct_index { i + 1 } else { i })
        .map(|i| entries[i].word.clone());
    choices.extend(distractors);
    choices.shuffle(rng);

    debug!(correct_word = %correct.word, ?choices, "Generated question");
    Ok(Question {
        definition: correct.definition.clone(),
        correct_word: correct.word.clone(),
        choices,
    })
}
