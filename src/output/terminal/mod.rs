use itertools::Itertools;

use crate::output::{Message, QuizOutput};


const HELP: &str = "Commands:
  start             begin a new quiz
  answer <n|word>   pick a choice by number or by spelling it out (a bare number works too)
  next              move on to the next question
  reset             abandon the current quiz
  score             show the score so far
  list              show the whole vocabulary
  help              show this message
  quit              leave";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            ActionFailed(reason) => format!("⚠️  {}", reason),
            AnswerCorrect => "✅ Correct!".into(),
            AnswerIncorrect { correct_word } => {
                format!("❌ Incorrect. The correct word was: {}", correct_word)
            }
            Help => HELP.into(),
            QuestionBegins {
                number,
                definition,
                choices,
            } => {
                let choices = choices
                    .iter()
                    .enumerate()
                    .map(|(index, choice)| format!("  [{}] {}", index + 1, choice))
                    .join("\n");
                format!(
                    "Question {}:\nDefinition: {}\nChoose the correct word:\n{}",
                    number, definition, choices
                )
            }
            QuizReset => "The quiz was reset. Use `start` to play again.".into(),
            ScoresRecap { score, answered } => format!("📈 Score: {} / {}", score, answered),
            UnknownCommand(command) => {
                format!("Unknown command `{}`. Type `help` for the list.", command)
            }
            UnrecognizedAnswer(answer) => format!(
                "Couldn't understand the answer `{}`, pick one of the choices by number or name.",
                answer
            ),
            VocabularyList(entries) => entries
                .iter()
                .map(|e| {
                    format!(
                        "{} | {} | {} | {}",
                        e.word, e.translation, e.definition, e.example_usage
                    )
                })
                .join("\n"),
            VocabularyLoaded {
                source,
                entries,
                is_fallback,
            } => {
                if *is_fallback {
                    format!(
                        "No vocabulary file given. Using the default list {} ({} words).",
                        source, entries
                    )
                } else {
                    format!("Loaded {} words from {}.", entries, source)
                }
            }
            WordDetails(details) => {
                let pronunciation = details
                    .audio
                    .as_ref()
                    .map(|audio| audio.to_string())
                    .unwrap_or_else(|| "not available".to_owned());
                format!(
                    "Word: {}\nTranslation: {}\nDefinition: {}\nExample Usage: {}\nPronunciation: {}",
                    details.entry.word,
                    details.entry.translation,
                    details.entry.definition,
                    details.entry.example_usage,
                    pronunciation
                )
            }
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}
