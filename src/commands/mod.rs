use anyhow::Result;
use std::thread;
use tracing::debug;

use crate::output::{Message, QuizOutput};
use crate::quiz::{Phase, Quiz};
use crate::settings::Settings;
use crate::utilities::input;


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Start,
    Answer(String),
    Next,
    Reset,
    Score,
    List,
    Help,
    Quit,
    Unknown(String),
}

/// `None` for blank lines.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    let keyword = parts.next().filter(|k| !k.is_empty())?;
    let rest = parts.next().unwrap_or("").trim();

    let command = match keyword.to_lowercase().as_str() {
        "start" | "begin" | "s" => Command::Start,
        "answer" | "a" => Command::Answer(rest.to_owned()),
        "next" | "n" => Command::Next,
        "reset" | "r" => Command::Reset,
        "score" => Command::Score,
        "list" | "words" => Command::List,
        "help" | "h" | "?" => Command::Help,
        "exit" | "leave" | "quit" | "e" | "q" | "l" => Command::Quit,
        _ if keyword.parse::<usize>().is_ok() => Command::Answer(line.to_owned()),
        _ => Command::Unknown(keyword.to_owned()),
    };
    Some(command)
}

pub fn execute<O: QuizOutput>(quiz: &mut Quiz<O>, command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::Start => quiz.start(),
        Command::Answer(answer) => quiz.answer(&answer),
        Command::Next => {
            if quiz.session().phase() == Phase::Revealed && !settings.next_question_delay.is_zero() {
                thread::sleep(settings.next_question_delay);
            }
            quiz.next()
        }
        Command::Reset => quiz.reset(),
        Command::Score => {
            quiz.show_score();
            Ok(())
        }
        Command::List => {
            quiz.show_vocabulary();
            Ok(())
        }
        Command::Help => {
            quiz.output().say(&Message::Help);
            Ok(())
        }
        Command::Unknown(keyword) => {
            quiz.output().say(&Message::UnknownCommand(keyword));
            Ok(())
        }
        Command::Quit => Ok(()),
    }
}

/// Reads commands until `quit` or the end of input.
pub fn run<O: QuizOutput>(quiz: &mut Quiz<O>, settings: &Settings) -> Result<()> {
    quiz.output().say(&Message::Help);
    while let Some(line) = input(">> ")? {
        let command = match parse(&line) {
            Some(command) => command,
            None => continue,
        };
        if command == Command::Quit {
            break;
        }
        debug!(?command, "Executing command");
        if let Err(e) = execute(quiz, command, settings) {
            debug!("Command failed: {:#}", e);
            quiz.output().say(&Message::ActionFailed(format!("{:#}", e)));
        }
    }
    Ok(())
}
