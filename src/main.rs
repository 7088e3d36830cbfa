use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::output::terminal::TerminalOutput;
use crate::output::{Message, QuizOutput};
use crate::quiz::Quiz;
use crate::settings::Settings;

mod commands;
mod details;
mod logging;
mod output;
mod pronunciation;
mod quiz;
mod settings;
mod utilities;
mod vocab;

/// Multiple-choice vocabulary quiz: guess the word from its definition.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV file with word, translation, definition and example_usage columns
    #[arg(short, long)]
    vocab: Option<PathBuf>,

    /// Seed the question generator to replay the same quiz
    #[arg(long)]
    seed: Option<u64>,

    /// Do not look up pronunciation audio online
    #[arg(long)]
    no_pronunciation: bool,

    /// Log filter, `RUST_LOG` syntax
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::from_env();
    if args.no_pronunciation {
        settings.pronunciation_enabled = false;
    }
    if let Some(log_level) = &args.log_level {
        settings.log_level = log_level.clone();
    }
    logging::init_tracing(&settings.log_level);

    let table = vocab::load(args.vocab.as_deref(), &settings.fallback_vocab_path)
        .context("Could not load the vocabulary")?;
    let source = args
        .vocab
        .as_ref()
        .unwrap_or(&settings.fallback_vocab_path)
        .display()
        .to_string();

    let output = TerminalOutput::new();
    output.say(&Message::VocabularyLoaded {
        source,
        entries: table.len(),
        is_fallback: args.vocab.is_none(),
    });

    let rng = match args.seed {
        Some(seed) => {
            info!("Using question seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let pronunciation = pronunciation::from_settings(&settings);

    let mut quiz = Quiz::new(Arc::new(table), output, pronunciation, rng);
    commands::run(&mut quiz, &settings)
}
