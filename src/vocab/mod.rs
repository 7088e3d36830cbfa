use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[cfg(test)]
pub mod fixtures;

pub const REQUIRED_COLUMNS: [&str; 4] = ["word", "translation", "definition", "example_usage"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("vocabulary file `{}` was not found", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("could not read vocabulary file `{}`", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the vocabulary source is empty")]
    EmptySource,
    #[error("could not parse the vocabulary source: {reason}")]
    MalformedSource { reason: String },
    #[error("the vocabulary source is missing required columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        LoadError::MalformedSource {
            reason: error.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: String,
    pub translation: String,
    pub definition: String,
    pub example_usage: String,
}

impl VocabEntry {
    fn first_blank_field(&self) -> Option<&'static str> {
        [
            &self.word,
            &self.translation,
            &self.definition,
            &self.example_usage,
        ]
        .iter()
        .zip(REQUIRED_COLUMNS.iter())
        .find(|(value, _)| value.is_empty())
        .map(|(_, column)| *column)
    }
}

#[derive(Clone, Debug, Default)]
pub struct VocabTable {
    entries: Vec<VocabEntry>,
}

impl VocabTable {
    pub fn open(source: &Path) -> Result<VocabTable, LoadError> {
        let file = File::open(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::SourceNotFound {
                path: source.to_path_buf(),
            },
            _ => LoadError::Unreadable {
                path: source.to_path_buf(),
                source: e,
            },
        })?;
        let table = VocabTable::from_reader(file)?;
        info!(
            "Loaded {} vocabulary entries from {}",
            table.len(),
            source.display()
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<VocabTable, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(LoadError::EmptySource);
        }
        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns { missing });
        }

        let mut entries = Vec::new();
        for (index, entry) in csv_reader.deserialize().enumerate() {
            let entry: VocabEntry = entry?;
            if let Some(column) = entry.first_blank_field() {
                // Row 1 is the header
                return Err(LoadError::MalformedSource {
                    reason: format!("row {} has no value for `{}`", index + 2, column),
                });
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(LoadError::EmptySource);
        }
        Ok(VocabTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Returns the first entry spelled exactly like `word`.
    pub fn find(&self, word: &str) -> Option<&VocabEntry> {
        self.entries.iter().find(|e| e.word == word)
    }
}

/// Reads the explicitly supplied source if there is one, the fallback file otherwise.
pub fn load(source: Option<&Path>, fallback: &Path) -> Result<VocabTable, LoadError> {
    let program_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    load_from(source, fallback, program_dir.as_deref())
}

fn load_from(
    source: Option<&Path>,
    fallback: &Path,
    program_dir: Option<&Path>,
) -> Result<VocabTable, LoadError> {
    if let Some(path) = source {
        return VocabTable::open(path);
    }
    let candidates = fallback_candidates(fallback, program_dir);
    match candidates.iter().find(|path| path.exists()) {
        Some(path) => VocabTable::open(path),
        None => Err(LoadError::SourceNotFound {
            path: candidates
                .into_iter()
                .next()
                .unwrap_or_else(|| fallback.to_path_buf()),
        }),
    }
}

/// A relative fallback is looked up next to the program first, then in the working directory.
fn fallback_candidates(fallback: &Path, program_dir: Option<&Path>) -> Vec<PathBuf> {
    match program_dir {
        Some(dir) if fallback.is_relative() => vec![dir.join(fallback), fallback.to_path_buf()],
        _ => vec![fallback.to_path_buf()],
    }
}
