use tracing::debug;

use crate::pronunciation::{AudioResource, PronunciationLookup};
use crate::vocab::{VocabEntry, VocabTable};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordDetails {
    pub entry: VocabEntry,
    pub audio: Option<AudioResource>,
}

/// Everything shown about a word after an answer. `None` only if the table has no such word.
pub fn lookup(
    table: &VocabTable,
    word: &str,
    pronunciation: &dyn PronunciationLookup,
) -> Option<WordDetails> {
    let entry = table.find(word)?.clone();
    let audio = pronunciation.lookup_audio(&entry.word);
    if audio.is_none() {
        debug!("No pronunciation available for `{}`", entry.word);
    }
    Some(WordDetails { entry, audio })
}
