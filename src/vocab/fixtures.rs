use super::{VocabEntry, VocabTable};

pub fn entry(word: &str) -> VocabEntry {
    VocabEntry {
        word: word.to_owned(),
        translation: format!("translation of {}", word),
        definition: format!("definition of {}", word),
        example_usage: format!("example with {}", word),
    }
}

pub fn table(words: &[&str]) -> VocabTable {
    VocabTable {
        entries: words.iter().map(|w| entry(w)).collect(),
    }
}

pub fn animals() -> VocabTable {
    table(&["cat", "dog", "bird", "fish", "cow"])
}
