use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::{AudioResource, PronunciationLookup};

#[derive(Clone, Default)]
pub struct MockPronunciation {
    known: HashMap<String, AudioResource>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockPronunciation {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_audio(mut self, word: &str, audio: AudioResource) -> Self {
        self.known.insert(word.to_owned(), audio);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().clone()
    }
}

impl PronunciationLookup for MockPronunciation {
    fn lookup_audio(&self, word: &str) -> Option<AudioResource> {
        self.lookups.write().push(word.to_owned());
        self.known.get(word).cloned()
    }
}
