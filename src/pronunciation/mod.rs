use std::fmt;
use std::path::PathBuf;
use tracing::warn;

use crate::settings::Settings;

#[cfg(test)]
pub mod mock;
mod scraper;

pub use scraper::DictionaryScraper;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AudioResource {
    /// Audio that could not be stored locally, playable from its source.
    Remote(String),
    /// Audio downloaded into the pronunciation cache.
    Cached(PathBuf),
}

impl fmt::Display for AudioResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioResource::Remote(url) => f.write_str(url),
            AudioResource::Cached(path) => write!(f, "{}", path.display()),
        }
    }
}

pub trait PronunciationLookup {
    /// Best effort. Failures are logged and reported as `None`, never as errors.
    fn lookup_audio(&self, word: &str) -> Option<AudioResource>;
}

pub struct NoPronunciation;

impl PronunciationLookup for NoPronunciation {
    fn lookup_audio(&self, _word: &str) -> Option<AudioResource> {
        None
    }
}

pub fn from_settings(settings: &Settings) -> Box<dyn PronunciationLookup> {
    if !settings.pronunciation_enabled {
        return Box::new(NoPronunciation);
    }
    match DictionaryScraper::new(settings) {
        Ok(scraper) => Box::new(scraper),
        Err(e) => {
            warn!("Pronunciation lookup disabled: {:#}", e);
            Box::new(NoPronunciation)
        }
    }
}
