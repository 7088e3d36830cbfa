use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::utilities::str_to_bool;


const ENV_FALLBACK_VOCAB: &str = "VOCAB_QUIZ_FALLBACK";
const ENV_NEXT_QUESTION_DELAY_MS: &str = "VOCAB_QUIZ_NEXT_DELAY_MS";
const ENV_PRONUNCIATION: &str = "VOCAB_QUIZ_PRONUNCIATION";
const ENV_PRONUNCIATION_URL: &str = "VOCAB_QUIZ_PRONUNCIATION_URL";
const ENV_PRONUNCIATION_TIMEOUT_SECS: &str = "VOCAB_QUIZ_PRONUNCIATION_TIMEOUT_SECS";
const ENV_CACHE_DIR: &str = "VOCAB_QUIZ_CACHE_DIR";
const ENV_LOG_LEVEL: &str = "RUST_LOG";

#[derive(Clone, Debug)]
pub struct Settings {
    pub fallback_vocab_path: PathBuf,
    pub next_question_delay: Duration,
    pub pronunciation_enabled: bool,
    /// Dictionary page prefix, the url-encoded word is appended to it.
    pub pronunciation_url: String,
    pub pronunciation_timeout: Duration,
    /// Overrides the per-user cache directory for downloaded audio.
    pub pronunciation_cache_dir: Option<PathBuf>,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            fallback_vocab_path: PathBuf::from("default_vocab.csv"),
            next_question_delay: Duration::from_secs(0),
            pronunciation_enabled: true,
            pronunciation_url: "https://dictionary.cambridge.org/dictionary/english/".to_owned(),
            pronunciation_timeout: Duration::from_secs(5),
            pronunciation_cache_dir: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
            log_level: "warn".to_owned(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings::default().overlay(|key| env::var(key).ok())
    }

    /// Replaces defaults with whatever `lookup` provides. Unparsable values are ignored.
    pub fn overlay<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_FALLBACK_VOCAB) {
            self.fallback_vocab_path = PathBuf::from(path);
        }
        if let Some(delay) = lookup(ENV_NEXT_QUESTION_DELAY_MS).and_then(|v| v.parse().ok()) {
            self.next_question_delay = Duration::from_millis(delay);
        }
        if let Some(enabled) = lookup(ENV_PRONUNCIATION).and_then(|v| str_to_bool(&v)) {
            self.pronunciation_enabled = enabled;
        }
        if let Some(url) = lookup(ENV_PRONUNCIATION_URL) {
            self.pronunciation_url = url;
        }
        if let Some(timeout) = lookup(ENV_PRONUNCIATION_TIMEOUT_SECS).and_then(|v| v.parse().ok()) {
            self.pronunciation_timeout = Duration::from_secs(timeout);
        }
        if let Some(dir) = lookup(ENV_CACHE_DIR) {
            self.pronunciation_cache_dir = Some(PathBuf::from(dir));
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        self
    }
}
