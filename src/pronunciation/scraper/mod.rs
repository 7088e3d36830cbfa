use anyhow::{anyhow, Context, Result};
use directories_next::BaseDirs;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::Url;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{AudioResource, PronunciationLookup};
use crate::settings::Settings;


lazy_static! {
    static ref AUDIO_SOURCE_REGEX: Regex = Regex::new(
        r#"<(?:source|audio)\b[^>]*\bsrc\s*=\s*(?:"([^"]+\.mp3)"|'([^']+\.mp3)')"#
    )
    .unwrap();
}

fn get_cache_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .cache_dir()
        .to_path_buf();
    dir.push(env!("CARGO_PKG_NAME"));
    dir.push("pronunciations");
    Ok(dir)
}

/// One file per exact spelling. Percent-encoding keeps the name injective and
/// free of path separators. `%` becomes `+`, which only appears encoded.
fn cache_file_name(word: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    let name = urlencoding::encode(word).replace('%', "+");
    Some(format!("{}.mp3", name))
}

/// Lands `bytes` at `path` only once fully written, so an interrupted
/// download never leaves a truncated file in the cache.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if result.is_err() {
        fs::remove_file(&partial).ok();
    }
    result.with_context(|| format!("could not write {}", path.display()))
}

/// First mp3 referenced by an audio element of the page, relative links resolved.
pub fn extract_audio_url(page_url: &Url, html: &str) -> Option<Url> {
    AUDIO_SOURCE_REGEX
        .captures_iter(html)
        .find_map(|captures| {
            let src = captures.get(1).or_else(|| captures.get(2))?;
            page_url.join(src.as_str()).ok()
        })
}

/// Finds pronunciations by reading dictionary web pages, keeping the audio on disk.
pub struct DictionaryScraper {
    client: Client,
    base_url: Url,
    cache_dir: Option<PathBuf>,
    resolved: Mutex<HashMap<String, Option<AudioResource>>>,
}

impl DictionaryScraper {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.pronunciation_timeout)
            .build()
            .context("could not build HTTP client")?;

        let mut base_url = settings.pronunciation_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("invalid pronunciation URL `{}`", base_url))?;

        let cache_dir = match &settings.pronunciation_cache_dir {
            Some(dir) => Some(dir.clone()),
            None => get_cache_dir()
                .map_err(|e| warn!("Pronunciation cache disabled: {:#}", e))
                .ok(),
        };

        Ok(DictionaryScraper {
            client,
            base_url,
            cache_dir,
            resolved: Mutex::new(HashMap::new()),
        })
    }

    fn page_url(&self, word: &str) -> Result<Url> {
        self.base_url
            .join(&urlencoding::encode(word))
            .with_context(|| format!("could not build dictionary URL for `{}`", word))
    }

    fn cache_path(&self, word: &str) -> Option<PathBuf> {
        let dir = self.cache_dir.as_ref()?;
        cache_file_name(word).map(|name| dir.join(name))
    }

    fn retrieve_cached(&self, word: &str) -> Option<AudioResource> {
        let path = self.cache_path(word)?;
        if path.exists() {
            debug!("Pronunciation cache hit: {}", path.display());
            Some(AudioResource::Cached(path))
        } else {
            None
        }
    }

    fn fetch(&self, word: &str) -> Result<AudioResource> {
        let page_url = self.page_url(word)?;
        let html = self
            .client
            .get(page_url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .with_context(|| format!("could not fetch {}", page_url))?;

        let audio_url = extract_audio_url(&page_url, &html)
            .ok_or_else(|| anyhow!("no pronunciation audio on {}", page_url))?;

        if let Some(path) = self.cache_path(word) {
            match self.download(&audio_url, &path) {
                Ok(()) => return Ok(AudioResource::Cached(path)),
                Err(e) => warn!("Could not cache pronunciation of `{}`: {:#}", word, e),
            }
        }
        Ok(AudioResource::Remote(audio_url.into()))
    }

    fn download(&self, url: &Url, path: &Path) -> Result<()> {
        let bytes = self
            .client
            .get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .with_context(|| format!("could not download {}", url))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_atomically(path, &bytes)
    }
}

impl PronunciationLookup for DictionaryScraper {
    fn lookup_audio(&self, word: &str) -> Option<AudioResource> {
        if let Some(resolved) = self.resolved.lock().get(word).cloned() {
            return resolved;
        }

        let resolved = self.retrieve_cached(word).or_else(|| match self.fetch(word) {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!("Pronunciation lookup failed for `{}`: {:#}", word, e);
                None
            }
        });

        self.resolved.lock().insert(word.to_owned(), resolved.clone());
        resolved
    }
}
