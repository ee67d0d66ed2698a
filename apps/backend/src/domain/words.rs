//! Target word selection.

use std::sync::Mutex;

use rand::prelude::*;

use super::game::MASK;
use super::vocabulary::WORDS;
use crate::errors::domain::DomainError;

/// Picks target words uniformly at random from a fixed vocabulary.
///
/// The RNG sits behind a `Mutex` so a single source can be shared in
/// `AppState` and called through `&self`. Seeded sources are
/// reproducible, which the tests rely on.
pub struct WordSource {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl WordSource {
    /// Build from an explicit list. Every entry must be non-empty lowercase
    /// ASCII letters; an empty list is a configuration error.
    pub fn from_words(words: Vec<String>, seed: Option<u64>) -> Result<Self, DomainError> {
        if words.is_empty() {
            return Err(DomainError::config("vocabulary is empty"));
        }
        if let Some(bad) = words.iter().find(|w| !is_valid_word(w)) {
            return Err(DomainError::config(format!(
                "vocabulary entry {bad:?} is not lowercase ASCII letters"
            )));
        }

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            words,
            rng: Mutex::new(rng),
        })
    }

    /// The embedded vocabulary.
    pub fn builtin(seed: Option<u64>) -> Result<Self, DomainError> {
        Self::from_words(WORDS.iter().map(|w| (*w).to_string()).collect(), seed)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `(target, pattern)` where `pattern` is all mask characters.
    pub fn pick(&self) -> Result<(String, String), DomainError> {
        let idx = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| DomainError::config("word source RNG lock poisoned"))?;
            rng.random_range(0..self.words.len())
        };
        let target = self.words[idx].clone();
        let pattern = MASK.to_string().repeat(target.chars().count());
        Ok((target, pattern))
    }
}

fn is_valid_word(w: &str) -> bool {
    !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase())
}

/// Parse a newline-separated word list. Blank lines are skipped, entries
/// are trimmed and lowercased; anything that is not ASCII letters fails.
pub fn parse_word_list(content: &str) -> Result<Vec<String>, DomainError> {
    let mut words = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = trimmed.to_ascii_lowercase();
        if !is_valid_word(&word) {
            return Err(DomainError::config(format!(
                "word list line {}: {trimmed:?} is not a plain ASCII word",
                lineno + 1
            )));
        }
        words.push(word);
    }
    if words.is_empty() {
        return Err(DomainError::config("word list contains no words"));
    }
    Ok(words)
}
