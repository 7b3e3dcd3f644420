//! Target words: validation, the word list, and loading it from disk.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Used when the word file is missing or has no usable lines.
pub const FALLBACK_WORDS: [&str; 8] = [
    "PYTHON", "GAMES", "CODING", "PUZZLE", "KITCHEN", "MOUSE", "CHEESE", "TRAP",
];

/// An uppercase, purely alphabetic word of at least one letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn new(text: &str) -> Result<Self> {
        let upper = text.trim().to_ascii_uppercase();
        if upper.is_empty() || !upper.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidWord(text.to_string()));
        }
        Ok(Self(upper))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-empty list of candidate words.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Fails with [`Error::EmptyWordList`]; the game cannot start without a word.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    pub fn fallback() -> Self {
        let words = FALLBACK_WORDS
            .iter()
            .map(|w| Word(w.to_string()))
            .collect();
        Self { words }
    }

    /// Parse one word per line. Blank lines are skipped, as are lines that
    /// are not a single alphabetic word.
    pub fn parse(text: &str) -> Vec<Word> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| match Word::new(line) {
                Ok(word) => Some(word),
                Err(_) => {
                    warn!(line, "skipping word list entry");
                    None
                }
            })
            .collect()
    }

    /// Read the word file, substituting [`FALLBACK_WORDS`] when it is missing
    /// or yields nothing usable. Other I/O failures are reported.
    pub fn load_or_fallback(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "word list not found, using fallback words");
                return Ok(Self::fallback());
            }
            Err(source) => {
                return Err(Error::Io { path: path.to_path_buf(), source });
            }
        };

        let words = Self::parse(&text);
        if words.is_empty() {
            warn!(path = %path.display(), "word list has no usable words, using fallback words");
            return Ok(Self::fallback());
        }
        info!(path = %path.display(), count = words.len(), "loaded word list");
        Self::new(words)
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())].clone()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
