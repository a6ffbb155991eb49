//! Word lists and random target selection.
//!
//! The [`Session`](crate::Session) never picks its own target; it asks a
//! [`WordSource`] for one. [`BuiltinWords`] is the default source with the
//! game's embedded lists, and it can be seeded so tests know the target in
//! advance.

use std::fmt::Display;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::WordsError;

/// The language a puzzle draws its words from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Language {
    De,
    En,
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::De => write!(f, "de"),
            Language::En => write!(f, "en"),
        }
    }
}

/// The number of letters in a puzzle word, restricted to 5 through 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum WordLength {
    Five,
    Six,
    Seven,
    Eight,
}

impl WordLength {
    /// Returns the length as a plain number of characters.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> usize {
        match self {
            WordLength::Five => 5,
            WordLength::Six => 6,
            WordLength::Seven => 7,
            WordLength::Eight => 8,
        }
    }
}

impl TryFrom<usize> for WordLength {
    type Error = WordsError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(WordLength::Five),
            6 => Ok(WordLength::Six),
            7 => Ok(WordLength::Seven),
            8 => Ok(WordLength::Eight),
            other => Err(WordsError::UnsupportedLength(other)),
        }
    }
}

impl Display for WordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.len())
    }
}

/// Supplies the hidden target word for a new session.
///
/// Implementations must return a lowercase word with exactly `length`
/// characters, drawn from their corpus for the (language, length) pair, and
/// [`WordsError::EmptyWordList`] when that pair has no entries.
pub trait WordSource {
    fn random_word(
        &mut self,
        language: Language,
        length: WordLength,
    ) -> Result<String, WordsError>;
}

const DE_FIVE: &[&str] = &["apfel", "blume", "stuhl", "tisch"];
const DE_SIX: &[&str] = &["banane", "kerzen", "garten"];
const DE_SEVEN: &[&str] = &["schacht", "dunkler", "fenster"];
const DE_EIGHT: &[&str] = &["flugzeug", "computer"];

const EN_FIVE: &[&str] = &["apple", "chair", "stone", "plant"];
const EN_SIX: &[&str] = &["window", "banana", "bottle"];
const EN_SEVEN: &[&str] = &["glasses", "lantern"];
const EN_EIGHT: &[&str] = &["backpack", "dinosaur"];

/// The embedded word lists, with uniform random selection.
///
/// # Examples
///
/// Seeding makes selection deterministic, which is how the tests pin down
/// the target:
///
/// ```rust
/// use wordrally::{BuiltinWords, Language, WordLength, WordSource};
///
/// let mut a = BuiltinWords::seeded(7);
/// let mut b = BuiltinWords::seeded(7);
/// assert_eq!(
///     a.random_word(Language::En, WordLength::Five)?,
///     b.random_word(Language::En, WordLength::Five)?,
/// );
/// #
/// # Ok::<_, wordrally::WordsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BuiltinWords {
    rng: StdRng,
}

impl BuiltinWords {
    /// Creates a source seeded from OS entropy.
    pub fn new() -> Self {
        BuiltinWords {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a source with a fixed seed for reproducible selection.
    pub fn seeded(seed: u64) -> Self {
        BuiltinWords {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the embedded list for a (language, length) pair.
    pub fn corpus(language: Language, length: WordLength) -> &'static [&'static str] {
        match (language, length) {
            (Language::De, WordLength::Five) => DE_FIVE,
            (Language::De, WordLength::Six) => DE_SIX,
            (Language::De, WordLength::Seven) => DE_SEVEN,
            (Language::De, WordLength::Eight) => DE_EIGHT,
            (Language::En, WordLength::Five) => EN_FIVE,
            (Language::En, WordLength::Six) => EN_SIX,
            (Language::En, WordLength::Seven) => EN_SEVEN,
            (Language::En, WordLength::Eight) => EN_EIGHT,
        }
    }
}

impl Default for BuiltinWords {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for BuiltinWords {
    fn random_word(
        &mut self,
        language: Language,
        length: WordLength,
    ) -> Result<String, WordsError> {
        Self::corpus(language, length)
            .choose(&mut self.rng)
            .map(|word| (*word).to_string())
            .ok_or(WordsError::EmptyWordList { language, length })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LANGUAGES: [Language; 2] = [Language::De, Language::En];
    const LENGTHS: [WordLength; 4] = [
        WordLength::Five,
        WordLength::Six,
        WordLength::Seven,
        WordLength::Eight,
    ];

    #[test]
    fn every_corpus_entry_is_lowercase_and_the_right_length() {
        for language in LANGUAGES {
            for length in LENGTHS {
                for word in BuiltinWords::corpus(language, length) {
                    assert_eq!(
                        word.chars().count(),
                        length.len(),
                        "{:?} in {}/{}",
                        word,
                        language,
                        length
                    );
                    assert_eq!(&word.to_lowercase(), word, "{:?}", word);
                }
            }
        }
    }

    #[test]
    fn random_word_comes_from_the_corpus() {
        let mut source = BuiltinWords::seeded(3);
        for language in LANGUAGES {
            for length in LENGTHS {
                let word = source.random_word(language, length).unwrap();
                assert!(BuiltinWords::corpus(language, length).contains(&word.as_str()));
            }
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = BuiltinWords::seeded(99);
        let mut b = BuiltinWords::seeded(99);
        for _ in 0..10 {
            assert_eq!(
                a.random_word(Language::De, WordLength::Five).unwrap(),
                b.random_word(Language::De, WordLength::Five).unwrap()
            );
        }
    }

    #[test]
    fn word_length_round_trips_through_usize() {
        for length in LENGTHS {
            assert_eq!(WordLength::try_from(length.len()).unwrap(), length);
        }
        assert!(WordLength::try_from(4).is_err());
        assert!(WordLength::try_from(9).is_err());
    }
}
