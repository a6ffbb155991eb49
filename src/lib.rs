#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod evaluate;
pub use evaluate::{evaluate, Attempt, LetterResult, Status};

pub mod session;
pub use session::{Clock, Outcome, PuzzleConfig, Session, SystemClock, MAX_ATTEMPTS};

pub mod words;
pub use words::{BuiltinWords, Language, WordLength, WordSource};

pub mod score;
pub use score::{HighscoreEntry, HighscoreTable, ScoreRecord};

pub mod store;
#[cfg(feature = "serde")]
pub use store::JsonStore;
pub use store::{MemoryStore, ScoreStore};

#[cfg(test)]
pub(crate) mod mock;

/// The return type used throughout `wordrally`.
pub type Result<T, E = WordRallyError> = std::result::Result<T, E>;

/// The errors that `wordrally` can produce.
#[derive(Debug, Error)]
pub enum WordRallyError {
    #[error("the session rejected the guess")]
    Session {
        #[from]
        kind: SessionError,
    },

    #[error("could not pick a target word")]
    Words {
        #[from]
        kind: WordsError,
    },

    #[error("the score store failed")]
    Store {
        #[from]
        kind: StoreError,
    },
}

/// Recoverable conditions raised by [`Session::submit_guess()`].
///
/// Neither variant mutates the session: the history and outcome are exactly
/// what they were before the call, and the caller can re-prompt.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The guess does not have the configured number of letters.
    #[error("the guess has {actual} letters, but the puzzle word has {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// The session already finished; start a new game first.
    #[error("the session is no longer in progress ({0})")]
    NotInProgress(Outcome),
}

/// Errors from the word-source side of the game.
#[derive(Debug, Error)]
pub enum WordsError {
    /// The corpus has no entries for this (language, length) pair. Fatal for
    /// that configuration; the caller must pick another one.
    #[error("no words available for language \"{language}\" with {length} letters")]
    EmptyWordList {
        language: Language,
        length: WordLength,
    },

    /// The requested word length is outside the 5 to 8 range the game supports.
    #[error("supported word lengths are 5 through 8, not {0}")]
    UnsupportedLength(usize),
}

/// Errors from a [`ScoreStore`] implementation.
///
/// Persistence is best-effort: these never affect an in-memory [`Session`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not read or write the score file")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing or deserializing scores")]
    Serde(#[from] serde_json::Error),
}
