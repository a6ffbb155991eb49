//! Scripted collaborators for the session tests.

use std::cell::Cell;

use crate::{
    session::Clock,
    words::{Language, WordLength, WordSource},
    WordsError,
};

/// A clock the tests move by hand.
pub(crate) struct MockClock {
    now_ms: Cell<u64>,
}

impl MockClock {
    pub(crate) fn new(start_ms: u64) -> Self {
        MockClock {
            now_ms: Cell::new(start_ms),
        }
    }

    pub(crate) fn advance_secs(&self, secs: u64) {
        self.now_ms.set(self.now_ms.get() + secs * 1000);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now_ms.get()
    }
}

/// A word source that always hands out the same target.
pub(crate) struct FixedWord(pub(crate) &'static str);

impl WordSource for FixedWord {
    fn random_word(
        &mut self,
        _language: Language,
        _length: WordLength,
    ) -> Result<String, WordsError> {
        Ok(self.0.to_string())
    }
}

/// A word source with nothing in it.
pub(crate) struct NoWords;

impl WordSource for NoWords {
    fn random_word(
        &mut self,
        language: Language,
        length: WordLength,
    ) -> Result<String, WordsError> {
        Err(WordsError::EmptyWordList { language, length })
    }
}
