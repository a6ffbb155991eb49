//! The session state machine: one puzzle, its history, timing, and outcome.

use std::{
    fmt::Display,
    time::{SystemTime, UNIX_EPOCH},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    evaluate::{evaluate, Attempt},
    score::ScoreRecord,
    words::{Language, WordLength, WordSource},
    Result, SessionError,
};

/// The number of guesses a session allows before it is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// A source of timestamps in milliseconds.
///
/// Only elapsed time within one session is ever computed from these, so the
/// clock has to be monotonic over minutes, not absolutely accurate.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A clock before the Unix epoch reads as 0.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// The settings a session is created with, immutable for its lifetime.
///
/// Changing language or length means starting a new [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct PuzzleConfig {
    pub language: Language,
    pub length: WordLength,
}

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Outcome {
    InProgress,

    /// Terminal: a guess matched the target.
    Won,

    /// Terminal: six guesses used without a match.
    Lost,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won => write!(f, "won"),
            Outcome::Lost => write!(f, "lost"),
        }
    }
}

/// The evaluated attempts of one session, in submission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct History {
    inner: Vec<Attempt>,
}

impl History {
    /// Adds an attempt, refusing once [`MAX_ATTEMPTS`] are recorded.
    pub(crate) fn push(&mut self, attempt: Attempt) -> Result<usize, Attempt> {
        if self.inner.len() < MAX_ATTEMPTS {
            self.inner.push(attempt);
            Ok(self.inner.len() - 1)
        } else {
            Err(attempt)
        }
    }

    /// Returns a slice of the attempts so far.
    pub fn inner(&self) -> &[Attempt] {
        self.inner.as_slice()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true once all [`MAX_ATTEMPTS`] guesses are used.
    pub fn finished(&self) -> bool {
        self.inner.len() >= MAX_ATTEMPTS
    }
}

impl Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some((last, rest)) = self.inner.split_last() {
            for attempt in rest {
                writeln!(f, "{}", attempt)?;
            }
            write!(f, "{}", last)?;
        }
        Ok(())
    }
}

/// One running or finished puzzle.
///
/// A session is an explicitly owned value: callers construct one per player
/// context with [`start()`](Session::start), feed it guesses, and replace it
/// with a fresh one for the next game. There is no hidden global state.
///
/// The hidden target never leaks while the session is in progress;
/// [`revealed_target()`](Session::revealed_target) only answers once the
/// session is terminal, so a lost game can show the word.
///
/// # Examples
///
/// ```rust
/// use wordrally::{
///     BuiltinWords, Language, Outcome, PuzzleConfig, Session, SystemClock, WordLength,
/// };
///
/// let mut words = BuiltinWords::seeded(1);
/// let clock = SystemClock;
/// let config = PuzzleConfig {
///     language: Language::De,
///     length: WordLength::Five,
/// };
///
/// let mut session = Session::start(config, &mut words, &clock)?;
/// assert_eq!(session.outcome(), Outcome::InProgress);
/// assert!(session.revealed_target().is_none());
///
/// let attempt = session.submit_guess("blume", &clock)?;
/// assert_eq!(attempt.len(), 5);
/// #
/// # Ok::<_, wordrally::WordRallyError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    config: PuzzleConfig,
    target: String,
    history: History,
    started_at_ms: u64,
    ended_at_ms: Option<u64>,
    outcome: Outcome,
    score: Option<ScoreRecord>,
}

impl Session {
    /// Starts a new game: draws a target for `config` and resets everything.
    ///
    /// Fails only if the word source has no entries for the configuration.
    pub fn start(
        config: PuzzleConfig,
        words: &mut dyn WordSource,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let target = words.random_word(config.language, config.length)?;

        Ok(Session {
            config,
            target,
            history: History::default(),
            started_at_ms: clock.now_millis(),
            ended_at_ms: None,
            outcome: Outcome::InProgress,
            score: None,
        })
    }

    /// Evaluates one guess and advances the state machine.
    ///
    /// The guess is lowercased first, then checked for length. A guess with
    /// the wrong number of characters comes back as
    /// [`SessionError::WrongLength`] without touching the history; a guess
    /// against a finished session comes back as
    /// [`SessionError::NotInProgress`]. Both are recoverable.
    ///
    /// An accepted guess is evaluated and appended. If every letter is
    /// correct the session is won; otherwise, if this was the sixth attempt,
    /// it is lost. On either transition the end timestamp is taken from
    /// `clock`, and on a win the [`ScoreRecord`] is computed once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordrally::{
    ///     BuiltinWords, Language, PuzzleConfig, Session, SessionError, SystemClock,
    ///     WordLength, WordRallyError,
    /// };
    ///
    /// let mut words = BuiltinWords::seeded(1);
    /// let clock = SystemClock;
    /// let config = PuzzleConfig {
    ///     language: Language::En,
    ///     length: WordLength::Six,
    /// };
    /// let mut session = Session::start(config, &mut words, &clock)?;
    ///
    /// // Five letters into a six-letter puzzle: rejected, nothing recorded.
    /// let err = session.submit_guess("apple", &clock).unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     WordRallyError::Session {
    ///         kind: SessionError::WrongLength { expected: 6, actual: 5 },
    ///     },
    /// ));
    /// assert!(session.history().is_empty());
    /// #
    /// # Ok::<_, wordrally::WordRallyError>(())
    /// ```
    pub fn submit_guess(&mut self, guess: &str, clock: &dyn Clock) -> Result<Attempt> {
        if self.outcome != Outcome::InProgress {
            return Err(SessionError::NotInProgress(self.outcome).into());
        }

        let guess = guess.to_lowercase();
        let expected = self.config.length.len();
        let actual = guess.chars().count();
        if actual != expected {
            return Err(SessionError::WrongLength { expected, actual }.into());
        }

        let attempt = evaluate(&guess, &self.target);
        // A full history means the session already went terminal above, so
        // this push cannot be refused.
        let _ = self.history.push(attempt.clone());

        if attempt.is_winning() {
            self.finish(Outcome::Won, clock);
        } else if self.history.finished() {
            self.finish(Outcome::Lost, clock);
        }

        Ok(attempt)
    }

    fn finish(&mut self, outcome: Outcome, clock: &dyn Clock) {
        let now = clock.now_millis();
        self.outcome = outcome;
        self.ended_at_ms = Some(now);
        if outcome == Outcome::Won {
            self.score = Some(ScoreRecord::compute(
                self.history.len() as u32,
                self.elapsed_at(now),
            ));
        }
    }

    fn elapsed_at(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_at_ms) / 1000
    }

    pub fn config(&self) -> PuzzleConfig {
        self.config
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns how many guesses are still available.
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Returns whole seconds since the session started, frozen at the end
    /// timestamp once the session is terminal.
    ///
    /// While in progress this reads `clock`, which is what a periodic
    /// elapsed-time display ticks against.
    pub fn elapsed_seconds(&self, clock: &dyn Clock) -> u64 {
        match self.ended_at_ms {
            Some(end) => self.elapsed_at(end),
            None => self.elapsed_at(clock.now_millis()),
        }
    }

    /// Returns the score, computed once when the session was won.
    ///
    /// `None` while in progress and for lost sessions: scoring is tied to
    /// winning. This is also the candidate to offer a
    /// [`HighscoreTable`](crate::HighscoreTable).
    pub fn score(&self) -> Option<&ScoreRecord> {
        self.score.as_ref()
    }

    /// Returns the target word once the session is terminal, for display.
    ///
    /// While the session is in progress the target stays hidden and this
    /// returns `None`.
    pub fn revealed_target(&self) -> Option<&str> {
        match self.outcome {
            Outcome::InProgress => None,
            Outcome::Won | Outcome::Lost => Some(&self.target),
        }
    }
}
