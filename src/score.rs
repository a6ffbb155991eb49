//! Scoring a won session and keeping the top-ten table.

use std::cmp::Reverse;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::session::MAX_ATTEMPTS;

/// The score for one won session.
///
/// Computed exactly once, at the moment the session transitions to
/// [`Outcome::Won`](crate::Outcome::Won). Fast play on few attempts scores
/// high; `score` goes negative for very slow play, which is fine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ScoreRecord {
    /// `(6 - attempts_used) * 10 - elapsed_seconds / 10`.
    pub score: i32,

    /// How many guesses it took, 1 through 6.
    pub attempts_used: u32,

    /// Whole seconds between session start and the winning guess.
    pub elapsed_seconds: u64,

    /// A 1 to 3 rating: 3 for winning within 3 attempts, 2 within 5,
    /// 1 otherwise.
    pub stars: u8,
}

impl ScoreRecord {
    pub(crate) fn compute(attempts_used: u32, elapsed_seconds: u64) -> Self {
        // The time penalty saturates instead of wrapping on absurd elapsed
        // times.
        let penalty = i32::try_from(elapsed_seconds / 10).unwrap_or(i32::MAX);
        let score =
            ((MAX_ATTEMPTS as i32 - attempts_used as i32) * 10).saturating_sub(penalty);
        let stars = match attempts_used {
            0..=3 => 3,
            4..=5 => 2,
            _ => 1,
        };

        ScoreRecord {
            score,
            attempts_used,
            elapsed_seconds,
            stars,
        }
    }
}

/// A [`ScoreRecord`] with the optional player name shown in the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct HighscoreEntry {
    pub name: Option<String>,
    pub record: ScoreRecord,
}

impl HighscoreEntry {
    pub fn new(record: ScoreRecord) -> Self {
        HighscoreEntry { name: None, record }
    }

    pub fn named(name: impl Into<String>, record: ScoreRecord) -> Self {
        HighscoreEntry {
            name: Some(name.into()),
            record,
        }
    }
}

/// The top-ten table, sorted by score descending and elapsed time ascending.
///
/// The table owns admission: the session only emits a candidate
/// [`ScoreRecord`], and [`admit()`](HighscoreTable::admit) decides whether
/// it gets in, keeps the order, and drops the overflow.
///
/// # Examples
///
/// ```rust
/// use wordrally::{HighscoreEntry, HighscoreTable, ScoreRecord};
///
/// let record = ScoreRecord { score: 40, attempts_used: 2, elapsed_seconds: 4, stars: 3 };
///
/// let mut table = HighscoreTable::new();
/// assert!(table.qualifies(&record));
/// assert!(table.admit(HighscoreEntry::named("mia", record)));
/// assert_eq!(table.best().unwrap().record.score, 40);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct HighscoreTable {
    entries: Vec<HighscoreEntry>,
}

impl HighscoreTable {
    /// The most entries the table will hold.
    pub const CAPACITY: usize = 10;

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from loaded entries, restoring order and capacity.
    ///
    /// Stores are outside the crate, so entries read back from one are
    /// re-sorted and re-truncated here rather than trusted.
    pub fn from_entries(entries: Vec<HighscoreEntry>) -> Self {
        let mut table = HighscoreTable { entries };
        table.sort_and_truncate();
        table
    }

    pub fn entries(&self) -> &[HighscoreEntry] {
        self.entries.as_slice()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the best entry, if any.
    pub fn best(&self) -> Option<&HighscoreEntry> {
        self.entries.first()
    }

    /// Returns true if a candidate would be admitted: there is room, or it
    /// beats the current tail, or it ties the tail's score in less time.
    pub fn qualifies(&self, record: &ScoreRecord) -> bool {
        if self.entries.len() < Self::CAPACITY {
            return true;
        }
        match self.entries.last() {
            Some(tail) => {
                record.score > tail.record.score
                    || (record.score == tail.record.score
                        && record.elapsed_seconds < tail.record.elapsed_seconds)
            }
            None => true,
        }
    }

    /// Inserts a candidate if it qualifies and returns whether it did.
    ///
    /// The table stays sorted and never grows past
    /// [`CAPACITY`](Self::CAPACITY).
    pub fn admit(&mut self, entry: HighscoreEntry) -> bool {
        if !self.qualifies(&entry.record) {
            return false;
        }
        self.entries.push(entry);
        self.sort_and_truncate();
        true
    }

    fn sort_and_truncate(&mut self) {
        // Stable sort: on full ties, earlier admissions stay ahead.
        self.entries
            .sort_by_key(|e| (Reverse(e.record.score), e.record.elapsed_seconds));
        self.entries.truncate(Self::CAPACITY);
    }
}
