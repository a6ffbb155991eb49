//! Durable slots for the personal best and the highscore table.
//!
//! The core treats persistence as a pair of key-value slots behind the
//! [`ScoreStore`] trait. Absence on load is not an error, just "no prior
//! score", and a failed write never touches a running
//! [`Session`](crate::Session); callers fire and forget.

#[cfg(feature = "serde")]
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use crate::{
    score::{HighscoreTable, ScoreRecord},
    Result,
};
#[cfg(feature = "serde")]
use crate::{HighscoreEntry, StoreError};

/// Where scores live between sessions.
pub trait ScoreStore {
    /// Loads the personal best, `None` if none was ever saved.
    fn load_highscore(&self) -> Result<Option<ScoreRecord>>;

    /// Saves the personal best, replacing any previous one.
    fn save_highscore(&mut self, record: &ScoreRecord) -> Result<()>;

    /// Loads the table, empty if none was ever saved.
    fn load_table(&self) -> Result<HighscoreTable>;

    /// Saves the whole table.
    fn save_table(&mut self, table: &HighscoreTable) -> Result<()>;
}

/// An in-process store for tests and headless embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    highscore: Option<ScoreRecord>,
    table: HighscoreTable,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn load_highscore(&self) -> Result<Option<ScoreRecord>> {
        Ok(self.highscore)
    }

    fn save_highscore(&mut self, record: &ScoreRecord) -> Result<()> {
        self.highscore = Some(*record);
        Ok(())
    }

    fn load_table(&self) -> Result<HighscoreTable> {
        Ok(self.table.clone())
    }

    fn save_table(&mut self, table: &HighscoreTable) -> Result<()> {
        self.table = table.clone();
        Ok(())
    }
}

#[cfg(feature = "serde")]
const HIGHSCORE_FILE: &str = "highscore.json";
#[cfg(feature = "serde")]
const TABLE_FILE: &str = "highscores.json";

/// A store that keeps each slot as a JSON file in one directory.
///
/// The directory is created on the first save. Loading from a directory
/// that does not exist yet, or has no file for a slot, returns the empty
/// value rather than an error.
#[cfg(feature = "serde")]
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

#[cfg(feature = "serde")]
impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonStore { dir: dir.into() }
    }

    fn read<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(path).map_err(StoreError::Io)?;
        let value = serde_json::from_reader(BufReader::new(file)).map_err(StoreError::Serde)?;
        Ok(Some(value))
    }

    // ?Sized so the table can be written straight from its entry slice.
    fn write<T>(&self, name: &str, value: &T) -> Result<()>
    where
        T: serde::Serialize + ?Sized,
    {
        fs::create_dir_all(&self.dir).map_err(StoreError::Io)?;
        let file = File::create(self.dir.join(name)).map_err(StoreError::Io)?;
        serde_json::to_writer(BufWriter::new(file), value).map_err(StoreError::Serde)?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl ScoreStore for JsonStore {
    fn load_highscore(&self) -> Result<Option<ScoreRecord>> {
        self.read(HIGHSCORE_FILE)
    }

    fn save_highscore(&mut self, record: &ScoreRecord) -> Result<()> {
        self.write(HIGHSCORE_FILE, record)
    }

    fn load_table(&self) -> Result<HighscoreTable> {
        // Entries on disk are outside the crate's control; rebuilding the
        // table re-sorts and re-truncates them.
        let entries: Option<Vec<HighscoreEntry>> = self.read(TABLE_FILE)?;
        Ok(HighscoreTable::from_entries(entries.unwrap_or_default()))
    }

    fn save_table(&mut self, table: &HighscoreTable) -> Result<()> {
        self.write(TABLE_FILE, table.entries())
    }
}
