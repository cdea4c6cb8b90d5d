//! File-backed leaderboard storage
//!
//! A `ScoreStore` wraps an explicit file path injected at construction.
//! Loads distinguish "no file yet" from "unreadable" and "malformed", but
//! gameplay always falls back to an empty leaderboard; writes go through a
//! sibling tmp file and a rename so a crash mid-write cannot clobber the
//! previous good file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::highscores::HighScores;

/// Default score file name, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "scores.json";

/// Why a load produced no leaderboard
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("score file not found")]
    NotFound,
    #[error("failed to read score file: {0}")]
    Io(#[from] io::Error),
    #[error("score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable top-10 leaderboard, stored as a JSON array of
/// `{"name": …, "score": …}` records.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored leaderboard, reporting why it could not be read
    pub fn try_load(&self) -> Result<HighScores, LoadError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(LoadError::NotFound),
            Err(err) => return Err(LoadError::Io(err)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Load the stored leaderboard. A missing, unreadable, or malformed
    /// file yields the empty leaderboard; never an error to the caller.
    pub fn load(&self) -> HighScores {
        match self.try_load() {
            Ok(scores) => scores,
            Err(LoadError::NotFound) => {
                log::debug!("no score file at {}, starting fresh", self.path.display());
                HighScores::new()
            }
            Err(err) => {
                log::warn!(
                    "ignoring unreadable score file {}: {err}",
                    self.path.display()
                );
                HighScores::new()
            }
        }
    }

    /// Record a score on the stored leaderboard and write it back.
    /// Returns the rank achieved, or None if the score fell off the top
    /// 10. Write failures are logged and swallowed; the in-memory rank is
    /// still reported.
    pub fn submit(&self, name: &str, score: u32) -> Option<usize> {
        let mut scores = self.load();
        let rank = scores.record(name, score);
        if let Err(err) = self.write(&scores) {
            log::warn!("failed to save scores to {}: {err}", self.path.display());
        }
        rank
    }

    /// Write the whole leaderboard: tmp file first, then rename over the
    /// destination so readers only ever see a complete file.
    fn write(&self, scores: &HighScores) -> io::Result<()> {
        let json = serde_json::to_vec(scores)?;
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)
    }
}
