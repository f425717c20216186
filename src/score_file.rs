//! Best-score persistence.
//!
//! A single small JSON file in the user's home directory. Loading is
//! forgiving: a missing or corrupt file just means no record yet.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = ".blockfall_highscore.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
struct ScoreRecord {
    best: u32,
}

/// Where the score file lives: the home directory, or the working
/// directory when `$HOME` is unset.
pub fn default_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(FILE_NAME)
}

/// Best score on record; 0 when no readable record exists.
pub fn load(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| serde_json::from_str::<ScoreRecord>(&text).ok())
        .map(|record| record.best)
        .unwrap_or(0)
}

/// Persist `best` if it beats the stored record. Returns whether a write
/// happened.
pub fn save_if_better(path: &Path, best: u32) -> Result<bool> {
    if best <= load(path) {
        return Ok(false);
    }
    let text = serde_json::to_string(&ScoreRecord { best })?;
    fs::write(path, text).with_context(|| format!("writing score file {}", path.display()))?;
    Ok(true)
}
