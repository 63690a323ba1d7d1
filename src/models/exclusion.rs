//! Exclusion sets.
//!
//! Names of mentors and startups switched off by the user. Owned by the
//! caller and passed into each scheduling run; the scheduler only reads
//! them. Names that do not appear in the rosters are ignored.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MentoringError, Result};

/// Mentor and startup exclusion sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclusions {
    /// Excluded mentor names.
    #[serde(default)]
    pub mentors: BTreeSet<String>,
    /// Excluded startup names.
    #[serde(default)]
    pub startups: BTreeSet<String>,
}

impl Exclusions {
    /// Creates empty exclusion sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds excluded mentor names.
    pub fn with_mentors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mentors.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds excluded startup names.
    pub fn with_startups<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.startups.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether the named mentor is switched off.
    pub fn is_mentor_excluded(&self, name: &str) -> bool {
        self.mentors.contains(name)
    }

    /// Whether the named startup is switched off.
    pub fn is_startup_excluded(&self, name: &str) -> bool {
        self.startups.contains(name)
    }

    /// Flips a mentor's exclusion. Returns `true` if the mentor is now excluded.
    pub fn toggle_mentor(&mut self, name: &str) -> bool {
        toggle(&mut self.mentors, name)
    }

    /// Flips a startup's exclusion. Returns `true` if the startup is now excluded.
    pub fn toggle_startup(&mut self, name: &str) -> bool {
        toggle(&mut self.startups, name)
    }

    /// Whether nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.mentors.is_empty() && self.startups.is_empty()
    }

    /// Loads persisted exclusions; a missing file yields empty sets.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| MentoringError::parse(path, e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(MentoringError::io(path, e)),
        }
    }

    /// Persists exclusions as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| MentoringError::serialize(path, e))?;
        std::fs::write(path, json).map_err(|e| MentoringError::io(path, e))
    }
}

fn toggle(set: &mut BTreeSet<String>, name: &str) -> bool {
    if set.remove(name) {
        false
    } else {
        set.insert(name.to_string());
        true
    }
}
